//! Closed status and priority vocabularies.
//!
//! # Responsibility
//! - Define the fixed set of project statuses and task priorities.
//! - Convert between enum members and their human-readable labels.
//!
//! # Invariants
//! - The label is the persisted and displayed form; `from_label` accepts
//!   exactly the recognized labels and nothing else.
//! - `ALL` keeps declaration order, which is also the pick-list order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state of a project.
///
/// Tasks reuse this vocabulary for their own `status` field; there is no
/// separate task status set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Планируется")]
    Planning,
    #[serde(rename = "В работе")]
    InProgress,
    #[serde(rename = "Тестирование")]
    Testing,
    #[serde(rename = "Завершён")]
    Completed,
    #[serde(rename = "Ожидание")]
    OnHold,
}

impl ProjectStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::InProgress,
        Self::Testing,
        Self::Completed,
        Self::OnHold,
    ];

    /// Human-readable label, also the persisted form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Планируется",
            Self::InProgress => "В работе",
            Self::Testing => "Тестирование",
            Self::Completed => "Завершён",
            Self::OnHold => "Ожидание",
        }
    }

    /// Resolves a label back into its status.
    ///
    /// # Errors
    /// - Returns `ValidationError::UnknownStatusLabel` for anything outside
    ///   the closed set, including case or whitespace variants.
    pub fn from_label(value: &str) -> Result<Self, ValidationError> {
        match value {
            "Планируется" => Ok(Self::Planning),
            "В работе" => Ok(Self::InProgress),
            "Тестирование" => Ok(Self::Testing),
            "Завершён" => Ok(Self::Completed),
            "Ожидание" => Ok(Self::OnHold),
            other => Err(ValidationError::UnknownStatusLabel(other.to_string())),
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "Низкий")]
    Low,
    #[serde(rename = "Средний")]
    Medium,
    #[serde(rename = "Высокий")]
    High,
    #[serde(rename = "Срочный")]
    Critical,
}

impl TaskPriority {
    /// Every priority in declaration order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Human-readable label, also the persisted form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Низкий",
            Self::Medium => "Средний",
            Self::High => "Высокий",
            Self::Critical => "Срочный",
        }
    }

    /// Resolves a label back into its priority.
    ///
    /// # Errors
    /// - Returns `ValidationError::UnknownPriorityLabel` for anything outside
    ///   the closed set.
    pub fn from_label(value: &str) -> Result<Self, ValidationError> {
        match value {
            "Низкий" => Ok(Self::Low),
            "Средний" => Ok(Self::Medium),
            "Высокий" => Ok(Self::High),
            "Срочный" => Ok(Self::Critical),
            other => Err(ValidationError::UnknownPriorityLabel(other.to_string())),
        }
    }
}

/// Rejection of a label that is not part of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    UnknownStatusLabel(String),
    UnknownPriorityLabel(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatusLabel(value) => {
                write!(f, "unrecognized project status label `{value}`")
            }
            Self::UnknownPriorityLabel(value) => {
                write!(f, "unrecognized task priority label `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}
