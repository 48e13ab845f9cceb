use std::fmt;

use serde::Serialize;

/// A single entry on the to-do list.
///
/// Items are only built by [`SubmitForm::validate`] or [`TodoItem::seed`], so
/// every stored item has a non-empty trimmed task and an email containing `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub task: String,
    pub email: String,
    pub priority: Priority,
}

impl TodoItem {
    /// The item every fresh list starts with.
    pub fn seed() -> Self {
        Self {
            task: "Buy Milk".to_string(),
            email: "antchrobiaka@gmail.com".to_string(),
            priority: Priority::Medium,
        }
    }
}

/// How urgent a to-do item is.
///
/// Serialized by its title-case name, which is also what templates see.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    /// Normalize a submitted value: trim, title-case, then match.
    /// Anything outside the fixed set becomes `Low`.
    pub fn parse_lenient(raw: &str) -> Self {
        Self::from_str(&title_case(raw.trim())).unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Raw body of a `/submit` request. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmitForm {
    pub task: Option<String>,
    pub email: Option<String>,
    pub priority: Option<String>,
}

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("task is empty")]
    EmptyTask,
    #[error("email is empty or has no '@'")]
    InvalidEmail,
}

impl SubmitForm {
    /// Build from decoded form pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "task" => &mut form.task,
                "email" => &mut form.email,
                "priority" => &mut form.priority,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        form
    }

    /// Check the fields in order, stopping at the first failure.
    ///
    /// Priority never rejects a submission; unknown values fall back to `Low`.
    pub fn validate(&self) -> Result<TodoItem, Rejection> {
        let task = self.task.as_deref().unwrap_or("").trim();
        if task.is_empty() {
            return Err(Rejection::EmptyTask);
        }

        let email = self.email.as_deref().unwrap_or("").trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Rejection::InvalidEmail);
        }

        let priority = Priority::parse_lenient(self.priority.as_deref().unwrap_or(""));

        Ok(TodoItem {
            task: task.to_string(),
            email: email.to_string(),
            priority,
        })
    }
}
