use std::fmt;

/// A single rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulates violations so a request reports every bad field at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Records a violation when `value` is empty or whitespace only.
    pub fn require_not_blank(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    /// Records a violation when the trimmed `value` has more than `max`
    /// characters. Matches how `VARCHAR(max)` columns count length.
    pub fn require_max_length(&mut self, field: &str, value: &str, max: usize, message: &str) {
        if value.trim().chars().count() > max {
            self.push(field, message);
        }
    }

    /// Returns `Ok(())` when nothing was recorded, otherwise the collected list.
    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}
