//! Violation types reported by the validators
//!
//! Violations name the field and the broken rule but never carry the value,
//! so they are safe to log.

use crate::types::{Subject, ValidationResponse};
use std::fmt;

/// Rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Field absent, `null`, or not a string
    Missing,
    /// Field empty or whitespace-only
    Blank,
    /// Field did not match its pattern
    PatternMismatch,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Missing => "missing",
            Rule::Blank => "blank",
            Rule::PatternMismatch => "pattern_mismatch",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl Violation {
    pub fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(field, Rule::Missing)
    }

    pub fn blank(field: &'static str) -> Self {
        Self::new(field, Rule::Blank)
    }

    pub fn pattern_mismatch(field: &'static str) -> Self {
        Self::new(field, Rule::PatternMismatch)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// Result of checking one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    subject: Subject,
    violations: Vec<Violation>,
}

impl Verdict {
    pub fn new(subject: Subject, violations: Vec<Violation>) -> Self {
        Self { subject, violations }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn approved(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Names of the fields that failed, in the order they were checked
    pub fn failed_fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn response(&self) -> ValidationResponse {
        ValidationResponse::new(self.subject, self.approved())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "{} approved", self.subject);
        }

        write!(f, "{} rejected:", self.subject)?;
        for violation in &self.violations {
            write!(f, " [{}]", violation)?;
        }
        Ok(())
    }
}
