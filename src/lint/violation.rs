use serde::Serialize;

use super::mark::Mark;

/// What the runner does after a check fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitDirective {
    /// Keep running the remaining checks on this line.
    #[default]
    Continue,
    /// Skip the remaining checks for this line.
    StopLine,
    /// Abort the whole file pass.
    StopAllLines,
    /// Deactivate the firing check for the rest of the file.
    DisableCheckForFile,
}

/// Broad classification of what a violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Structural,
    Formatting,
    Encoding,
    Grammar,
    SemanticOrder,
}

impl Category {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Formatting => "formatting",
            Self::Encoding => "encoding",
            Self::Grammar => "grammar",
            Self::SemanticOrder => "semantic_order",
        }
    }
}

/// One diagnostic produced by a check: the offending spans, a message, an
/// optional full-line replacement, and the directive for the runner.
///
/// `marks` is never empty for a well-formed violation; the runner treats an
/// empty list as an internal defect of the producing check.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub exit: ExitDirective,
    pub marks: Vec<Mark>,
    pub category: Category,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Violation {
    #[must_use]
    pub fn new(category: Category, message: impl Into<String>, mark: Mark) -> Self {
        Self {
            exit: ExitDirective::Continue,
            marks: vec![mark],
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    /// A violation covering several independent spans on one line.
    #[must_use]
    pub fn with_marks(category: Category, message: impl Into<String>, marks: Vec<Mark>) -> Self {
        debug_assert!(!marks.is_empty(), "violation must carry at least one mark");
        Self {
            exit: ExitDirective::Continue,
            marks,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Same violation carrying a different exit directive; spans untouched.
    #[must_use]
    pub const fn with_exit(mut self, exit: ExitDirective) -> Self {
        self.exit = exit;
        self
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.marks.is_empty()
    }

    /// Fill unresolved mark endpoints against the line's character length.
    pub fn resolve_marks(&mut self, line_len: usize) {
        for mark in &mut self.marks {
            mark.resolve(line_len);
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
