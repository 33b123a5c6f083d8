use regex::Regex;

use crate::lint::{Category, Context, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Exact first line of every signal file.
pub const FILE_HEADER: &str = "Filetype: IR signals file";

/// Verifies the two-line descriptor header; lines past 2 are never inspected.
pub struct DescriptorCheck {
    version_pattern: Regex,
}

impl DescriptorCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version_pattern: Regex::new(r"^Version: \d+$").expect("Invalid regex"),
        }
    }
}

impl Default for DescriptorCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for DescriptorCheck {
    fn id(&self) -> CheckId {
        CheckId::Descriptor
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Normal
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        match line.number {
            1 if line.text != FILE_HEADER => Some(
                Violation::new(
                    Category::Structural,
                    format!("expected '{FILE_HEADER}' in first line"),
                    Mark::to_line_end(0),
                )
                .with_suggestion(FILE_HEADER),
            ),
            2 if !self.version_pattern.is_match(line.text) => Some(Violation::new(
                Category::Structural,
                "expected 'Version: <number>' in second line",
                Mark::to_line_end(0),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
