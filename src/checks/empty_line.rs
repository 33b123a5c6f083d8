use crate::lint::{Category, Context, ExitDirective, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Rejects blank and whitespace-only lines; the format has no use for them
/// and the remaining checks assume content.
pub struct EmptyLineCheck;

impl Check for EmptyLineCheck {
    fn id(&self) -> CheckId {
        CheckId::EmptyLine
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Normal
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        if !line.text.trim().is_empty() {
            return None;
        }
        Some(
            Violation::new(Category::Structural, "line is blank", Mark::to_line_end(0))
                .with_exit(ExitDirective::StopLine),
        )
    }
}

#[cfg(test)]
#[path = "empty_line_tests.rs"]
mod tests;
