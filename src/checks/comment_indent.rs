use crate::lint::{Category, Context, ExitDirective, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Comment markers must start the line.
pub struct CommentIndentCheck;

impl Check for CommentIndentCheck {
    fn id(&self) -> CheckId {
        CheckId::CommentIndent
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Comment
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        let indent = line
            .text
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        if indent == 0 {
            return None;
        }
        Some(
            Violation::new(
                Category::Formatting,
                "comment marker must be at the start of the line",
                Mark::span(0, indent),
            )
            .with_suggestion(line.text.trim_start())
            .with_exit(ExitDirective::StopLine),
        )
    }
}

#[cfg(test)]
#[path = "comment_indent_tests.rs"]
mod tests;
