use crate::lint::{Category, Context, ExitDirective, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Flags leading spaces, trailing spaces and runs of two or more interior
/// spaces. Leading and trailing runs each give a single-mark violation; the
/// interior runs are gathered into one multi-mark violation so downstream
/// renderers see one diagnostic per logical error.
pub struct WhitespaceCheck;

impl WhitespaceCheck {
    /// The line with both ends trimmed and interior space runs collapsed,
    /// offered as the replacement in every variant.
    fn normalized(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut prev_space = false;
        for c in text.trim().chars() {
            if c == ' ' {
                if prev_space {
                    continue;
                }
                prev_space = true;
            } else {
                prev_space = false;
            }
            out.push(c);
        }
        out
    }

    /// Marks for every run of two or more consecutive spaces.
    fn double_space_runs(chars: &[char]) -> Vec<Mark> {
        let mut marks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == ' ' {
                let start = i;
                while i < chars.len() && chars[i] == ' ' {
                    i += 1;
                }
                if i - start >= 2 {
                    marks.push(Mark::span(start, i));
                }
            } else {
                i += 1;
            }
        }
        marks
    }
}

impl Check for WhitespaceCheck {
    fn id(&self) -> CheckId {
        CheckId::Whitespace
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Normal
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        let text = line.text;
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();

        let leading = chars.iter().take_while(|&&c| c == ' ').count();
        if leading > 0 {
            return Some(
                Violation::new(
                    Category::Formatting,
                    "line starts with whitespace",
                    Mark::span(0, leading),
                )
                .with_suggestion(Self::normalized(text)),
            );
        }

        let trailing = chars.iter().rev().take_while(|&&c| c == ' ').count();
        if trailing > 0 {
            return Some(
                Violation::new(
                    Category::Formatting,
                    "line ends with whitespace",
                    Mark::span(len - trailing, len),
                )
                .with_suggestion(Self::normalized(text)),
            );
        }

        let runs = Self::double_space_runs(&chars);
        if !runs.is_empty() {
            return Some(
                Violation::with_marks(
                    Category::Formatting,
                    "repeated whitespace inside the line",
                    runs,
                )
                .with_suggestion(Self::normalized(text)),
            );
        }

        // The detectors above only know plain spaces. Anything else that
        // still trims away (stray tabs or control whitespace at the ends)
        // gets one coarse full-line report, and the rest of the line's
        // checks are skipped since their spans would not line up.
        if text.trim() != text {
            return Some(
                Violation::new(
                    Category::Formatting,
                    "line is padded with non-space whitespace",
                    Mark::to_line_end(0),
                )
                .with_suggestion(Self::normalized(text))
                .with_exit(ExitDirective::StopLine),
            );
        }

        None
    }
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
