use crate::lint::{Category, Context, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Signal files are plain ASCII; every maximal run of characters outside the
/// printable range 0x20-0x7E becomes its own mark within one violation.
pub struct NonAsciiCheck;

const fn is_allowed(c: char) -> bool {
    matches!(c, '\x20'..='\x7e')
}

impl NonAsciiCheck {
    /// The line with disallowed runs deleted and any doubled spaces the
    /// deletion left behind collapsed.
    fn cleaned(chars: &[char]) -> String {
        let mut out = String::with_capacity(chars.len());
        for &c in chars.iter().filter(|&&c| is_allowed(c)) {
            if c == ' ' && out.ends_with(' ') {
                continue;
            }
            out.push(c);
        }
        out
    }
}

impl Check for NonAsciiCheck {
    fn id(&self) -> CheckId {
        CheckId::NonAscii
    }

    fn applies_to(&self, _kind: LineKind) -> bool {
        true
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        let chars: Vec<char> = line.text.chars().collect();

        let mut marks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if is_allowed(chars[i]) {
                i += 1;
                continue;
            }
            let start = i;
            while i < chars.len() && !is_allowed(chars[i]) {
                i += 1;
            }
            marks.push(Mark::span(start, i));
        }

        if marks.is_empty() {
            return None;
        }
        Some(
            Violation::with_marks(Category::Encoding, "non-ASCII character found", marks)
                .with_suggestion(Self::cleaned(&chars)),
        )
    }
}

#[cfg(test)]
#[path = "non_ascii_tests.rs"]
mod tests;
