use regex::Regex;

use crate::lint::{Category, Context, ExitDirective, Line, LineKind, Mark, Violation};

use super::{Check, CheckId, similarity};

/// Every key the format knows, header keys first.
pub const VALID_KEYS: &[&str] = &[
    "Filetype",
    "Version",
    "name",
    "type",
    "protocol",
    "address",
    "command",
    "frequency",
    "duty_cycle",
    "data",
];

const KEY_VALUE_PATTERN: &str = r"^[A-Za-z_-]+: .+$";

/// Minimum normalized similarity before a near-miss key is worth suggesting.
/// Below this the unknown key is reported without a replacement.
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Validates the `key: value` grammar of a line, then the key against the
/// fixed vocabulary.
pub struct KeyValueCheck {
    pattern: Regex,
}

impl KeyValueCheck {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(KEY_VALUE_PATTERN).expect("Invalid regex"),
        }
    }
}

impl Default for KeyValueCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for KeyValueCheck {
    fn id(&self) -> CheckId {
        CheckId::KeyValue
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Normal
    }

    fn suppressed_by(&self) -> &'static [CheckId] {
        &[CheckId::Descriptor]
    }

    fn inspect(&mut self, _ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        let chars: Vec<char> = line.text.chars().collect();

        let Some(colon) = chars.iter().position(|&c| c == ':') else {
            return Some(
                Violation::new(
                    Category::Grammar,
                    "line is not a key-value pair",
                    Mark::to_line_end(0),
                )
                .with_exit(ExitDirective::StopLine),
            );
        };

        if chars.get(colon + 1) != Some(&' ') {
            let mut violation = Violation::new(
                Category::Grammar,
                "missing space after ':'",
                Mark::point(colon),
            );
            if colon + 1 < chars.len() {
                let mut fixed: String = chars[..=colon].iter().collect();
                fixed.push(' ');
                fixed.extend(&chars[colon + 1..]);
                violation = violation.with_suggestion(fixed);
            }
            return Some(violation);
        }

        if !self.pattern.is_match(line.text) {
            return Some(Violation::new(
                Category::Grammar,
                format!("key-value pattern does not match '{KEY_VALUE_PATTERN}'"),
                Mark::to_line_end(0),
            ));
        }

        let key: String = chars[..colon].iter().collect();
        if VALID_KEYS.contains(&key.as_str()) {
            return None;
        }

        let mut violation = Violation::new(
            Category::Grammar,
            format!("unknown key '{key}'"),
            Mark::span(0, colon),
        );
        if let Some(best) = similarity::closest(&key, VALID_KEYS, SIMILARITY_CUTOFF) {
            let value: String = chars[colon + 2..].iter().collect();
            violation = violation.with_suggestion(format!("{best}: {value}"));
        }
        Some(violation)
    }
}

#[cfg(test)]
#[path = "key_value_tests.rs"]
mod tests;
