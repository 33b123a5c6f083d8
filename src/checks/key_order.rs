use crate::lint::{Category, Context, ExitDirective, Line, LineKind, Mark, Violation};

use super::{Check, CheckId};

/// Header keys that may appear anywhere relative to signal records.
const EXEMPT_KEYS: &[&str] = &["Filetype", "Version"];

/// What may legally follow a key: one key, a choice of keys, or a branch
/// selected by the just-seen key's value.
#[derive(Debug, Clone, Copy)]
enum Transition {
    Next(&'static str),
    AnyOf(&'static [&'static str]),
    ByValue(&'static [(&'static str, &'static str)]),
}

/// The fixed edge table of the order automaton. Only `type` branches on its
/// value today: a parsed record continues with protocol data, a raw record
/// with timing data.
fn transition(key: &str) -> Option<Transition> {
    Some(match key {
        "name" => Transition::Next("type"),
        "type" => Transition::ByValue(&[("parsed", "protocol"), ("raw", "frequency")]),
        "protocol" => Transition::Next("address"),
        "address" => Transition::Next("command"),
        "command" => Transition::Next("name"),
        "frequency" => Transition::Next("duty_cycle"),
        "duty_cycle" => Transition::Next("data"),
        "data" => Transition::AnyOf(&["data", "name"]),
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    Unset,
    Key(&'static str),
    OneOf(&'static [&'static str]),
}

/// Walks the order automaton across the file's key lines. Any mismatch
/// disables the check for the rest of the file: one misordered record would
/// otherwise cascade false positives through every following line.
pub struct KeyOrderCheck {
    expected: Expected,
}

impl KeyOrderCheck {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected: Expected::Unset,
        }
    }

    fn fire(message: String, mark: Mark) -> Violation {
        Violation::new(Category::SemanticOrder, message, mark)
            .with_exit(ExitDirective::DisableCheckForFile)
    }
}

impl Default for KeyOrderCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for KeyOrderCheck {
    fn id(&self) -> CheckId {
        CheckId::KeyOrder
    }

    fn applies_to(&self, kind: LineKind) -> bool {
        kind == LineKind::Normal
    }

    fn suppressed_by(&self) -> &'static [CheckId] {
        &[CheckId::KeyValue]
    }

    fn inspect(&mut self, ctx: &mut Context, line: &Line<'_>) -> Option<Violation> {
        // Grammar is the key-value check's concern; a line it rejected never
        // reaches this point, and anything else unsplittable is not ours.
        let (key, value) = line.text.split_once(": ")?;
        if EXEMPT_KEYS.contains(&key) {
            return None;
        }

        let key_end = key.chars().count();

        let Some(next) = transition(key) else {
            return Some(Self::fire(
                format!("key '{key}' is not part of the signal key order"),
                Mark::span(0, key_end),
            ));
        };

        if self.expected == Expected::Unset {
            self.expected = Expected::Key("name");
        }

        match self.expected {
            Expected::Key(want) if key != want => {
                return Some(Self::fire(
                    format!("key '{want}' expected"),
                    Mark::span(0, key_end),
                ));
            }
            Expected::OneOf(options) if !options.contains(&key) => {
                return Some(Self::fire(
                    format!("one of keys '{}' expected", options.join(", ")),
                    Mark::span(0, key_end),
                ));
            }
            _ => {}
        }

        self.expected = match next {
            Transition::Next(k) => Expected::Key(k),
            Transition::AnyOf(keys) => Expected::OneOf(keys),
            Transition::ByValue(branches) => {
                let Some(&(_, target)) = branches.iter().find(|&&(v, _)| v == value) else {
                    let names: Vec<&str> = branches.iter().map(|&(v, _)| v).collect();
                    return Some(Self::fire(
                        format!("value must be one of [{}]", names.join(", ")),
                        Mark::to_line_end(key_end + 2),
                    ));
                };
                Expected::Key(target)
            }
        };

        ctx.confirm_key(key);
        None
    }
}

#[cfg(test)]
#[path = "key_order_tests.rs"]
mod tests;
