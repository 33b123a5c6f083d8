mod comment_indent;
mod descriptor;
mod empty_line;
mod key_order;
mod key_value;
mod non_ascii;
mod similarity;
mod whitespace;

pub use comment_indent::CommentIndentCheck;
pub use descriptor::DescriptorCheck;
pub use empty_line::EmptyLineCheck;
pub use key_order::KeyOrderCheck;
pub use key_value::{KeyValueCheck, VALID_KEYS};
pub use non_ascii::NonAsciiCheck;
pub use whitespace::WhitespaceCheck;

use std::fmt;
use std::str::FromStr;

use crate::lint::{Context, Line, LineKind, Violation};

/// Identity of a check, used for suppression edges, deactivation and the
/// `disabled` configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckId {
    EmptyLine,
    CommentIndent,
    Whitespace,
    Descriptor,
    NonAscii,
    KeyValue,
    KeyOrder,
}

impl CheckId {
    pub const ALL: [Self; 7] = [
        Self::EmptyLine,
        Self::CommentIndent,
        Self::Whitespace,
        Self::Descriptor,
        Self::NonAscii,
        Self::KeyValue,
        Self::KeyOrder,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EmptyLine => "empty_line",
            Self::CommentIndent => "comment_indent",
            Self::Whitespace => "whitespace",
            Self::Descriptor => "descriptor",
            Self::NonAscii => "non_ascii",
            Self::KeyValue => "key_value",
            Self::KeyOrder => "key_order",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| format!("Unknown check name: {s}"))
    }
}

/// One lint rule. Stateless unless declared otherwise; only the key-order
/// check carries internal automaton state, scoped to one file run.
pub trait Check {
    fn id(&self) -> CheckId;

    /// Which line kinds this check inspects.
    fn applies_to(&self, kind: LineKind) -> bool;

    /// Checks whose failure on the same line suppresses this one.
    fn suppressed_by(&self) -> &'static [CheckId] {
        &[]
    }

    /// Inspect one line; `None` means the line passed.
    fn inspect(&mut self, ctx: &mut Context, line: &Line<'_>) -> Option<Violation>;
}

/// The default rule set, in priority order.
#[must_use]
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(EmptyLineCheck),
        Box::new(CommentIndentCheck),
        Box::new(WhitespaceCheck),
        Box::new(DescriptorCheck::new()),
        Box::new(NonAsciiCheck),
        Box::new(KeyValueCheck::new()),
        Box::new(KeyOrderCheck::new()),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
