mod context;
mod mark;
mod violation;

pub use context::Context;
pub use mark::{Bound, Mark};
pub use violation::{Category, ExitDirective, Violation};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::checks::{self, Check, CheckId};

/// Which check list a line is offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Normal,
    Comment,
}

/// One line of the input file, 1-indexed, with its terminator stripped.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
    pub kind: LineKind,
}

impl<'a> Line<'a> {
    /// A line is a comment when its first non-whitespace character is `#`;
    /// indentation before the marker is left for the comment-indent check.
    #[must_use]
    pub fn classify(number: usize, text: &'a str) -> Self {
        let kind = if text.trim_start().starts_with('#') {
            LineKind::Comment
        } else {
            LineKind::Normal
        };
        Self { number, text, kind }
    }

    /// Length in characters, the unit marks are measured in.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Callback-captured record of one firing check.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub line_number: usize,
    pub line: String,
    pub violation: Violation,
}

/// Everything one file's pass produced, in emission order.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Drives the per-line, per-check loop over one file.
///
/// A linter is single-use: [`Linter::run`] consumes it, so check instances
/// (and the order automaton's state in particular) can never leak into
/// another file's pass.
pub struct Linter {
    checks: Vec<Box<dyn Check>>,
    context: Context,
    disabled: HashSet<CheckId>,
}

impl Linter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_checks(checks::default_checks())
    }

    /// Build a runner over a custom check list, in priority order.
    #[must_use]
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self {
            checks,
            context: Context::new(),
            disabled: HashSet::new(),
        }
    }

    /// Deactivate checks before the pass starts (config/CLI `disabled`).
    #[must_use]
    pub fn without(mut self, ids: &[CheckId]) -> Self {
        self.disabled.extend(ids.iter().copied());
        self
    }

    /// Lint `source`, invoking `on_diagnostic` once per firing check, in
    /// ascending line order and check-priority order within a line.
    /// Returns `true` iff no check fired.
    pub fn run<F>(mut self, path: &Path, source: &str, mut on_diagnostic: F) -> bool
    where
        F: FnMut(&Path, usize, &str, &Violation),
    {
        let mut clean = true;

        'lines: for (idx, text) in source.lines().enumerate() {
            let line = Line::classify(idx + 1, text);
            self.context.begin_line();

            for i in 0..self.checks.len() {
                let id = self.checks[i].id();
                if self.disabled.contains(&id) || !self.checks[i].applies_to(line.kind) {
                    continue;
                }
                let suppressors = self.checks[i].suppressed_by();
                if suppressors.iter().any(|s| self.context.has_failed(*s)) {
                    continue;
                }

                let Some(mut violation) = self.checks[i].inspect(&mut self.context, &line) else {
                    continue;
                };

                if !violation.is_well_formed() {
                    // A markless violation is a defect in the check itself,
                    // not in the input; surface it and keep going.
                    eprintln!(
                        "ir-lint: check '{id}' produced a diagnostic without spans at {}:{}, skipping it",
                        path.display(),
                        line.number
                    );
                    continue;
                }

                violation.resolve_marks(line.char_len());
                self.context.record_failure(id);
                clean = false;
                on_diagnostic(path, line.number, text, &violation);

                match violation.exit {
                    ExitDirective::Continue => {}
                    ExitDirective::StopLine => continue 'lines,
                    ExitDirective::DisableCheckForFile => {
                        self.disabled.insert(id);
                        continue 'lines;
                    }
                    ExitDirective::StopAllLines => break 'lines,
                }
            }
        }

        clean
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lint one file's contents with the default check set minus `disabled`,
/// collecting every diagnostic into a report.
#[must_use]
pub fn lint_source(path: &Path, source: &str, disabled: &[CheckId]) -> FileReport {
    let mut diagnostics = Vec::new();
    Linter::new()
        .without(disabled)
        .run(path, source, |_, line_number, line, violation| {
            diagnostics.push(Diagnostic {
                line_number,
                line: line.to_string(),
                violation: violation.clone(),
            });
        });
    FileReport {
        path: path.to_path_buf(),
        diagnostics,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
