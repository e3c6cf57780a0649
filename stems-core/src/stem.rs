//! The stem text format: one `++` record per line.

use std::fmt;

use crate::location::LineRange;

/// Type name written for a cell whose target module could not be resolved.
pub const UNRESOLVED_TYPE: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StemRecord<'doc> {
    /// `++ module <name> file <path> lines <start> - <end>`
    Module {
        name: &'doc str,
        path: &'doc str,
        lines: LineRange,
    },
    /// `++ comp <instance> type <target> parent <parent>`
    Component {
        instance: &'doc str,
        target: &'doc str,
        parent: &'doc str,
    },
}

impl fmt::Display for StemRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StemRecord::Module { name, path, lines } => write!(
                f,
                "++ module {name} file {path} lines {} - {}",
                lines.start, lines.end
            ),
            StemRecord::Component {
                instance,
                target,
                parent,
            } => write!(f, "++ comp {instance} type {target} parent {parent}"),
        }
    }
}
