//! Output levels and their badge styling.
//!
//! All coloring respects the `NO_COLOR` env var automatically via the
//! `colored` crate; nothing here is configurable.

use colored::{ColoredString, Colorize};

/// The level of a printed diagnostic line.
///
/// Each level carries a single badge initial and a background color:
///
/// - `Log` / `Table`: white badge, black text
/// - `Success`: green, `Info`: blue, `Warning`: yellow
/// - `Comment`: cyan, `Error`: red, `Object`: magenta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Plain progress note (`[L]`).
    Log,
    /// Completed operation (`[S]`).
    Success,
    /// Informational note (`[I]`).
    Info,
    /// Something worth attention (`[W]`).
    Warning,
    /// Side commentary (`[C]`).
    Comment,
    /// Failure report (`[E]`).
    Error,
    /// JSON dump marker (`[O]`).
    Object,
    /// Table dump marker (`[T]`).
    Table,
}

impl Level {
    /// Single-letter initial shown inside the badge.
    pub fn initial(self) -> char {
        match self {
            Self::Log => 'L',
            Self::Success => 'S',
            Self::Info => 'I',
            Self::Warning => 'W',
            Self::Comment => 'C',
            Self::Error => 'E',
            Self::Object => 'O',
            Self::Table => 'T',
        }
    }

    /// Apply this level's badge colors to arbitrary text.
    ///
    /// White badges carry black text for contrast; every other badge is
    /// white-on-color.
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Log | Self::Table => text.on_white().black(),
            Self::Success => text.on_green().white(),
            Self::Info => text.on_blue().white(),
            Self::Warning => text.on_yellow().white(),
            Self::Comment => text.on_cyan().white(),
            Self::Error => text.on_red().white(),
            Self::Object => text.on_magenta().white(),
        }
    }

    /// The padded ` [X] ` badge with this level's colors applied.
    pub fn badge(self) -> ColoredString {
        self.paint(&format!(" [{}] ", self.initial()))
    }
}
