//! Diagnostic categories.

use std::fmt;

/// ANSI color codes for category labels and underlines.
pub(crate) mod colors {
    pub const MAGENTA: &str = "\x1b[95m";
    pub const CYAN: &str = "\x1b[96m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const RESET: &str = "\x1b[0m";
}

/// How severe a diagnostic is, from least to most.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum DiagnosticCategory {
    /// Overly pedantic remark.
    Pedantic,
    Info,
    Warning,
    Error,
}

impl DiagnosticCategory {
    /// Upper-case label used in rendered messages.
    pub const fn label(self) -> &'static str {
        match self {
            DiagnosticCategory::Pedantic => "PEDANTIC",
            DiagnosticCategory::Info => "INFO",
            DiagnosticCategory::Warning => "WARNING",
            DiagnosticCategory::Error => "ERROR",
        }
    }

    /// ANSI escape sequence used when colors are enabled.
    pub const fn color(self) -> &'static str {
        match self {
            DiagnosticCategory::Pedantic => colors::MAGENTA,
            DiagnosticCategory::Info => colors::CYAN,
            DiagnosticCategory::Warning => colors::YELLOW,
            DiagnosticCategory::Error => colors::RED,
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_colors() {
        assert_eq!(DiagnosticCategory::Pedantic.label(), "PEDANTIC");
        assert_eq!(DiagnosticCategory::Error.to_string(), "ERROR");
        assert_eq!(DiagnosticCategory::Warning.color(), "\x1b[93m");
        assert_eq!(DiagnosticCategory::Info.color(), "\x1b[96m");
    }

    #[test]
    fn ordered_by_severity() {
        assert!(DiagnosticCategory::Pedantic < DiagnosticCategory::Info);
        assert!(DiagnosticCategory::Warning < DiagnosticCategory::Error);
    }
}
