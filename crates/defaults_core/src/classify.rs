/// Line prefixes that mark warnings worth the user's attention.
pub const WARNING_MARKERS: [&str; 3] = [
    "[WARNING]",        // Pandoc
    "pandoc-citeproc:", // pandoc-citeproc
    "  Latex ",         // Latexmk
];

/// Line prefixes that mark fatal errors.
pub const ERROR_MARKERS: [&str; 4] = [
    "YAML parse exception", // Pandoc
    "Error",                // Latexmk
    "! ",                   // LaTeX
    "l.",                   // LaTeX
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    Fatal,
    Warning,
    Info,
}

/// Classify one line of converter output by case-sensitive prefix.
///
/// Error markers are checked first, so a line matching both sets is fatal.
pub fn classify(line: &str) -> Diagnostic {
    if ERROR_MARKERS.iter().any(|m| line.starts_with(m)) {
        Diagnostic::Fatal
    } else if WARNING_MARKERS.iter().any(|m| line.starts_with(m)) {
        Diagnostic::Warning
    } else {
        Diagnostic::Info
    }
}
