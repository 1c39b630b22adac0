//! Source location of a log call

use std::fmt;

/// File and line a log call was made from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Final path component of `file`
    pub fn basename(&self) -> &'static str {
        basename(self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.basename(), self.line)
    }
}

/// Strip directories from a path, accepting both `/` and `\` separators
///
/// Trailing separators are ignored; an empty path yields `"."` and a path
/// made only of separators yields `"/"`.
pub fn basename(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Capture the current call site
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::core::CallSite::new(file!(), line!())
    };
}
