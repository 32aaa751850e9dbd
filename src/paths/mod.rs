#[cfg(test)]
mod tests;

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Pure path normalization shared by the locator backends.
///
/// Logical relative paths are separator-style-insensitive: callers may write
/// `test/test.txt` or `test\test.txt` and both address the same entry. Each
/// backend converts them into its own addressing scheme (native separators for
/// folders, dots for resource bundles) through these functions.
pub struct PathNormalizer;

impl PathNormalizer {
    /// Replace every `/` and `\` with the platform's native separator
    pub fn to_native(path: &str) -> String {
        path.replace(['/', '\\'], MAIN_SEPARATOR_STR)
    }

    /// Replace every `/` and `\` with `.`, the resource-name separator
    pub fn to_dotted(path: &str) -> String {
        path.replace(['/', '\\'], ".")
    }

    /// Recover a file path from a bare resource name (namespace already stripped).
    ///
    /// The last `.` separates the file name from its extension and must survive;
    /// every other `.` is a path segment boundary. `test.test.test.txt` becomes
    /// `test/test/test.txt` on Unix. A name without any `.` passes through
    /// unchanged.
    pub fn from_dotted(name: &str) -> String {
        match name.rfind('.') {
            Some(pos) => {
                let mut path = name[..pos].replace('.', MAIN_SEPARATOR_STR);
                path.push('.');
                path.push_str(&name[pos + 1..]);
                path
            }
            None => name.to_string(),
        }
    }

    /// Normalize a directory path into a prefix usable for matching.
    ///
    /// Root-equivalent input (empty or `.`) yields `""`, which matches every
    /// entry. Anything else is separator-normalized and gets exactly one
    /// trailing separator appended if not already present, so `test` and
    /// `test/` produce the identical prefix and entries under `test2/` never
    /// match a query for `test`.
    pub fn directory_prefix(path: &str) -> String {
        let path = Self::strip_root_prefix(path);
        if path.is_empty() {
            return String::new();
        }

        let mut result = Self::to_native(path);
        if !result.ends_with(MAIN_SEPARATOR) {
            result.push(MAIN_SEPARATOR);
        }
        result
    }

    /// Strip a leading `.` that denotes the backend root.
    ///
    /// `.` means the root itself and `./x` means `x` under the root. A leading
    /// dot that starts a file name (`.gitignore`) is left alone.
    pub fn strip_root_prefix(path: &str) -> &str {
        if path == "." {
            ""
        } else if let Some(rest) = path.strip_prefix("./").or_else(|| path.strip_prefix(".\\")) {
            rest
        } else {
            path
        }
    }
}
