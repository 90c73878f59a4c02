//! Reference name validation following git-style conventions.
//!
//! A valid reference name is either `HEAD` or a path under `refs/` such that:
//! - It does not contain whitespace, `~`, `^`, `:`, `?`, `*`, `[`, `\`
//! - It does not contain `..` (double dot) or `@{`
//! - It does not end with `.` or `/`, nor with `.lock`
//! - Components between slashes are non-empty and do not start with `.`

use crate::error::{RefError, Result};

/// The one reference name allowed outside `refs/`.
pub const HEAD: &str = "HEAD";

/// Prefix shared by every non-`HEAD` reference.
pub const REFS_PREFIX: &str = "refs/";

/// Characters that are forbidden anywhere in a reference name.
const FORBIDDEN_CHARS: &[char] = &[' ', '\t', '\n', '\r', '~', '^', ':', '?', '*', '[', '\\'];

fn invalid(name: &str, reason: impl Into<String>) -> RefError {
    RefError::InvalidName {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Validate a full reference name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use arbor_refs::names::validate_reference_name;
///
/// assert!(validate_reference_name("HEAD").is_ok());
/// assert!(validate_reference_name("refs/heads/feature/auth").is_ok());
/// assert!(validate_reference_name("main").is_err());
/// assert!(validate_reference_name("refs/heads/bad..name").is_err());
/// ```
pub fn validate_reference_name(name: &str) -> Result<()> {
    if name == HEAD {
        return Ok(());
    }

    let Some(rest) = name.strip_prefix(REFS_PREFIX) else {
        return Err(invalid(name, format!("must be {HEAD} or start with '{REFS_PREFIX}'")));
    };
    if rest.is_empty() {
        return Err(invalid(name, "missing name after 'refs/'"));
    }

    for ch in FORBIDDEN_CHARS {
        if name.contains(*ch) {
            return Err(invalid(name, format!("contains forbidden character: {ch:?}")));
        }
    }

    if name.contains("..") {
        return Err(invalid(name, "must not contain '..'"));
    }
    if name.contains("@{") {
        return Err(invalid(name, "must not contain '@{'"));
    }
    if name.ends_with('.') || name.ends_with('/') {
        return Err(invalid(name, "must not end with '.' or '/'"));
    }
    if name.ends_with(".lock") {
        return Err(invalid(name, "must not end with '.lock'"));
    }

    for component in rest.split('/') {
        if component.is_empty() {
            return Err(invalid(name, "path components must not be empty"));
        }
        if component.starts_with('.') {
            return Err(invalid(
                name,
                format!("component must not start with '.': {component:?}"),
            ));
        }
    }

    Ok(())
}
