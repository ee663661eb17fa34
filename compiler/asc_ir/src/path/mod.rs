//! Module path utilities.
//!
//! Paths use `/` as delimiter on every platform. Library paths live under
//! [`LIBRARY_PREFIX`]; import and export statements turn their path literal
//! into an internal path that doubles as the module identity.

/// Path delimiter used in all normalized paths.
pub const PATH_DELIMITER: &str = "/";

/// Name of the library namespace, without the trailing delimiter.
pub const LIBRARY_SUBST: &str = "~lib";

/// Prefix of every library path.
pub const LIBRARY_PREFIX: &str = "~lib/";

/// Name appended to directory-style paths.
pub const INDEX_SUFFIX: &str = "index";

/// Normalizes a path.
///
/// Trims leading `./` segments, collapses `/.` segments and resolves
/// `segment/..` pairs. Leading `..` segments that cannot be resolved are
/// kept. An empty result normalizes to `.`.
pub fn normalize_path(path: &str) -> String {
    let mut rest = path;
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }

    let absolute = rest.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for (i, part) in rest.split('/').enumerate() {
        match part {
            "." if i > 0 => {}
            ".." if i > 0 => match segments.last() {
                Some(&prev) if prev != ".." && !(absolute && segments.len() == 1) => {
                    segments.pop();
                }
                _ => segments.push(part),
            },
            _ => segments.push(part),
        }
    }

    let normalized = segments.join(PATH_DELIMITER);
    if normalized.is_empty() {
        if absolute {
            return PATH_DELIMITER.to_owned();
        }
        return ".".to_owned();
    }
    normalized
}

/// Resolves a normalized path relative to the path of its origin.
pub fn resolve_path(normalized_path: &str, origin: &str) -> String {
    if normalized_path.starts_with("std/") {
        return normalized_path.to_owned();
    }
    let mut joined = dirname(origin).to_owned();
    joined.push_str(PATH_DELIMITER);
    joined.push_str(normalized_path);
    normalize_path(&joined)
}

/// Directory part of a normalized path, `.` if there is none.
pub fn dirname(normalized_path: &str) -> &str {
    match normalized_path.len() {
        0 => return ".",
        1 if normalized_path == PATH_DELIMITER => return normalized_path,
        _ => {}
    }
    match normalized_path.as_bytes()[1..].iter().rposition(|&b| b == b'/') {
        Some(pos) => &normalized_path[..=pos],
        None => ".",
    }
}

/// Mangles an external path to an internal path.
///
/// Directory-style paths get [`INDEX_SUFFIX`] appended; a `.ts` extension
/// is stripped.
pub fn mangle_internal_path(path: &str) -> String {
    if path.ends_with('/') {
        let mut mangled = String::with_capacity(path.len() + INDEX_SUFFIX.len());
        mangled.push_str(path);
        mangled.push_str(INDEX_SUFFIX);
        return mangled;
    }
    path.strip_suffix(".ts").unwrap_or(path).to_owned()
}

#[cfg(test)]
mod tests;
