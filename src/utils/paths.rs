use std::path::{Path, PathBuf};

const SEPARATOR: char = '/';

/// Prefix `path` with `/` unless it already starts with one
///
/// An empty string becomes `/`, the "no sub-path" value.
///
/// # Examples
///
/// ```
/// use search_directory_history::utils::add_leading_slash;
///
/// assert_eq!(add_leading_slash("my/normal/path"), "/my/normal/path");
/// assert_eq!(add_leading_slash("/already/rooted"), "/already/rooted");
/// ```
pub fn add_leading_slash(path: &str) -> String {
    if path.starts_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", SEPARATOR, path)
    }
}

/// Directory to walk for a search
///
/// `pathstart` and `startpath` are relative sub-paths of `base` (aliases of each other);
/// `pathstart` wins when both are given. `/` means "the whole base".
pub fn resolve_search_root(base: &Path, startpath: &str, pathstart: &str) -> PathBuf {
    let startpath = add_leading_slash(startpath);
    let pathstart = add_leading_slash(pathstart);

    let sub_path = if pathstart != "/" {
        Some(pathstart)
    } else if startpath != "/" {
        Some(startpath)
    } else {
        None
    };

    match sub_path {
        Some(sub_path) => PathBuf::from(format!("{}{}", base.display(), sub_path)),
        None => base.to_path_buf(),
    }
}
