/// Path utilities for validation, normalization and location splitting
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::collections::HashMap;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use folio_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/project/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("users"));
/// assert!(!is_valid_path("/users/"));
/// assert!(!is_valid_path("/user//alice"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Trailing slashes: `/users/` → `/users`
/// - Double slashes: `/user//alice` → `/user/alice`
/// - Backslashes: `\project\42` → `/project/42`
/// - Empty input: `` → `/`
///
/// # Examples
///
/// ```
/// use folio_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/dashboard"), Cow::Borrowed("/dashboard")));
/// assert_eq!(normalize_path("dashboard/"), "/dashboard");
/// assert_eq!(normalize_path("\\project\\42"), "/project/42");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a path into its non-empty segments
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A navigation target split into path, query and hash
///
/// # Examples
///
/// ```
/// use folio_router::path::Location;
///
/// let loc = Location::parse("/project/42/?tab=members&sort=name#top");
/// assert_eq!(loc.path, "/project/42");
/// assert_eq!(loc.query.get("tab"), Some(&"members".to_string()));
/// assert_eq!(loc.hash.as_deref(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: HashMap<String, String>,
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, HashMap::new()),
        };

        Location {
            path: normalize_path(path).into_owned(),
            query,
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    /// Renders the location back into `path?query#hash` form
    ///
    /// Query keys are emitted in sorted order so the output is stable.
    pub fn to_href(&self) -> String {
        let mut href = self.path.clone();

        if !self.query.is_empty() {
            let mut pairs: Vec<_> = self.query.iter().collect();
            pairs.sort();
            let query = pairs
                .into_iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            href.push('?');
            href.push_str(&query);
        }

        if let Some(hash) = &self.hash {
            href.push('#');
            href.push_str(hash);
        }

        href
    }
}

/// Parses `a=1&b=two` into a map, percent-decoding keys and values
///
/// A key without `=` maps to an empty value. Later duplicates win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(&k.replace('+', " ")), decode(&v.replace('+', " ")))
        })
        .collect()
}

/// Percent-decodes a value, keeping the raw text when it is not valid UTF-8
pub fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
