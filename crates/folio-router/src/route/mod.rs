/// Route entries: a pattern bound to a view or a redirect
///
/// Entries are built with consuming builder methods and never change once
/// they are part of a [`Router`](crate::Router).

pub mod pattern;

use std::collections::HashMap;

use crate::error::PatternError;
use crate::path;
use pattern::{Pattern, PatternSegmentType};

/// What a matched entry leads to
#[derive(Debug, Clone, PartialEq)]
pub enum RouteTarget<V> {
    /// Render this view
    View(V),
    /// Restart resolution at this target; `:name` segments are substituted
    Redirect(String),
}

/// A single entry of the route table
#[derive(Debug, Clone)]
pub struct Route<V> {
    pattern: Pattern,
    target: RouteTarget<V>,
    /// Optional name for reverse routing
    pub name: Option<String>,
    /// Whether matched params are forwarded to the view as inputs
    pub props: bool,
    /// Extra static paths that resolve to this entry
    pub aliases: Vec<String>,
    /// Arbitrary metadata (titles, guards, layout hints)
    pub metadata: HashMap<String, String>,
}

impl<V> Route<V> {
    /// Creates an entry rendering `view` for `pattern`
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// let route = Route::view("/project/:id", "ProjectDetail").unwrap();
    /// assert_eq!(route.pattern().params(), ["id"]);
    /// ```
    pub fn view(pattern: &str, view: V) -> Result<Self, PatternError> {
        Ok(Self::new(Pattern::parse(pattern)?, RouteTarget::View(view)))
    }

    /// Creates an entry that redirects `pattern` to `to`
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// let route: Route<&str> = Route::redirect("/:pathMatch(.*)*", "/").unwrap();
    /// assert!(route.is_redirect());
    /// assert!(route.pattern().is_catch_all());
    /// ```
    pub fn redirect(pattern: &str, to: impl Into<String>) -> Result<Self, PatternError> {
        Ok(Self::new(
            Pattern::parse(pattern)?,
            RouteTarget::Redirect(to.into()),
        ))
    }

    fn new(pattern: Pattern, target: RouteTarget<V>) -> Self {
        Self {
            pattern,
            target,
            name: None,
            props: false,
            aliases: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn target(&self) -> &RouteTarget<V> {
        &self.target
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Sets a name for reverse routing
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Forwards matched params to the view as its inputs
    pub fn with_props(mut self) -> Self {
        self.props = true;
        self
    }

    /// Adds a static alias
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::Route;
    ///
    /// let route = Route::view("/users", "Users").unwrap()
    ///     .with_alias("/people")
    ///     .with_alias("/members/");
    ///
    /// assert!(route.matches("/people", false).is_some());
    /// assert!(route.matches("/members", false).is_some());
    /// ```
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias: String = alias.into();
        self.aliases.push(path::normalize_path(&alias).into_owned());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Matches a normalized path against the pattern, then the aliases
    ///
    /// Segments are percent-decoded before comparison, so bound values are
    /// always decoded text.
    pub fn matches(&self, path: &str, case_insensitive: bool) -> Option<HashMap<String, String>> {
        let decoded: Vec<String> = path::segments(path).map(path::decode).collect();
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

        if let Some(params) = self.pattern.matches(&segments, case_insensitive) {
            return Some(params);
        }

        let decoded_path = format!("/{}", segments.join("/"));
        self.aliases
            .iter()
            .any(|alias| {
                if case_insensitive {
                    alias.eq_ignore_ascii_case(&decoded_path)
                } else {
                    *alias == decoded_path
                }
            })
            .then(HashMap::new)
    }

    /// Target path of a redirect entry with `:name` segments substituted
    ///
    /// Placeholders without a matching param are kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::Route;
    /// use std::collections::HashMap;
    ///
    /// let route: Route<()> = Route::redirect("/u/:username", "/user/:username").unwrap();
    /// let params = route.matches("/u/alice", false).unwrap();
    /// assert_eq!(route.redirect_target(&params).unwrap(), "/user/alice");
    /// ```
    pub fn redirect_target(&self, params: &HashMap<String, String>) -> Option<String> {
        let RouteTarget::Redirect(target) = &self.target else {
            return None;
        };

        let (path_part, suffix) = match target.find(['?', '#']) {
            Some(idx) => target.split_at(idx),
            None => (target.as_str(), ""),
        };

        let substituted = path_part
            .split('/')
            .map(|segment| {
                segment
                    .strip_prefix(':')
                    .and_then(|name| params.get(name))
                    .map(|value| urlencoding::encode(value).into_owned())
                    .unwrap_or_else(|| segment.to_string())
            })
            .collect::<Vec<_>>()
            .join("/");

        Some(format!("{}{}", substituted, suffix))
    }

    /// True when any segment of the pattern is a parameter
    pub fn is_dynamic(&self) -> bool {
        self.pattern
            .segments()
            .iter()
            .any(|s| !matches!(s, PatternSegmentType::Static(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_route() {
        let route = Route::view("/user/:username", "UserDetail").unwrap().with_props();
        assert!(route.props);
        assert!(!route.is_redirect());
        assert!(route.is_dynamic());
        assert_eq!(route.target(), &RouteTarget::View("UserDetail"));
    }

    #[test]
    fn test_matches_decodes_segments() {
        let route = Route::view("/user/:username", ()).unwrap();
        let params = route.matches("/user/jos%C3%A9", false).unwrap();
        assert_eq!(params.get("username"), Some(&"josé".to_string()));
    }

    #[test]
    fn test_alias_is_case_aware() {
        let route = Route::view("/login", ()).unwrap().with_alias("/SignIn");
        assert!(route.matches("/SignIn", false).is_some());
        assert!(route.matches("/signin", false).is_none());
        assert!(route.matches("/signin", true).is_some());
    }

    #[test]
    fn test_alias_matches_percent_encoded_path() {
        let route = Route::view("/login", ()).unwrap().with_alias("/signin");
        assert!(route.matches("/sign%69n", false).is_some());
        assert!(route.matches("/sign%69n/", false).is_some());
        assert!(route.matches("/sign%6An", false).is_none());
    }

    #[test]
    fn test_redirect_target_static() {
        let route: Route<()> = Route::redirect("/:pathMatch(.*)*", "/").unwrap();
        let params = route.matches("/nonexistent", false).unwrap();
        assert_eq!(route.redirect_target(&params), Some("/".to_string()));
    }

    #[test]
    fn test_redirect_target_keeps_query_suffix() {
        let route: Route<()> = Route::redirect("/p/:id", "/project/:id?from=short").unwrap();
        let params = route.matches("/p/7", false).unwrap();
        assert_eq!(
            route.redirect_target(&params),
            Some("/project/7?from=short".to_string())
        );
    }

    #[test]
    fn test_redirect_target_unknown_placeholder_kept() {
        let route: Route<()> = Route::redirect("/old", "/user/:username").unwrap();
        assert_eq!(
            route.redirect_target(&HashMap::new()),
            Some("/user/:username".to_string())
        );
    }

    #[test]
    fn test_view_route_has_no_redirect_target() {
        let route = Route::view("/", ()).unwrap();
        assert_eq!(route.redirect_target(&HashMap::new()), None);
    }

    #[test]
    fn test_metadata() {
        let route = Route::view("/dashboard", ()).unwrap().with_meta("title", "Dashboard");
        assert_eq!(route.get_meta("title"), Some("Dashboard"));
        assert_eq!(route.get_meta("guard"), None);
    }
}
