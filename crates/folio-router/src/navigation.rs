/// Navigation state produced by resolving one navigation event
use std::collections::HashMap;
use std::sync::Arc;

use crate::path::Location;
use crate::route::Route;

/// Outcome of a successful resolution
///
/// A fresh value is produced for every navigation event; nothing in it is
/// shared with the previous navigation except the route entry itself.
#[derive(Debug, Clone)]
pub struct Navigation<V> {
    pub(crate) requested: String,
    pub(crate) location: Location,
    pub(crate) route: Arc<Route<V>>,
    pub(crate) view: V,
    pub(crate) params: HashMap<String, String>,
    pub(crate) redirected_from: Vec<String>,
}

impl<V> Navigation<V> {
    /// The target exactly as it was requested
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Normalized path that finally resolved to a view
    pub fn path(&self) -> &str {
        &self.location.path
    }

    /// Resolved path with query and hash, suitable for a history entry
    pub fn href(&self) -> String {
        self.location.to_href()
    }

    pub fn route(&self) -> &Route<V> {
        &self.route
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Inputs for the view: the params when the entry forwards them, else empty
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::{Route, Router};
    ///
    /// let router = Router::builder()
    ///     .route(Route::view("/project/:id", "ProjectDetail").unwrap().with_props())
    ///     .route(Route::view("/tag/:tag", "Tag").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let nav = router.resolve("/project/42").unwrap();
    /// assert_eq!(nav.props().get("id").map(String::as_str), Some("42"));
    ///
    /// let nav = router.resolve("/tag/rust").unwrap();
    /// assert!(nav.props().is_empty());
    /// assert_eq!(nav.param("tag"), Some("rust"));
    /// ```
    pub fn props(&self) -> HashMap<String, String> {
        if self.route.props {
            self.params.clone()
        } else {
            HashMap::new()
        }
    }

    pub fn query(&self) -> &HashMap<String, String> {
        &self.location.query
    }

    pub fn hash(&self) -> Option<&str> {
        self.location.hash.as_deref()
    }

    /// Paths left behind by redirects, oldest first
    pub fn redirected_from(&self) -> &[String] {
        &self.redirected_from
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirected_from.is_empty()
    }
}
