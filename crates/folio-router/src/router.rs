/// The ordered route table and its resolver
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{BuildError, RouteError};
use crate::navigation::Navigation;
use crate::path::Location;
use crate::route::{Route, RouteTarget};

/// Upper bound on redirects followed by a single resolution
pub const MAX_REDIRECTS: usize = 8;

/// Result of matching a single path, without following redirects
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    pub route: &'a Route<V>,
    pub params: HashMap<String, String>,
}

impl<V> RouteMatch<'_, V> {
    pub fn is_redirect(&self) -> bool {
        self.route.is_redirect()
    }

    /// Redirect target with the matched params substituted
    pub fn redirect_target(&self) -> Option<String> {
        self.route.redirect_target(&self.params)
    }
}

/// Collects entries in declaration order and validates the table
///
/// # Examples
///
/// ```
/// use folio_router::{Route, Router};
///
/// let router = Router::builder()
///     .route(Route::view("/", "Home").unwrap())
///     .route(Route::view("/users", "Users").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(router.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RouterBuilder<V> {
    routes: Vec<Route<V>>,
    case_insensitive: bool,
}

impl<V> Default for RouterBuilder<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            case_insensitive: false,
        }
    }
}

impl<V> RouterBuilder<V> {
    pub fn route(mut self, route: Route<V>) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route<V>>,
    {
        self.routes.extend(routes);
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Freezes the table
    ///
    /// Rejects two entries with the same shape (`/user/:id` vs
    /// `/user/:username`), duplicate names, and any entry declared after a
    /// catch-all.
    pub fn build(self) -> Result<Router<V>, BuildError> {
        let mut shapes = HashSet::new();
        let mut named = HashMap::new();
        let mut catch_all: Option<String> = None;

        for (idx, route) in self.routes.iter().enumerate() {
            let pattern = route.pattern().as_str();

            if let Some(catch_all) = &catch_all {
                return Err(BuildError::AfterCatchAll {
                    pattern: pattern.to_string(),
                    catch_all: catch_all.clone(),
                });
            }

            if !shapes.insert(route.pattern().shape(self.case_insensitive)) {
                return Err(BuildError::DuplicatePattern(pattern.to_string()));
            }

            if let Some(name) = &route.name {
                if named.insert(name.clone(), idx).is_some() {
                    return Err(BuildError::DuplicateName(name.clone()));
                }
            }

            if route.pattern().is_catch_all() {
                catch_all = Some(pattern.to_string());
            }
        }

        debug!(
            routes = self.routes.len(),
            catch_all = catch_all.as_deref().unwrap_or("none"),
            "route table built"
        );

        Ok(Router {
            routes: self.routes.into_iter().map(Arc::new).collect(),
            named,
            case_insensitive: self.case_insensitive,
        })
    }
}

/// Immutable, ordered route table
///
/// Entries are evaluated in declaration order and the first match wins.
#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Arc<Route<V>>>,
    named: HashMap<String, usize>,
    case_insensitive: bool,
}

impl<V> Router<V> {
    pub fn builder() -> RouterBuilder<V> {
        RouterBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Entries in evaluation order
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter().map(|r| r.as_ref())
    }

    pub fn has_catch_all(&self) -> bool {
        self.routes.iter().any(|r| r.pattern().is_catch_all())
    }

    pub fn named(&self, name: &str) -> Option<&Route<V>> {
        self.named.get(name).map(|&idx| self.routes[idx].as_ref())
    }

    /// First entry matching `path`; redirects are returned, not followed
    ///
    /// `path` may carry a query or hash; only the path part is matched.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        self.find(&Location::parse(path).path)
            .map(|(route, params)| RouteMatch {
                route: route.as_ref(),
                params,
            })
    }

    fn find(&self, path: &str) -> Option<(&Arc<Route<V>>, HashMap<String, String>)> {
        self.routes.iter().find_map(|route| {
            let params = route.matches(path, self.case_insensitive)?;
            trace!(path, pattern = %route.pattern(), "route matched");
            Some((route, params))
        })
    }

    /// Builds a path for a named entry
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::{Route, Router};
    /// use std::collections::HashMap;
    ///
    /// let router = Router::builder()
    ///     .route(Route::view("/user/:username", ()).unwrap().with_name("user"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let params = HashMap::from([("username".to_string(), "alice".to_string())]);
    /// assert_eq!(router.href("user", &params).unwrap(), "/user/alice");
    /// assert!(router.href("user", &HashMap::new()).is_err());
    /// ```
    pub fn href(&self, name: &str, params: &HashMap<String, String>) -> Result<String, RouteError> {
        let route = self
            .named(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;

        route
            .pattern()
            .fill(params)
            .map_err(|param| RouteError::MissingParam {
                route: name.to_string(),
                param,
            })
    }
}

impl<V: Clone> Router<V> {
    /// Resolves a navigation target to a view
    ///
    /// Redirect entries restart resolution at their target; the original
    /// query and hash carry over unless the target sets its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_router::{Route, Router};
    ///
    /// let router = Router::builder()
    ///     .route(Route::view("/", "Home").unwrap())
    ///     .route(Route::view("/project/:id", "ProjectDetail").unwrap())
    ///     .route(Route::redirect("/:pathMatch(.*)*", "/").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let nav = router.resolve("/project/42").unwrap();
    /// assert_eq!(*nav.view(), "ProjectDetail");
    /// assert_eq!(nav.param("id"), Some("42"));
    ///
    /// let nav = router.resolve("/nonexistent").unwrap();
    /// assert_eq!(*nav.view(), "Home");
    /// assert_eq!(nav.redirected_from(), ["/nonexistent"]);
    /// ```
    pub fn resolve(&self, target: &str) -> Result<Navigation<V>, RouteError> {
        let mut location = Location::parse(target);
        let mut redirected_from: Vec<String> = Vec::new();

        loop {
            let Some((route, params)) = self.find(&location.path) else {
                debug!(requested = target, path = %location.path, "no route matched");
                return Err(RouteError::NotFound {
                    path: location.path,
                });
            };

            match route.target() {
                RouteTarget::View(view) => {
                    debug!(
                        requested = target,
                        path = %location.path,
                        pattern = %route.pattern(),
                        redirects = redirected_from.len(),
                        "route resolved"
                    );
                    return Ok(Navigation {
                        requested: target.to_string(),
                        view: view.clone(),
                        route: Arc::clone(route),
                        params,
                        location,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(_) => {
                    if redirected_from.len() >= MAX_REDIRECTS {
                        return Err(RouteError::RedirectLimit {
                            path: target.to_string(),
                            limit: MAX_REDIRECTS,
                        });
                    }

                    let next = route.redirect_target(&params).unwrap_or_default();
                    debug!(from = %location.path, to = %next, "following redirect");

                    let mut next_location = Location::parse(&next);
                    if next_location.query.is_empty() {
                        next_location.query = std::mem::take(&mut location.query);
                    }
                    if next_location.hash.is_none() {
                        next_location.hash = location.hash.take();
                    }

                    redirected_from.push(std::mem::replace(&mut location, next_location).path);
                }
            }
        }
    }
}
