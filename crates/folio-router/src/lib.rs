//! # Folio Router
//!
//! Client-side route resolution over an ordered, immutable route table:
//! - Static routes (`/users`)
//! - Named parameters (`/project/:id`, `/user/:username`)
//! - Optional parameters (`/users/:page?`)
//! - Regex-constrained parameters (`/project/:id(\d+)`)
//! - Catch-all fallbacks (`/:pathMatch(.*)*`)
//! - Redirects with parameter substitution
//! - Named routes for reverse routing
//! - An in-memory history for back/forward navigation
//!
//! Entries are evaluated in declaration order and the first match wins, so a
//! catch-all has to be declared last. The builder enforces that.
//!
//! ## Path Normalization
//!
//! Incoming targets are canonicalized before matching:
//! - Trailing slashes: `/users/` → `/users`
//! - Double slashes: `/user//alice` → `/user/alice`
//! - Backslashes: `\project\42` → `/project/42`
//! - `?query` and `#hash` are split off and kept on the navigation
//!
//! ## Example
//!
//! ```
//! use folio_router::{Route, Router, RouteError};
//!
//! let router = Router::builder()
//!     .route(Route::view("/", "Home").unwrap())
//!     .route(Route::view("/user/:username", "UserDetail").unwrap().with_props())
//!     .build()
//!     .unwrap();
//!
//! let nav = router.resolve("/user/alice").unwrap();
//! assert_eq!(*nav.view(), "UserDetail");
//! assert_eq!(nav.param("username"), Some("alice"));
//!
//! assert!(matches!(router.resolve("/nonexistent"), Err(RouteError::NotFound { .. })));
//! ```

mod error;
mod history;
mod navigation;
pub mod path;
pub mod route;
mod router;

pub use error::{BuildError, PatternError, RouteError};
pub use history::MemoryHistory;
pub use navigation::Navigation;
pub use path::{is_valid_path, normalize_path, Location};
pub use route::pattern::{classify_segment, ParameterConstraint, Pattern, PatternSegmentType};
pub use route::{Route, RouteTarget};
pub use router::{RouteMatch, Router, RouterBuilder, MAX_REDIRECTS};

/// Parameter mapping handed to views
pub type Params = std::collections::HashMap<String, String>;
