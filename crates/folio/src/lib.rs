// Folio - project portal navigation
// Route table, page views and session navigation for the portal front-end

pub mod app;
pub mod config;
pub mod logging;
pub mod navigator;
pub mod routes;
pub mod views;

pub use app::App;
pub use config::Config;
pub use navigator::Navigator;
pub use routes::{build_router, default_router, CATCH_ALL};
pub use views::{Page, View};

// Re-export the router crate for callers of the navigation API
pub use folio_router;
