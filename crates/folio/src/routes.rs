// File: src/routes.rs
// Purpose: The portal's route table

use anyhow::{bail, Context, Result};
use folio_router::{Route, Router};
use once_cell::sync::Lazy;
use tracing::info;

use crate::config::RoutingConfig;
use crate::views::View;

/// Pattern of the fallback entry; matches every path
pub const CATCH_ALL: &str = "/:pathMatch(.*)*";

static DEFAULT_ROUTER: Lazy<Router<View>> = Lazy::new(|| {
    build_router(&RoutingConfig::default()).expect("default route table is valid")
});

/// Route table built from the default routing configuration
pub fn default_router() -> &'static Router<View> {
    &DEFAULT_ROUTER
}

/// Builds the route table in evaluation order
///
/// The catch-all is appended last when `fallback_redirect` is set, and its
/// target must land on a view entry.
pub fn build_router(config: &RoutingConfig) -> Result<Router<View>> {
    let user_pattern = format!("/user/:{}", config.user_param.as_str());

    let mut routes = vec![
        Route::view("/", View::Home)?
            .with_name("home")
            .with_meta("title", "Projects"),
        Route::view("/project/:id", View::ProjectDetail)?
            .with_name("project-detail")
            .with_props()
            .with_meta("title", "Project"),
        Route::view("/users", View::Users)?
            .with_name("users")
            .with_meta("title", "Users"),
        Route::view(&user_pattern, View::UserDetail)?
            .with_name("user-detail")
            .with_props()
            .with_meta("title", "User"),
        Route::view("/dashboard", View::Dashboard)?
            .with_name("dashboard")
            .with_meta("title", "Dashboard"),
        Route::view("/create", View::CreateProject)?
            .with_name("create-project")
            .with_meta("title", "New project"),
        Route::view("/login", View::Login)?
            .with_name("login")
            .with_meta("title", "Sign in"),
        Route::view("/register", View::Register)?
            .with_name("register")
            .with_meta("title", "Create account"),
    ];

    if let Some(target) = config.fallback() {
        routes.push(Route::redirect(CATCH_ALL, target)?.with_name("not-found"));
    }

    let router = Router::builder()
        .case_insensitive(config.case_insensitive)
        .routes(routes)
        .build()
        .context("Invalid route table")?;

    if let Some(target) = config.fallback() {
        match router.match_path(target) {
            Some(m) if !m.is_redirect() => {}
            _ => bail!("Fallback redirect {:?} does not lead to a view", target),
        }
    }

    info!(
        routes = router.len(),
        catch_all = router.has_catch_all(),
        case_insensitive = config.case_insensitive,
        "route table ready"
    );

    Ok(router)
}
