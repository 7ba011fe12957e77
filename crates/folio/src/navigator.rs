// File: src/navigator.rs
// Purpose: Drives navigation events through the route table and history

use std::sync::Arc;

use folio_router::{MemoryHistory, Navigation, RouteError, Router};
use tracing::{info, warn};

use crate::views::View;

/// Owns the session history and the current navigation
///
/// Every event (push, replace, back, forward) resolves from scratch against
/// the shared, immutable route table. A failed resolution leaves both the
/// history and the current navigation as they were.
pub struct Navigator {
    router: Arc<Router<View>>,
    history: MemoryHistory,
    current: Navigation<View>,
}

impl Navigator {
    pub fn new(router: Arc<Router<View>>, initial: &str) -> Result<Self, RouteError> {
        let current = router.resolve(initial)?;
        let history = MemoryHistory::new(current.href());

        Ok(Self {
            router,
            history,
            current,
        })
    }

    pub fn current(&self) -> &Navigation<View> {
        &self.current
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn router(&self) -> &Router<View> {
        &self.router
    }

    /// Navigates to `target`, adding a history entry
    ///
    /// Navigating to the location already shown does not add an entry.
    pub fn push(&mut self, target: &str) -> Result<&Navigation<View>, RouteError> {
        let nav = self.resolve(target)?;
        let href = nav.href();

        if href != self.history.current() {
            self.history.push(href);
        }

        self.current = nav;
        Ok(&self.current)
    }

    /// Navigates to `target`, replacing the current history entry
    pub fn replace(&mut self, target: &str) -> Result<&Navigation<View>, RouteError> {
        let nav = self.resolve(target)?;
        self.history.replace(nav.href());
        self.current = nav;
        Ok(&self.current)
    }

    /// Steps back; returns false when there is nothing to go back to
    ///
    /// When the earlier entry no longer resolves, history stays where it was.
    pub fn back(&mut self) -> Result<bool, RouteError> {
        if !self.history.back() {
            return Ok(false);
        }
        if let Err(err) = self.reload() {
            self.history.forward();
            return Err(err);
        }
        Ok(true)
    }

    /// Steps forward; returns false when there is nothing to go forward to
    pub fn forward(&mut self) -> Result<bool, RouteError> {
        if !self.history.forward() {
            return Ok(false);
        }
        if let Err(err) = self.reload() {
            self.history.back();
            return Err(err);
        }
        Ok(true)
    }

    fn reload(&mut self) -> Result<(), RouteError> {
        let entry = self.history.current().to_string();
        self.current = self.resolve(&entry)?;
        Ok(())
    }

    fn resolve(&self, target: &str) -> Result<Navigation<View>, RouteError> {
        match self.router.resolve(target) {
            Ok(nav) => {
                if nav.was_redirected() {
                    info!(requested = target, landed = nav.path(), "navigation redirected");
                }
                Ok(nav)
            }
            Err(err) => {
                warn!(requested = target, error = %err, "navigation failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingConfig;
    use crate::routes::build_router;

    fn navigator(with_fallback: bool) -> Navigator {
        let config = RoutingConfig {
            fallback_redirect: with_fallback.then(|| "/".to_string()),
            ..RoutingConfig::default()
        };
        Navigator::new(Arc::new(build_router(&config).unwrap()), "/").unwrap()
    }

    #[test]
    fn test_push_same_location_does_not_grow_history() {
        let mut nav = navigator(true);
        nav.push("/users").unwrap();
        nav.push("/users/").unwrap();
        assert_eq!(nav.history().depth(), 2);
    }

    #[test]
    fn test_failed_push_keeps_state() {
        let mut nav = navigator(false);
        nav.push("/dashboard").unwrap();

        let err = nav.push("/nonexistent").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(*nav.current().view(), View::Dashboard);
        assert_eq!(nav.history().current(), "/dashboard");
    }

    #[test]
    fn test_unresolvable_history_entry_keeps_position() {
        let mut nav = navigator(false);
        nav.history.push("/missing");
        nav.history.push("/dashboard");
        nav.current = nav.router.resolve("/dashboard").unwrap();

        assert!(nav.back().unwrap_err().is_not_found());
        assert_eq!(nav.history().current(), "/dashboard");
        assert_eq!(*nav.current().view(), View::Dashboard);
        assert!(nav.history().can_go_back());

        nav.history.back();
        nav.history.back();
        nav.current = nav.router.resolve("/").unwrap();

        assert!(nav.forward().unwrap_err().is_not_found());
        assert_eq!(nav.history().current(), "/");
        assert_eq!(*nav.current().view(), View::Home);
        assert!(nav.history().can_go_forward());
    }

    #[test]
    fn test_replace() {
        let mut nav = navigator(true);
        nav.push("/login").unwrap();
        nav.replace("/dashboard").unwrap();

        assert_eq!(nav.history().depth(), 2);
        assert!(nav.back().unwrap());
        assert_eq!(*nav.current().view(), View::Home);
    }
}
