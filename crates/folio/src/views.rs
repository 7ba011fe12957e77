// File: src/views.rs
// Purpose: Page views of the portal and their typed inputs

use std::fmt;

use anyhow::{Context, Result};
use folio_router::Navigation;
use serde::Serialize;

/// Page-level view a route can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    ProjectDetail,
    Users,
    UserDetail,
    Dashboard,
    CreateProject,
    Login,
    Register,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Home,
        View::ProjectDetail,
        View::Users,
        View::UserDetail,
        View::Dashboard,
        View::CreateProject,
        View::Login,
        View::Register,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ProjectDetail => "ProjectDetail",
            View::Users => "Users",
            View::UserDetail => "UserDetail",
            View::Dashboard => "Dashboard",
            View::CreateProject => "CreateProject",
            View::Login => "Login",
            View::Register => "Register",
        }
    }

    /// Page component backing the view
    pub fn component(&self) -> &'static str {
        match self {
            View::Home => "pages/home/Home",
            View::ProjectDetail => "pages/home/ProjectDetail",
            View::CreateProject => "pages/home/CreateProject",
            View::Users => "pages/users/Users",
            View::UserDetail => "pages/users/UsersDetail",
            View::Dashboard => "pages/dashboard/Dashboard",
            View::Login => "pages/auth/Login",
            View::Register => "pages/auth/Register",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A view together with its typed inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Page {
    Home,
    ProjectDetail { id: String },
    Users,
    UserDetail { user: String },
    Dashboard,
    CreateProject,
    Login,
    Register,
}

impl Page {
    /// Builds the page for a resolved navigation from its forwarded props
    ///
    /// The user-detail entry may bind `:username` or `:id`; whichever
    /// parameter its pattern declares is used.
    pub fn from_navigation(nav: &Navigation<View>) -> Result<Self> {
        let props = nav.props();
        let first_param = || -> Result<String> {
            let name = nav
                .route()
                .pattern()
                .params()
                .first()
                .with_context(|| format!("Route {} declares no parameter", nav.route().pattern()))?;
            props
                .get(name)
                .cloned()
                .with_context(|| format!("View {} did not receive ':{}'", nav.view(), name))
        };

        Ok(match nav.view() {
            View::Home => Page::Home,
            View::ProjectDetail => Page::ProjectDetail { id: first_param()? },
            View::Users => Page::Users,
            View::UserDetail => Page::UserDetail { user: first_param()? },
            View::Dashboard => Page::Dashboard,
            View::CreateProject => Page::CreateProject,
            View::Login => Page::Login,
            View::Register => Page::Register,
        })
    }

    pub fn view(&self) -> View {
        match self {
            Page::Home => View::Home,
            Page::ProjectDetail { .. } => View::ProjectDetail,
            Page::Users => View::Users,
            Page::UserDetail { .. } => View::UserDetail,
            Page::Dashboard => View::Dashboard,
            Page::CreateProject => View::CreateProject,
            Page::Login => View::Login,
            Page::Register => View::Register,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::ProjectDetail { id } => write!(f, "ProjectDetail(id={})", id),
            Page::UserDetail { user } => write!(f, "UserDetail(user={})", user),
            other => f.write_str(other.view().name()),
        }
    }
}
