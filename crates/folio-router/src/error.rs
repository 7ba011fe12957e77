/// Error types for pattern parsing, table construction and resolution
use thiserror::Error;

/// A route pattern could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern '{pattern}' has a parameter without a name")]
    EmptyParamName { pattern: String },

    #[error("pattern '{pattern}' declares parameter ':{name}' more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("invalid constraint '({constraint})' on ':{name}': {reason}")]
    InvalidConstraint {
        name: String,
        constraint: String,
        reason: String,
    },

    #[error("unexpected '{text}' after parameter ':{name}' in '{pattern}'")]
    TrailingText {
        pattern: String,
        name: String,
        text: String,
    },

    #[error("pattern '{pattern}' has segments after its catch-all parameter")]
    CatchAllNotLast { pattern: String },
}

/// A route table violated one of its construction invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("pattern '{0}' is declared more than once")]
    DuplicatePattern(String),

    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("route '{pattern}' is declared after the catch-all '{catch_all}' and can never match")]
    AfterCatchAll { pattern: String, catch_all: String },
}

/// Resolution of a navigation target failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No entry matched and the table has no catch-all
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    #[error("'{path}' exceeded {limit} redirects")]
    RedirectLimit { path: String, limit: usize },

    #[error("no route is named '{0}'")]
    UnknownName(String),

    #[error("route '{route}' needs parameter ':{param}'")]
    MissingParam { route: String, param: String },
}

impl RouteError {
    /// Returns true for the not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound { .. })
    }
}
