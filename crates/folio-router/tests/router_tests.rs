//! Integration tests for folio-router
//!
//! Organized by feature area:
//! - Literal and parameterized resolution
//! - Declaration order
//! - Catch-all fallback and redirects
//! - Table invariants
//! - Query, hash and decoding
//! - Reverse routing
//! - History-driven navigation

use std::collections::HashMap;

use folio_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn table(with_catch_all: bool) -> Router<&'static str> {
    let mut builder = Router::builder()
        .route(Route::view("/", "Home").unwrap().with_name("home"))
        .route(Route::view("/project/:id", "ProjectDetail").unwrap().with_props().with_name("project"))
        .route(Route::view("/users", "Users").unwrap())
        .route(Route::view("/user/:username", "UserDetail").unwrap().with_props().with_name("user"))
        .route(Route::view("/dashboard", "Dashboard").unwrap())
        .route(Route::view("/create", "CreateProject").unwrap())
        .route(Route::view("/login", "Login").unwrap())
        .route(Route::view("/register", "Register").unwrap());

    if with_catch_all {
        builder = builder.route(Route::redirect("/:pathMatch(.*)*", "/").unwrap());
    }

    builder.build().unwrap()
}

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case("/", "Home")]
#[case("/users", "Users")]
#[case("/dashboard", "Dashboard")]
#[case("/create", "CreateProject")]
#[case("/login", "Login")]
#[case("/register", "Register")]
fn test_literal_routes_resolve_without_params(#[case] path: &str, #[case] view: &str) {
    let nav = table(true).resolve(path).unwrap();
    assert_eq!(*nav.view(), view);
    assert!(nav.params().is_empty());
    assert!(!nav.was_redirected());
}

#[test]
fn test_project_detail_binds_id() {
    let nav = table(true).resolve("/project/42").unwrap();
    assert_eq!(*nav.view(), "ProjectDetail");
    assert_eq!(
        nav.params(),
        &HashMap::from([("id".to_string(), "42".to_string())])
    );
    assert_eq!(nav.props(), nav.params().clone());
}

#[test]
fn test_user_detail_binds_username() {
    let nav = table(true).resolve("/user/alice").unwrap();
    assert_eq!(*nav.view(), "UserDetail");
    assert_eq!(nav.param("username"), Some("alice"));
    assert_eq!(nav.route().pattern().as_str(), "/user/:username");
}

#[test]
fn test_param_does_not_match_empty_segment() {
    let err = table(false).resolve("/project/").unwrap_err();
    assert!(err.is_not_found());
}

#[rstest]
#[case("/users/", "Users")]
#[case("//dashboard", "Dashboard")]
#[case("login", "Login")]
#[case("\\project\\7", "ProjectDetail")]
fn test_sloppy_paths_are_normalized(#[case] path: &str, #[case] view: &str) {
    assert_eq!(*table(false).resolve(path).unwrap().view(), view);
}

#[test]
fn test_case_sensitivity_is_configurable() {
    let strict = table(false);
    assert!(strict.resolve("/Users").is_err());

    let relaxed = Router::builder()
        .case_insensitive(true)
        .route(Route::view("/users", "Users").unwrap())
        .build()
        .unwrap();
    assert_eq!(*relaxed.resolve("/USERS").unwrap().view(), "Users");
    assert!(relaxed.is_case_insensitive());
}

// ============================================================================
// Declaration order
// ============================================================================

#[test]
fn test_earlier_entry_wins() {
    let router = Router::builder()
        .route(Route::view("/user/new", "NewUser").unwrap())
        .route(Route::view("/user/:username", "UserDetail").unwrap())
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/user/new").unwrap().view(), "NewUser");
    assert_eq!(*router.resolve("/user/bob").unwrap().view(), "UserDetail");

    let reversed = Router::builder()
        .route(Route::view("/user/:username", "UserDetail").unwrap())
        .route(Route::view("/user/new", "NewUser").unwrap())
        .build()
        .unwrap();

    assert_eq!(*reversed.resolve("/user/new").unwrap().view(), "UserDetail");
}

#[test]
fn test_routes_iterate_in_declaration_order() {
    let router = table(true);
    let patterns: Vec<&str> = router.routes().map(|r| r.pattern().as_str()).collect();
    assert_eq!(
        patterns,
        vec![
            "/",
            "/project/:id",
            "/users",
            "/user/:username",
            "/dashboard",
            "/create",
            "/login",
            "/register",
            "/:pathMatch(.*)*",
        ]
    );
}

// ============================================================================
// Catch-all and redirects
// ============================================================================

#[rstest]
#[case("/nonexistent")]
#[case("/deeply/nested/path")]
#[case("/project")]
#[case("/user/alice/settings")]
fn test_catch_all_redirects_home(#[case] path: &str) {
    let nav = table(true).resolve(path).unwrap();
    assert_eq!(*nav.view(), "Home");
    assert_eq!(nav.path(), "/");
    assert_eq!(nav.redirected_from(), [normalize_path(path).into_owned()]);
}

#[test]
fn test_missing_catch_all_is_not_found() {
    let err = table(false).resolve("/nonexistent").unwrap_err();
    assert_eq!(
        err,
        RouteError::NotFound {
            path: "/nonexistent".to_string()
        }
    );
    assert!(!table(false).has_catch_all());
    assert!(table(true).has_catch_all());
}

#[test]
fn test_redirect_substitutes_params() {
    let router = Router::builder()
        .route(Route::view("/user/:username", "UserDetail").unwrap())
        .route(Route::redirect("/u/:username", "/user/:username").unwrap())
        .build()
        .unwrap();

    let nav = router.resolve("/u/carol").unwrap();
    assert_eq!(*nav.view(), "UserDetail");
    assert_eq!(nav.param("username"), Some("carol"));
    assert_eq!(nav.requested(), "/u/carol");
    assert_eq!(nav.redirected_from(), ["/u/carol"]);
}

#[test]
fn test_redirect_carries_query_and_hash() {
    let nav = table(true).resolve("/missing?ref=mail#top").unwrap();
    assert_eq!(*nav.view(), "Home");
    assert_eq!(nav.query().get("ref").map(String::as_str), Some("mail"));
    assert_eq!(nav.hash(), Some("top"));
    assert_eq!(nav.href(), "/?ref=mail#top");
}

#[test]
fn test_redirect_into_missing_route_is_not_found() {
    let router: Router<&str> = Router::builder()
        .route(Route::redirect("/old", "/gone").unwrap())
        .build()
        .unwrap();

    let err = router.resolve("/old").unwrap_err();
    assert_eq!(
        err,
        RouteError::NotFound {
            path: "/gone".to_string()
        }
    );
}

// ============================================================================
// Table invariants
// ============================================================================

#[test]
fn test_same_shape_is_rejected() {
    let err = Router::builder()
        .route(Route::view("/user/:username", "UserDetail").unwrap())
        .route(Route::view("/user/:id", "UserDetail").unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::DuplicatePattern("/user/:id".to_string()));
}

#[test]
fn test_static_case_variants_depend_on_case_mode() {
    let strict = Router::builder()
        .route(Route::view("/Users", "LegacyUsers").unwrap())
        .route(Route::view("/users", "Users").unwrap())
        .build()
        .unwrap();
    assert_eq!(*strict.resolve("/Users").unwrap().view(), "LegacyUsers");
    assert_eq!(*strict.resolve("/users").unwrap().view(), "Users");

    let err = Router::builder()
        .case_insensitive(true)
        .route(Route::view("/Users", "LegacyUsers").unwrap())
        .route(Route::view("/users", "Users").unwrap())
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::DuplicatePattern("/users".to_string()));
}

#[test]
fn test_entry_after_catch_all_is_rejected() {
    let err = Router::builder()
        .route(Route::redirect("/:pathMatch(.*)*", "/").unwrap())
        .route(Route::view("/late", "Late").unwrap())
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::AfterCatchAll { .. }));
}

#[test]
fn test_duplicate_names_are_rejected() {
    let err = Router::builder()
        .route(Route::view("/a", "A").unwrap().with_name("x"))
        .route(Route::view("/b", "B").unwrap().with_name("x"))
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::DuplicateName("x".to_string()));
}

#[test]
fn test_pattern_errors_convert_into_build_errors() {
    let err: BuildError = Route::<()>::view("/:id/:id", ()).unwrap_err().into();
    assert!(matches!(err, BuildError::Pattern(PatternError::DuplicateParam { .. })));
}

// ============================================================================
// Decoding and constraints
// ============================================================================

#[test]
fn test_params_are_percent_decoded() {
    let nav = table(false).resolve("/user/jos%C3%A9").unwrap();
    assert_eq!(nav.param("username"), Some("josé"));
}

#[test]
fn test_constrained_param_falls_through() {
    let router = Router::builder()
        .route(Route::view("/project/:id(\\d+)", "ProjectDetail").unwrap())
        .route(Route::view("/project/:slug", "ProjectBySlug").unwrap())
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/project/42").unwrap().view(), "ProjectDetail");
    assert_eq!(*router.resolve("/project/folio").unwrap().view(), "ProjectBySlug");
}

#[test]
fn test_aliases_resolve_to_entry() {
    let router = Router::builder()
        .route(Route::view("/login", "Login").unwrap().with_alias("/signin"))
        .build()
        .unwrap();

    let nav = router.resolve("/signin/").unwrap();
    assert_eq!(*nav.view(), "Login");
    assert_eq!(nav.path(), "/signin");
}

#[test]
fn test_percent_encoded_alias_resolves_to_entry() {
    let router = Router::builder()
        .route(Route::view("/login", "Login").unwrap().with_alias("/signin"))
        .build()
        .unwrap();

    assert_eq!(*router.resolve("/sign%69n").unwrap().view(), "Login");
    assert!(router.resolve("/sign%6An").unwrap_err().is_not_found());
}

// ============================================================================
// Reverse routing
// ============================================================================

#[test]
fn test_href_for_named_routes() {
    let router = table(true);
    let params = HashMap::from([
        ("id".to_string(), "42".to_string()),
        ("username".to_string(), "alice".to_string()),
    ]);

    assert_eq!(router.href("home", &params).unwrap(), "/");
    assert_eq!(router.href("project", &params).unwrap(), "/project/42");
    assert_eq!(router.href("user", &params).unwrap(), "/user/alice");
    assert_eq!(
        router.href("user", &HashMap::new()),
        Err(RouteError::MissingParam {
            route: "user".to_string(),
            param: "username".to_string()
        })
    );
}

#[test]
fn test_href_round_trips_through_resolve() {
    let router = table(false);
    let params = HashMap::from([("username".to_string(), "o'neil & co".to_string())]);
    let href = router.href("user", &params).unwrap();
    assert_eq!(router.resolve(&href).unwrap().param("username"), Some("o'neil & co"));
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_back_forward_re_resolves() {
    let router = table(true);
    let mut history = MemoryHistory::default();

    history.push(router.resolve("/users").unwrap().href());
    history.push(router.resolve("/user/alice").unwrap().href());

    assert!(history.back());
    assert_eq!(*router.resolve(history.current()).unwrap().view(), "Users");

    assert!(history.forward());
    let nav = router.resolve(history.current()).unwrap();
    assert_eq!(*nav.view(), "UserDetail");
    assert_eq!(nav.param("username"), Some("alice"));
}
