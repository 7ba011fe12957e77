use anyhow::Result;
use colored::Colorize;
use folio::folio_router::RouteTarget;
use folio::App;

pub fn execute(app: &App) -> Result<()> {
    println!("{}", format!("Routes for {}", app.config.app.name).green().bold());
    println!();

    for (idx, route) in app.router.routes().enumerate() {
        let target = match route.target() {
            RouteTarget::View(view) => format!("{} ({})", view, view.component()),
            RouteTarget::Redirect(to) => format!("→ {}", to).yellow().to_string(),
        };
        let props = if route.props { " [props]".dimmed().to_string() } else { String::new() };
        let name = route.name.as_deref().unwrap_or("-");
        let title = route.get_meta("title").unwrap_or("-");

        println!(
            "  {:>2}. {:<24} {:<16} {:<16} {}{}",
            idx + 1,
            route.pattern().as_str().cyan(),
            name,
            title,
            target,
            props
        );
    }

    println!();
    println!(
        "Case-insensitive: {}",
        if app.router.is_case_insensitive() { "yes" } else { "no" }
    );

    Ok(())
}
