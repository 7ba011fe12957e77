use anyhow::Result;
use colored::Colorize;
use folio::{App, Page};

pub fn execute(app: &App, path: &str, json: bool) -> Result<()> {
    let nav = match app.router.resolve(path) {
        Ok(nav) => nav,
        Err(err) if json => {
            let data = serde_json::json!({ "requested": path, "error": err.to_string() });
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    let page = Page::from_navigation(&nav)?;

    if json {
        let data = serde_json::json!({
            "requested": nav.requested(),
            "path": nav.path(),
            "pattern": nav.route().pattern().as_str(),
            "view": nav.view(),
            "page": page,
            "params": nav.params(),
            "query": nav.query(),
            "hash": nav.hash(),
            "redirected_from": nav.redirected_from(),
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    for from in nav.redirected_from() {
        println!("  {} {}", "redirected from".yellow(), from);
    }
    println!("{} {} → {}", "✓".green(), nav.path().cyan(), page.to_string().bold());
    println!("  pattern: {}", nav.route().pattern());
    println!("  component: {}", nav.view().component());

    let mut params: Vec<_> = nav.params().iter().collect();
    params.sort();
    for (key, value) in params {
        println!("  :{} = {}", key, value);
    }

    Ok(())
}
