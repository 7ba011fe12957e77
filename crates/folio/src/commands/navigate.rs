use anyhow::Result;
use colored::Colorize;
use folio::{App, Page};

pub fn execute(app: &App, steps: &[String]) -> Result<()> {
    let mut navigator = app.navigator()?;
    println!("  start  {}", navigator.current().href().cyan());

    for step in steps {
        let moved = match step.as_str() {
            ":back" => navigator.back()?,
            ":forward" => navigator.forward()?,
            target => navigator.push(target).map(|_| true)?,
        };

        if !moved {
            println!("  {} {} (no history entry)", "⚠".yellow(), step);
            continue;
        }

        let nav = navigator.current();
        let page = Page::from_navigation(nav)?;
        println!("  {:<8} {} → {}", step, nav.href().cyan(), page.to_string().bold());
    }

    println!();
    println!("History depth: {}", navigator.history().depth());
    Ok(())
}
