use std::collections::HashMap;

use anyhow::{Context, Result};
use folio::App;

pub fn execute(app: &App, name: &str, params: &[String]) -> Result<()> {
    let params = parse_params(params)?;
    let href = app
        .router
        .href(name, &params)
        .with_context(|| format!("Cannot build a path for {:?}", name))?;

    println!("{}", href);
    Ok(())
}

fn parse_params(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("Expected key=value, got {:?}", pair))
        })
        .collect()
}
