use anyhow::{anyhow, Context, Result};
use shared::TableConfig;
use web_sys::UrlSearchParams;

use super::logging::Logger;

const EMBEDDED_CONFIG: &str = include_str!("../../app-config.json");

/// Load the page configuration: the bundled `app-config.json` with query
/// string overrides (`pageSize`, `rows`, `seed`, `logLevel`) on top.
///
/// Never fails; invalid input is logged and the previous layer is kept.
pub fn load_config() -> TableConfig {
    let base = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            Logger::error_with_component("config", &format!("Using default configuration: {:#}", e));
            TableConfig::default()
        }
    };

    let query = current_query();
    match apply_query_overrides(base.clone(), &query) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("Ignoring query overrides: {:#}", e));
            base
        }
    }
}

pub fn parse_config(json: &str) -> Result<TableConfig> {
    let config = TableConfig::from_json(json).context("failed to parse app-config.json")?;
    config.validate().context("invalid table configuration")?;
    Ok(config)
}

pub fn apply_query_overrides(mut config: TableConfig, query: &str) -> Result<TableConfig> {
    let params = UrlSearchParams::new_with_str(query)
        .map_err(|e| anyhow!("malformed query string {:?}: {:?}", query, e))?;

    if let Some(value) = params.get("pageSize") {
        config.page_size = value
            .trim()
            .parse()
            .with_context(|| format!("invalid pageSize {:?}", value))?;
    }
    if let Some(value) = params.get("rows") {
        config.sample_size = value
            .trim()
            .parse()
            .with_context(|| format!("invalid rows {:?}", value))?;
    }
    if let Some(value) = params.get("seed") {
        config.sample_seed = Some(
            value
                .trim()
                .parse()
                .with_context(|| format!("invalid seed {:?}", value))?,
        );
    }
    if let Some(value) = params.get("logLevel") {
        config.log_level = value.trim().to_string();
    }

    config.validate().context("invalid query overrides")?;
    Ok(config)
}

fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}
