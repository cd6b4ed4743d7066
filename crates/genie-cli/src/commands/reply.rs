use std::sync::Arc;

use anyhow::{Context, Result};
use genie_core::rules::{RuleBook, is_scrapbook_request};
use genie_infrastructure::{ConfigService, TomlConfigRepository};
use serde_json::{Value, json};

/// Prints what the Genie would answer, without timers or session state.
pub async fn resolve(text: &str, extended: bool) -> Result<()> {
    let extended = if extended {
        true
    } else {
        let repository = TomlConfigRepository::new().context("Failed to locate config file")?;
        ConfigService::new(Arc::new(repository))
            .get_config()
            .await
            .extended_rules
    };

    let output = reply_json(text, &RuleBook::from_flag(extended))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn reply_json(text: &str, rules: &RuleBook) -> Result<Value> {
    if text.trim().is_empty() {
        anyhow::bail!("Nothing to resolve: the utterance is blank");
    }
    if is_scrapbook_request(text) {
        return Ok(json!({ "scrapbook": true }));
    }
    Ok(serde_json::to_value(rules.resolve(text))?)
}
