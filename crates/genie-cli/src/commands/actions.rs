use anyhow::Result;
use genie_core::quick_action::QuickActionSet;

pub fn list(json: bool) -> Result<()> {
    let actions = QuickActionSet::default();

    if json {
        println!("{}", serde_json::to_string_pretty(&actions.actions)?);
        return Ok(());
    }

    for action in actions.iter() {
        let marker = if action.highlighted { "*" } else { " " };
        println!("{}{:<10} {:<18} {}", marker, action.id, action.label, action.text);
    }
    Ok(())
}
