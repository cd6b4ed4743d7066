use anyhow::Result;
use genie_core::destination::all_destinations;

pub fn list(json: bool) -> Result<()> {
    let destinations = all_destinations();

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
        return Ok(());
    }

    for destination in destinations {
        println!(
            "{:<6} {:<10} {:<8} {}",
            destination.id.to_string(),
            destination.display_name,
            destination.background.to_string(),
            destination.attraction
        );
    }
    Ok(())
}
