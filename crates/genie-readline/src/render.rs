//! Terminal rendering of session events, cards and snapshots.

use colored::Colorize;
use genie_core::card::Card;
use genie_core::destination::all_destinations;
use genie_core::quick_action::QuickActionSet;
use genie_core::scrapbook::{PhotoSet, ScrapbookStage};
use genie_core::session::{ChatMessage, MessageRole, SessionEvent, SessionSnapshot};
use genie_core::view::ViewMode;

/// Prints a single event as it arrives from the controller.
pub fn event(event: &SessionEvent) {
    match event {
        SessionEvent::ViewChanged { to, .. } => view_banner(*to),
        SessionEvent::BackgroundChanged { background, .. } => {
            println!("{}", format!("  ~ backdrop: {}", background).bright_black());
        }
        SessionEvent::MessageAppended { message } => {
            // The REPL echoes user input itself.
            if message.role == MessageRole::Assistant {
                assistant_message(message);
            }
        }
        SessionEvent::LoadingChanged { loading: true } => {
            println!("{}", "  Genie is thinking...".bright_black().italic());
        }
        SessionEvent::LoadingChanged { loading: false } => {}
        SessionEvent::KarmaChanged { karma, delta } => {
            println!(
                "{}",
                format!("  +{} karma (total {})", delta, karma).bright_yellow()
            );
        }
        SessionEvent::StepChanged { step } => {
            tracing::debug!(step, "Step changed");
        }
        SessionEvent::PhotosChanged { stage, count } => match stage {
            ScrapbookStage::Upload => {
                println!(
                    "{}",
                    "Upload your trip photos with /photos <files...> or try /demo.".bright_black()
                );
            }
            ScrapbookStage::View => {
                println!(
                    "{}",
                    format!("Journal ready: {} memories. /retake to start over.", count)
                        .bright_green()
                );
            }
        },
        SessionEvent::SessionReset => {
            println!("{}", "Session cleared.".bright_black());
        }
    }
}

fn view_banner(view: ViewMode) {
    let banner = match view {
        ViewMode::Map => "=== Map: where to? (/map, /go <id>) ===".to_string(),
        ViewMode::Traveling => "✈  Traveling...".to_string(),
        ViewMode::Chat => "=== Chat: ask the Genie (/actions for ideas) ===".to_string(),
        ViewMode::Scrapbook => "=== Scrapbook studio ===".to_string(),
    };
    println!("{}", banner.bright_magenta().bold());
}

fn assistant_message(message: &ChatMessage) {
    println!("{}", "[Genie]".bright_magenta());
    for line in message.content.lines() {
        println!("{}", line.bright_blue());
    }
    if let Some(card) = &message.card {
        self::card(card);
    }
    println!();
}

/// Prints a card as an indented block.
pub fn card(card: &Card) {
    match card {
        Card::MoodItinerary {
            mood,
            place,
            activities,
        } => {
            println!("  {} {}", mood.bold(), format!("· {}", place).bright_black());
            for activity in activities {
                println!("    - {}", activity);
            }
        }
        Card::ScamAlert {
            location,
            scam_type,
            risk_level,
            report_count,
        } => {
            println!("  {} {}", "SCAM ALERT".red().bold(), location);
            println!("    {} ({} risk)", scam_type, risk_level);
            println!("    {}", scam_reports(*report_count).bright_black());
        }
        Card::BudgetReality {
            location,
            expected_price,
            real_price,
            hidden_costs,
        } => {
            println!("  {} {}", "BUDGET REALITY".yellow().bold(), location);
            println!("    expected ${}  real ${}", expected_price, real_price);
            if let Some(percent) = card.expectation_percent() {
                println!("    {}", budget_bar(percent));
            }
            for cost in hidden_costs {
                println!("    + {}", cost);
            }
        }
        Card::LocalLife { city, timeline } => {
            println!("  {} {}", "A DAY IN".cyan().bold(), city);
            for entry in timeline {
                println!("    {}  {}", entry.time.bright_black(), entry.activity);
            }
        }
        Card::DestinationExplorer {
            place,
            highlights,
            best_season,
        } => {
            println!("  {} {}", "EXPLORE".cyan().bold(), place);
            for highlight in highlights {
                println!("    * {}", highlight);
            }
            println!("    {}", format!("best season: {}", best_season).bright_black());
        }
        Card::FlightFinder {
            from,
            to,
            price,
            duration,
        } => {
            println!("  {} {} → {}", "FLIGHT".cyan().bold(), from, to);
            println!("    {}  {}", price.green(), duration.bright_black());
        }
        Card::LocalGuide {
            nearby_spot,
            kind,
            distance,
        } => {
            println!("  {} {}", "NEARBY".cyan().bold(), nearby_spot);
            println!("    {}", format!("{} · {}", kind, distance).bright_black());
        }
        Card::TripStats {
            total_spent,
            top_category,
        } => {
            println!("  {} {}", "TRIP STATS".cyan().bold(), total_spent);
            println!("    {}", format!("mostly {}", top_category).bright_black());
        }
    }
}

fn scam_reports(report_count: u32) -> String {
    format!("{} Reports (1h)", report_count)
}

fn budget_bar(percent: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent / 100.0) * WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}% of the real cost",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled.min(WIDTH)),
        percent
    )
}

/// Prints the destination pins.
pub fn map() {
    println!("{}", "Destinations:".bright_magenta());
    for destination in all_destinations() {
        println!(
            "  {:<6} {:<10} {}",
            destination.id.to_string().bright_cyan(),
            destination.display_name,
            destination.attraction.bright_black()
        );
    }
}

pub fn quick_actions(actions: &QuickActionSet) {
    println!("{}", "Quick actions (/do <id>):".bright_magenta());
    for action in actions.iter() {
        let label = if action.highlighted {
            action.label.bright_yellow().bold()
        } else {
            action.label.normal()
        };
        println!("  {:<10} {}", action.id.bright_cyan(), label);
    }
}

pub fn photos(photos: &PhotoSet) {
    for photo in photos.photos() {
        println!("  {} {}", photo.caption.bold(), photo.image_ref.bright_black());
    }
}

pub fn status(snapshot: &SessionSnapshot) {
    println!("{}", "Status:".bright_magenta());
    println!("  view:        {}", snapshot.view);
    println!(
        "  destination: {}",
        snapshot.destination.as_deref().unwrap_or("-")
    );
    println!("  backdrop:    {}", snapshot.background);
    println!("  karma:       {}", snapshot.karma);
    println!("  messages:    {}", snapshot.messages.len());
    if snapshot.loading {
        println!("  {}", "waiting for a reply".bright_black());
    }
    if snapshot.view == ViewMode::Scrapbook {
        println!("  photos:      {}", snapshot.photos.len());
        photos(&snapshot.photos);
    }
}

pub fn help() {
    println!("{}", "Commands:".bright_magenta());
    for (command, description) in [
        ("/map", "list destinations"),
        ("/go <id>", "travel to a destination"),
        ("/actions", "list quick actions"),
        ("/do <id>", "run a quick action"),
        ("/back", "leave the scrapbook"),
        ("/demo", "use the demo photos"),
        ("/photos <files...>", "load local images into the scrapbook"),
        ("/retake", "clear the scrapbook photos"),
        ("/home", "reset to the map"),
        ("/status", "show the session state"),
        ("quit", "exit"),
    ] {
        println!("  {:<20} {}", command.bright_cyan(), description.bright_black());
    }
    println!("{}", "Anything else is sent to the Genie.".bright_black());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scam_reports_cover_the_last_hour() {
        assert_eq!(scam_reports(12), "12 Reports (1h)");
    }

    #[test]
    fn test_budget_bar_is_capped() {
        assert!(budget_bar(100.0).starts_with(&format!("[{}]", "#".repeat(20))));
        assert!(budget_bar(0.0).starts_with(&format!("[{}]", "-".repeat(20))));
        assert!(budget_bar(50.0).contains("50%"));
    }
}
