mod command;
mod helper;
mod render;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::Editor;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use genie_application::ViewController;
use genie_core::destination::Destination;
use genie_core::quick_action::QuickActionSet;
use genie_core::session::{Outcome, Rejection};
use genie_infrastructure::{ConfigService, TomlConfigRepository, import_photos};

use command::Command;
use helper::CliHelper;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "GENIE_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints why an operation was turned down. Blank input stays silent.
fn report(outcome: Outcome) {
    match outcome {
        Ok(_) | Err(Rejection::EmptyInput) => {}
        Err(rejection) => println!("{}", format!("  {}", rejection).yellow()),
    }
}

/// The Travel Genie REPL.
///
/// Loads the configuration, starts a [`ViewController`] and a renderer task
/// subscribed to its events, then feeds every input line to the controller.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // ===== Backend Initialization =====
    let repository = TomlConfigRepository::new().context("Failed to locate config file")?;
    tracing::debug!(path = %repository.path().display(), "Using config file");
    let config_service = ConfigService::new(Arc::new(repository));
    let config = config_service.get_config().await;

    let controller = ViewController::new(&config, QuickActionSet::default());

    // Render events as they are published, including delayed transitions.
    let mut events = controller.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => render::event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Renderer lagged behind session events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(controller.quick_actions())));

    println!("{}", "=== Travel Genie ===".bright_magenta().bold());
    println!(
        "{}",
        "Pick a destination with '/go <id>', '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();
    render::map();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match Command::parse(&line) {
                    Command::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Command::Map => render::map(),
                    Command::Go(id) => {
                        let name = Destination::find(&id)
                            .map(|d| d.display_name.to_string())
                            .unwrap_or_else(|| id.clone());
                        report(controller.select_destination(&id, &name).await);
                    }
                    Command::Actions => render::quick_actions(controller.quick_actions()),
                    Command::Do(id) => match controller.run_quick_action(&id).await {
                        Ok(outcome) => {
                            if outcome.is_ok() {
                                let text = controller
                                    .quick_actions()
                                    .get(&id)
                                    .map(|a| a.text.as_str())
                                    .unwrap_or_default();
                                println!("{}", format!("> {}", text).green());
                            }
                            report(outcome);
                        }
                        Err(e) => println!("{}", e.to_string().yellow()),
                    },
                    Command::Back => report(controller.back_to_chat().await),
                    Command::Demo => report(controller.use_demo_photos().await),
                    Command::Photos(paths) => match import_photos(paths.as_slice()).await {
                        Ok(import) => {
                            for (path, reason) in &import.skipped {
                                println!(
                                    "{}",
                                    format!("  skipped {}: {}", path.display(), reason).yellow()
                                );
                            }
                            report(controller.load_photos(import.refs).await);
                        }
                        Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                    },
                    Command::Retake => report(controller.retake_photos().await),
                    Command::Home => {
                        controller.reset().await;
                        render::map();
                    }
                    Command::Status => render::status(&controller.snapshot().await),
                    Command::Help => render::help(),
                    Command::MissingArgument(usage) => {
                        println!("{}", format!("Usage: {}", usage).yellow());
                    }
                    Command::Unknown(name) => {
                        println!("{}", format!("Unknown command: {}", name).bright_black());
                    }
                    Command::Say(text) => {
                        let outcome = controller.submit_utterance(&text).await;
                        if outcome.is_ok() {
                            println!("{}", format!("> {}", text.trim()).green());
                        }
                        report(outcome);
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Stop pending transitions so nothing prints after the prompt is gone.
    renderer.abort();
    controller.reset().await;

    Ok(())
}
