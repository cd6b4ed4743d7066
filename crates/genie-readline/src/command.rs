//! REPL input parsing.

/// Slash commands offered for completion, in help order.
pub const COMMANDS: [&str; 11] = [
    "/map", "/go", "/actions", "/do", "/back", "/demo", "/photos", "/retake", "/home", "/status",
    "/help",
];

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Map,
    Go(String),
    Actions,
    Do(String),
    Back,
    Demo,
    Photos(Vec<String>),
    Retake,
    Home,
    Status,
    Help,
    /// A slash command that needs an argument it did not get.
    MissingArgument(&'static str),
    Unknown(String),
    /// Anything that is not a command goes to the Genie verbatim.
    Say(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            return Command::Quit;
        }
        if !trimmed.starts_with('/') {
            return Command::Say(line.to_string());
        }

        let mut parts = trimmed.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<String> = parts.map(str::to_string).collect();
        let first = args.first().cloned();

        match name {
            "/map" => Command::Map,
            "/go" => first.map_or(Command::MissingArgument("/go <id>"), Command::Go),
            "/actions" => Command::Actions,
            "/do" => first.map_or(Command::MissingArgument("/do <id>"), Command::Do),
            "/back" => Command::Back,
            "/demo" => Command::Demo,
            "/photos" if args.is_empty() => Command::MissingArgument("/photos <files...>"),
            "/photos" => Command::Photos(args),
            "/retake" => Command::Retake,
            "/home" => Command::Home,
            "/status" => Command::Status,
            "/help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_said_verbatim() {
        assert_eq!(
            Command::parse("  is it a scam? "),
            Command::Say("  is it a scam? ".to_string())
        );
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(Command::parse("/go tokyo"), Command::Go("tokyo".to_string()));
        assert_eq!(Command::parse("/do scam"), Command::Do("scam".to_string()));
        assert_eq!(
            Command::parse("/photos a.jpg b.png"),
            Command::Photos(vec!["a.jpg".to_string(), "b.png".to_string()])
        );
        assert_eq!(Command::parse("/go"), Command::MissingArgument("/go <id>"));
        assert_eq!(
            Command::parse("/photos"),
            Command::MissingArgument("/photos <files...>")
        );
    }

    #[test]
    fn test_quit_and_unknown() {
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse(" quit "), Command::Quit);
        assert_eq!(
            Command::parse("/teleport"),
            Command::Unknown("/teleport".to_string())
        );
    }

    #[test]
    fn test_every_command_parses() {
        for name in COMMANDS {
            assert!(!matches!(Command::parse(name), Command::Unknown(_)), "{name}");
        }
    }
}
