//! rustyline helper: slash-command and argument completion.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use genie_core::destination::all_destinations;
use genie_core::quick_action::QuickActionSet;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

/// Completes commands, destination ids after `/go` and action ids after `/do`.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    destinations: Vec<String>,
    actions: Vec<String>,
}

impl CliHelper {
    pub fn new(actions: &QuickActionSet) -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            destinations: all_destinations()
                .into_iter()
                .map(|d| d.id.to_string())
                .collect(),
            actions: actions.iter().map(|a| a.id.clone()).collect(),
        }
    }

    fn arguments(&self, command: &str) -> Option<&[String]> {
        match command {
            "/go" => Some(&self.destinations),
            "/do" => Some(&self.actions),
            _ => None,
        }
    }

    /// Start offset of the word under completion and its candidates.
    fn candidates(&self, line: &str) -> (usize, Vec<&str>) {
        if !line.starts_with('/') {
            return (0, Vec::new());
        }

        let (start, word, pool) = match line.split_once(' ') {
            None => (0, line, self.commands.as_slice()),
            Some((command, arg)) => match self.arguments(command) {
                Some(values) if !arg.contains(' ') => (command.len() + 1, arg, values),
                _ => return (0, Vec::new()),
            },
        };

        let matches = pool
            .iter()
            .filter(|value| value.starts_with(word))
            .map(String::as_str)
            .collect();
        (start, matches)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|value| Pair {
                display: value.to_string(),
                replacement: value.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        match line.split_once(' ') {
            Some((command, rest)) => Owned(format!("{} {}", command.bright_cyan(), rest.bold())),
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .into_iter()
            .find(|value| value.len() > typed.len())
            .map(|value| value[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CliHelper {
        CliHelper::new(&QuickActionSet::default())
    }

    #[test]
    fn test_completes_command_names() {
        assert_eq!(helper().candidates("/g"), (0, vec!["/go"]));
        assert_eq!(helper().candidates("hello"), (0, vec![]));
    }

    #[test]
    fn test_completes_destination_ids_after_go() {
        assert_eq!(helper().candidates("/go t"), (4, vec!["tokyo"]));
        assert_eq!(helper().candidates("/go ").1.len(), 4);
    }

    #[test]
    fn test_completes_action_ids_after_do() {
        assert_eq!(helper().candidates("/do sc"), (4, vec!["scam", "scrapbook"]));
    }

    #[test]
    fn test_no_argument_completion_elsewhere() {
        assert_eq!(helper().candidates("/map x"), (0, vec![]));
        assert_eq!(helper().candidates("/go tokyo x"), (0, vec![]));
    }
}
