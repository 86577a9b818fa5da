//! Line commands typed into the interactive views.

use dayglow_core::TimerMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Start/pause toggle
    Toggle,
    Reset,
    Mode(TimerMode),
    /// Change weather location
    Location(String),
    /// Dismiss the completion notice
    Dismiss,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str =
    "commands: s=start/pause  r=reset  w=work  b=break  l <place>=location  d=dismiss  q=quit";

pub fn parse(line: &str) -> UserCommand {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "" | "s" | "start" | "pause" | "p" => UserCommand::Toggle,
        "r" | "reset" => UserCommand::Reset,
        "w" | "work" => UserCommand::Mode(TimerMode::Work),
        "b" | "break" => UserCommand::Mode(TimerMode::Break),
        "l" | "loc" | "location" if !rest.is_empty() => UserCommand::Location(rest.to_string()),
        "d" | "dismiss" | "ok" => UserCommand::Dismiss,
        "h" | "help" | "?" => UserCommand::Help,
        "q" | "quit" | "exit" => UserCommand::Quit,
        _ => UserCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timer_controls() {
        assert_eq!(parse("s"), UserCommand::Toggle);
        assert_eq!(parse(""), UserCommand::Toggle);
        assert_eq!(parse("  Reset "), UserCommand::Reset);
        assert_eq!(parse("b"), UserCommand::Mode(TimerMode::Break));
        assert_eq!(parse("work"), UserCommand::Mode(TimerMode::Work));
        assert_eq!(parse("q"), UserCommand::Quit);
    }

    #[test]
    fn location_needs_an_argument() {
        assert_eq!(
            parse("l salaya"),
            UserCommand::Location("salaya".to_string())
        );
        assert_eq!(parse("l"), UserCommand::Unknown("l".to_string()));
    }

    #[test]
    fn unknown_input_is_kept() {
        assert_eq!(parse("xyz 1"), UserCommand::Unknown("xyz 1".to_string()));
    }
}
