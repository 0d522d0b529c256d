use std::str::FromStr;

pub const HELP: &str = "Commands: [n]ext joke, [e]xplain joke, [h]elp, [q]uit";

/// The triggers a user can fire from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Explain,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Ok(Command::Next),
            "e" | "explain" => Ok(Command::Explain),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}
