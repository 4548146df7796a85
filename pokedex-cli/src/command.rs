//! REPL command parsing.

use thiserror::Error;

/// A parsed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Name and description of every command, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Explores locations"),
    ("mapb", "Returns to previous locations"),
    ("explore", "Explores the given location"),
    ("catch", "Attempts to catch a pokemon"),
    ("inspect", "Inspects a pokemon"),
    ("pokedex", "Lists all captured pokemon"),
];

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_lowercase);

        let require = |command: &'static str, argument: &'static str| {
            arg.clone()
                .ok_or(ParseError::MissingArgument { command, argument })
        };

        let command = match name.to_lowercase().as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(require("explore", "area")?),
            "catch" => Command::Catch(require("catch", "pokemon")?),
            "inspect" => Command::Inspect(require("inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("help", Command::Help ; "help")]
    #[test_case("  EXIT  ", Command::Exit ; "case and padding")]
    #[test_case("map", Command::Map ; "map")]
    #[test_case("mapb", Command::MapBack ; "map back")]
    #[test_case("explore pastoria-city-area", Command::Explore("pastoria-city-area".into()) ; "explore")]
    #[test_case("catch Pikachu", Command::Catch("pikachu".into()) ; "catch lowercases")]
    #[test_case("inspect pidgey extra", Command::Inspect("pidgey".into()) ; "extra words ignored")]
    #[test_case("pokedex", Command::Pokedex ; "pokedex")]
    fn test_parse(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), Ok(Some(expected)));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_missing_argument() {
        let err = Command::parse("catch").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                command: "catch",
                argument: "pokemon"
            }
        );
        assert_eq!(err.to_string(), "usage: catch <pokemon>");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            Command::parse("fly cerulean"),
            Err(ParseError::Unknown("fly".into()))
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for (name, _) in COMMANDS {
            let line = format!("{name} x");
            assert!(Command::parse(&line).unwrap().is_some(), "{name}");
        }
    }
}
