use std::io::{self, Write};

/// A line of player input translated into a session call
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Primary action on the tile at `(x, y)`
    Act(i32, i32),
    Toggle,
    NewGame,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first = words.next()?;

        let command = match first.to_ascii_lowercase().as_str() {
            "m" | "mode" | "toggle" => Self::Toggle,
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            x => {
                let x = x.parse().ok()?;
                let y = words.next()?.parse().ok()?;
                Self::Act(x, y)
            }
        };

        // trailing words mean a typo
        words.next().is_none().then_some(command)
    }
}

pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <x> <y>   scan or extract at column x, row y")?;
    writeln!(out, "  m, mode   toggle between Scan and Extract Mode")?;
    writeln!(out, "  n, new    start a new game")?;
    writeln!(out, "  q, quit   leave")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(Command::parse("3 4"), Some(Command::Act(3, 4)));
        assert_eq!(Command::parse("  10   0 "), Some(Command::Act(10, 0)));
        assert_eq!(Command::parse("-1 2"), Some(Command::Act(-1, 2)));
    }

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(Command::parse("M"), Some(Command::Toggle));
        assert_eq!(Command::parse("mode"), Some(Command::Toggle));
        assert_eq!(Command::parse("New"), Some(Command::NewGame));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("3"), None);
        assert_eq!(Command::parse("3 x"), None);
        assert_eq!(Command::parse("1 2 3"), None);
        assert_eq!(Command::parse("dig"), None);
    }
}
