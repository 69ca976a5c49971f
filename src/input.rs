//! Text-input rules shared by front ends.
//!
//! The engine trusts its callers: it never sees a non-positive simulation
//! count or an unknown key. These helpers apply the rules a front end is
//! expected to enforce before calling in.

use crate::core::{Element, Error, Result};

/// A front-end action bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Element),
    Quit,
}

/// Map a key to a command: '1'..'5' play, Escape quits.
#[must_use]
pub fn shortcut(key: char) -> Option<Command> {
    match key {
        '\u{1b}' => Some(Command::Quit),
        _ => Element::from_shortcut(key).map(Command::Play),
    }
}

/// Parse a simulation count typed by the user.
///
/// Only ASCII digits are accepted. Zero, empty, and non-numeric text are
/// rejected; values above `cap` (including ones too large for `u64`) are
/// clamped to `cap`.
///
/// ```
/// use rpsls::input::parse_simulation_count;
///
/// assert_eq!(parse_simulation_count("250", 1_000_000).unwrap(), 250);
/// assert_eq!(parse_simulation_count("5000000", 1_000_000).unwrap(), 1_000_000);
/// assert!(parse_simulation_count("0", 1_000_000).is_err());
/// ```
pub fn parse_simulation_count(text: &str, cap: u64) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidSimulationCount(trimmed.to_string()));
    }

    let count = trimmed.parse::<u64>().unwrap_or(u64::MAX).min(cap);
    if count == 0 {
        return Err(Error::InvalidSimulationCount(trimmed.to_string()));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: u64 = 1_000_000;

    #[test]
    fn test_shortcuts() {
        assert_eq!(shortcut('1'), Some(Command::Play(Element::Rock)));
        assert_eq!(shortcut('5'), Some(Command::Play(Element::Spock)));
        assert_eq!(shortcut('\u{1b}'), Some(Command::Quit));
        assert_eq!(shortcut('9'), None);
        assert_eq!(shortcut('a'), None);
    }

    #[test]
    fn test_valid_counts() {
        assert_eq!(parse_simulation_count("1", CAP).unwrap(), 1);
        assert_eq!(parse_simulation_count(" 42 ", CAP).unwrap(), 42);
        assert_eq!(parse_simulation_count("1000000", CAP).unwrap(), CAP);
    }

    #[test]
    fn test_clamped_counts() {
        assert_eq!(parse_simulation_count("1000001", CAP).unwrap(), CAP);
        assert_eq!(
            parse_simulation_count("99999999999999999999999", CAP).unwrap(),
            CAP
        );
    }

    #[test]
    fn test_rejected_counts() {
        for text in ["", "   ", "0", "000", "-5", "12a", "1.5", "1,000"] {
            assert!(
                matches!(
                    parse_simulation_count(text, CAP),
                    Err(Error::InvalidSimulationCount(_))
                ),
                "{text:?} should be rejected"
            );
        }
    }
}
