//! The five game tokens.
//!
//! Elements are 0-based: `Rock` is 0 and `Spock` is 4. The set is closed;
//! every lookup keyed on an element is total.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::Error;

/// One of the five RPSLS tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Element {
    /// Number of elements.
    pub const COUNT: usize = 5;

    /// All elements in index order.
    pub const ALL: [Element; Element::COUNT] = [
        Element::Rock,
        Element::Paper,
        Element::Scissors,
        Element::Lizard,
        Element::Spock,
    ];

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an element by 0-based index.
    ///
    /// ```
    /// use rpsls::core::Element;
    ///
    /// assert_eq!(Element::from_index(0), Some(Element::Rock));
    /// assert_eq!(Element::from_index(4), Some(Element::Spock));
    /// assert_eq!(Element::from_index(5), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Keyboard shortcut for this element ('1' for Rock through '5' for Spock).
    #[must_use]
    pub const fn shortcut(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Look up an element by its keyboard shortcut.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        key.to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Self::from_index)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Rock => "Rock",
            Element::Paper => "Paper",
            Element::Scissors => "Scissors",
            Element::Lizard => "Lizard",
            Element::Spock => "Spock",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = Error;

    /// Parse a case-insensitive element name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownElement(trimmed.to_string()))
    }
}
