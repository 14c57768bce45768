//! Parsing of console answers.

/// A command typed on the human's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the card with this 1-based number.
    Card(usize),
    /// Leave the game.
    Exit,
}

impl Command {
    /// Classifies a line of input.
    ///
    /// A card number is a single decimal digit; range checking against the
    /// hand is left to the caller. Anything unrecognized yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::Command;
    ///
    /// assert_eq!(Command::parse("3"), Some(Command::Card(3)));
    /// assert_eq!(Command::parse("exit"), Some(Command::Exit));
    /// assert_eq!(Command::parse("12"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = trim_line_ending(input);

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) if digit.is_ascii_digit() => {
                digit.to_digit(10).map(|number| Self::Card(number as usize))
            }
            _ => (input == "exit").then_some(Self::Exit),
        }
    }

    /// Returns the 0-based hand index for a card command within a hand of
    /// `hand_len` cards.
    #[must_use]
    pub const fn card_index(self, hand_len: usize) -> Option<usize> {
        match self {
            Self::Card(number) if number >= 1 && number <= hand_len => Some(number - 1),
            _ => None,
        }
    }
}

/// Parses the answer to "Play first?".
///
/// Accepts `yes` or `no` in any letter case.
///
/// # Example
///
/// ```
/// use indigo::parse_yes_no;
///
/// assert_eq!(parse_yes_no("YES"), Some(true));
/// assert_eq!(parse_yes_no("No"), Some(false));
/// assert_eq!(parse_yes_no("y"), None);
/// ```
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let input = trim_line_ending(input);

    if input.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if input.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

fn trim_line_ending(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}
