use thiserror::Error;

/// Errors from parsing cards out of strings.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CardParseError {
    /// The value character wasn't one of `2`-`9`, `T`, `J`, `Q`, `K`, `A`.
    #[error("unexpected card value char {0}")]
    UnexpectedValueChar(char),

    /// The suit character wasn't one of `s`, `h`, `d`, `c`.
    #[error("unexpected card suit char {0}")]
    UnexpectedSuitChar(char),

    /// Cards are two characters each, value then suit.
    #[error("card strings are two chars per card, got {0} chars")]
    InvalidLength(usize),
}
