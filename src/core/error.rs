//! Error kinds shared by every query on the board and lexicon.

use thiserror::Error;

/// Errors raised by board construction and word queries
///
/// Every error is terminal for the call that produced it: no state is
/// mutated before the arguments are validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A malformed argument: bad board shape, empty tile, unreadable word
    /// source, or a minimum word length below one.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A word, prefix, score or enumeration query ran before a lexicon was loaded.
    #[error("lexicon has not been loaded")]
    NotReady,
}

impl GameError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Reject minimum word lengths below one.
///
/// # Errors
/// Returns `GameError::InvalidInput` when `minimum_length` is zero.
pub fn check_minimum_length(minimum_length: usize) -> Result<(), GameError> {
    if minimum_length < 1 {
        return Err(GameError::invalid("minimum word length must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_length_zero_rejected() {
        assert!(matches!(
            check_minimum_length(0),
            Err(GameError::InvalidInput(_))
        ));
        assert!(check_minimum_length(1).is_ok());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::NotReady.to_string(),
            "lexicon has not been loaded"
        );
        assert_eq!(
            GameError::invalid("board is empty").to_string(),
            "invalid input: board is empty"
        );
    }
}
