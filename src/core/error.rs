use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Two sequences that must line up position by position have different lengths.
    #[error("length mismatch: expected {expected} items, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::LengthMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_pass() {
        assert_eq!(Error::check_len(4, 4), Ok(()));
    }

    #[test]
    fn mismatch_message_names_both_lengths() {
        let err = Error::check_len(2, 1).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 2, actual: 1 });
        assert_eq!(err.to_string(), "length mismatch: expected 2 items, got 1");
    }
}
