// Checks dotted notation where every element is letters, or `a` followed by a number.
use std::num::ParseIntError;

use log::debug;
use thiserror::Error;

use crate::Iter;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing number after 'a'")]
    MissingNumber,
    #[error("{segment}: not a number")]
    NotANumber {
        segment: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{letter}: not a letter")]
    NotALetter { letter: char },
}

/// Checks that `s` is dot-separated elements, each being `<letter>+` or `a.<number>`.
///
/// ```
/// use cutiter::dotted::{check_valid_format, FormatError};
/// assert_eq!(Ok(()), check_valid_format("bb.a.0.cc"));
/// assert_eq!(Err(FormatError::MissingNumber), check_valid_format("a"));
/// ```
pub fn check_valid_format(s: &str) -> Result<(), FormatError> {
    check(s).map_err(|e| {
        debug!("rejected {:?}: {}", s, e);
        e
    })
}

fn check(s: &str) -> Result<(), FormatError> {
    let mut it = Iter::default();
    let mut next = it.start(s, ".");
    while let Some(k) = next {
        if k == "a" {
            let number = it.advance().ok_or(FormatError::MissingNumber)?;
            number.parse::<u64>().map_err(|source| FormatError::NotANumber {
                segment: number.to_string(),
                source,
            })?;
        } else if let Some(letter) = k.chars().find(|c| !c.is_alphabetic()) {
            return Err(FormatError::NotALetter { letter });
        }
        next = it.advance();
    }
    Ok(())
}
