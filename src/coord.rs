//! Textual grid references: `"B7"` to and from zero-based `(column, row)`.

use crate::common::GameError;
use crate::config::MAX_REFERENCE_LEN;

/// Maps `'A'..='Z'` to `1..=26`. Lowercase is rejected; callers normalise
/// case at the prompt boundary.
pub fn letter_to_index(letter: char) -> Result<usize, GameError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as usize - 'A' as usize + 1)
    } else {
        Err(GameError::InvalidCoordinate)
    }
}

/// Inverse of [`letter_to_index`]: maps `1..=26` to `'A'..='Z'`.
pub fn index_to_letter(index: usize) -> Result<char, GameError> {
    if (1..=26).contains(&index) {
        Ok((b'A' + (index - 1) as u8) as char)
    } else {
        Err(GameError::InvalidCoordinate)
    }
}

/// Parses a reference such as `"B7"` into zero-based `(column, row)`.
///
/// One leading uppercase letter selects the column; the decimal tail is the
/// 1-based row, so `"J10"` is the longest accepted form on the default grid.
pub fn parse_reference(input: &str) -> Result<(usize, usize), GameError> {
    if input.is_empty() || input.len() > MAX_REFERENCE_LEN {
        return Err(GameError::InvalidCoordinate);
    }
    let mut chars = input.chars();
    let letter = chars.next().ok_or(GameError::InvalidCoordinate)?;
    let column = letter_to_index(letter)? - 1;
    let tail = chars.as_str();
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidCoordinate);
    }
    let row: usize = tail.parse().map_err(|_| GameError::InvalidCoordinate)?;
    // row 0 has no zero-based form
    if row == 0 {
        return Err(GameError::InvalidCoordinate);
    }
    Ok((column, row - 1))
}

/// Formats zero-based `(column, row)` back into a reference such as `"B7"`.
pub fn format_reference(column: usize, row: usize) -> Result<String, GameError> {
    let letter = index_to_letter(column + 1)?;
    Ok(format!("{}{}", letter, row + 1))
}
