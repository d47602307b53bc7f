//! Phone-keypad letter combinations.
//!
//! Maps a digit string over `'2'..='9'` to the Cartesian product of each
//! digit's letter set, built iteratively: seed the accumulator with the
//! first digit's letters, then extend every partial string by every letter
//! of each later digit. Order is first-digit-major, letters appended in
//! keypad order.

use tracing::debug;

use kataforge_core::{KataforgeError, Result};

/// Letters printed on a keypad key.
///
/// Defined for exactly `'2'..='9'`; anything else is an
/// [`InvalidDigit`](KataforgeError::InvalidDigit) error rather than a
/// lookup panic.
pub fn letters_for(digit: char) -> Result<&'static str> {
    match digit {
        '2' => Ok("abc"),
        '3' => Ok("def"),
        '4' => Ok("ghi"),
        '5' => Ok("jkl"),
        '6' => Ok("mno"),
        '7' => Ok("pqrs"),
        '8' => Ok("tuv"),
        '9' => Ok("wxyz"),
        _ => Err(KataforgeError::InvalidDigit { digit }),
    }
}

/// Returns every string spelled by choosing one letter per digit.
///
/// The empty digit string yields an empty result, not a single empty
/// string. Output length is the product of the letter-set sizes (4 for
/// `'7'` and `'9'`, 3 otherwise).
///
/// # Examples
///
/// ```
/// use kataforge::keypad::letter_combinations;
///
/// let combos = letter_combinations("23")?;
/// assert_eq!(combos.len(), 9);
/// assert_eq!(combos[0], "ad");
/// assert_eq!(combos[8], "cf");
/// # Ok::<(), kataforge::KataforgeError>(())
/// ```
pub fn letter_combinations(digits: &str) -> Result<Vec<String>> {
    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let mut acc = vec![String::new()];
    for digit in digits.chars() {
        let letters = letters_for(digit)?;
        let mut grown = Vec::with_capacity(acc.len() * letters.len());
        for partial in &acc {
            for letter in letters.chars() {
                let mut next = String::with_capacity(digits.len());
                next.push_str(partial);
                next.push(letter);
                grown.push(next);
            }
        }
        acc = grown;
    }

    debug!(event = "letter_combinations_done", digits, combos = acc.len());
    Ok(acc)
}
