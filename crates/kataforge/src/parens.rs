//! Balanced parenthesis generation.
//!
//! Depth-first construction over `(` and `)`: at any point an opener may
//! be placed while fewer than `n` are used, and a closer while closers
//! trail openers. Every completed string of length `2n` is balanced, and
//! no string is produced twice, so the result needs no deduplication and
//! counts the nth Catalan number.

/// Returns all balanced parenthesis strings of length `2n`.
///
/// `n = 0` yields an empty result, consistent with the empty-input
/// behavior of the other generators in this library.
///
/// # Examples
///
/// ```
/// use kataforge::parens;
///
/// assert_eq!(
///     parens::generate(3),
///     vec!["((()))", "(()())", "(())()", "()(())", "()()()"]
/// );
/// ```
pub fn generate(n: usize) -> Vec<String> {
    let mut results = Vec::new();
    if n == 0 {
        return results;
    }
    let mut current = String::with_capacity(2 * n);
    place(n, 0, 0, &mut current, &mut results);
    results
}

/// Places the next character, backtracking through both choices.
fn place(n: usize, opens: usize, closes: usize, current: &mut String, results: &mut Vec<String>) {
    if current.len() == 2 * n {
        results.push(current.clone());
        return;
    }
    if opens < n {
        current.push('(');
        place(n, opens + 1, closes, current, results);
        current.pop();
    }
    if closes < opens {
        current.push(')');
        place(n, opens, closes + 1, current, results);
        current.pop();
    }
}
