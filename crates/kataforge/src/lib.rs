//! Kataforge - classic algorithm exercises
//!
//! This crate provides a small library of self-contained textbook
//! algorithms over in-memory data:
//! - N-sum search: [`three_sum`], [`three_sum_target`], [`four_sum`],
//!   and the exact closest variant [`three_sum_closest`]
//! - Phone-keypad letter combinations ([`letter_combinations`])
//! - Bracket validation ([`is_balanced`])
//! - Balanced parenthesis generation ([`parens::generate`])
//! - Linked-list operations ([`remove_nth_from_end`], [`merge_sorted`])
//!
//! Every operation is a pure synchronous computation: it takes its input,
//! returns a fresh result, and shares no state across calls.

pub mod brackets;
pub mod keypad;
pub mod list;
pub mod parens;
pub mod sum;

pub use kataforge_core::{KataforgeError, List, ListNode, Result};

pub use brackets::is_balanced;
pub use keypad::letter_combinations;
pub use list::{merge_sorted, merge_sorted_recursive, remove_nth_from_end};
pub use parens::generate as generate_parentheses;
pub use sum::{four_sum, three_sum, three_sum_closest, three_sum_target, Quad, Triple};
