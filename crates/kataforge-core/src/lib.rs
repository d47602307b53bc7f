//! Kataforge Core - Core types for the kataforge exercise library
//!
//! This crate provides the pieces the algorithm crate builds on:
//! - The singly linked list node shared by the list exercises
//! - The library-wide error type and result alias

pub mod error;
pub mod list;

pub use error::{KataforgeError, Result};
pub use list::{List, ListNode};
