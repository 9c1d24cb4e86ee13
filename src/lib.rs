//! Left and right hand side association chains.
//!
//! An association chain is a singly-linked stack of borrowed (left, right)
//! pairs used as a lightweight symbol table or association list. Pushing
//! stacks a new pair on top, lookups scan from the top so the most recently
//! pushed pair for a left wins, and matching compares references by identity
//! rather than by value. Chains whose lefts are text additionally support
//! case-insensitive lookup by content.

mod chain;
mod pair;
#[cfg(test)]
mod proptests;

pub use chain::{Chain, Iter};
