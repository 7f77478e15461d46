//! Integration tests for atomic reputation scoring.
//!
//! Test files live in `tests/`; shared fixtures in [`helpers`].

pub mod helpers;
