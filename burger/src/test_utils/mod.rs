//! Test utilities
//!
//! Hand-written stub components and randomized fixtures for unit testing.
//!
//! The stubs implement the component ports directly and count how often
//! they are queried, which is all the burger tests need to verify.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
