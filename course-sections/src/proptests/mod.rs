//! Property-based tests for the section resolvers
//!
//! These tests check invariants that must hold for ANY course snapshot, not
//! just the hand-written scenarios in the unit tests.

mod generators;
mod invariants;
