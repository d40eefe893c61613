//! Shared test utilities for data-transform integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod app;
pub mod assertions;
pub mod fixtures;

pub use app::*;
pub use builders::*;
pub use fixtures::*;
