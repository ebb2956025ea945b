//! On-disk path definitions for test fixtures and the product under test.
//!
//! This module contains **no I/O logic** beyond the opt-in layout check on
//! [`fixtures::PathSet`]. Everything else is typed path construction.

pub mod fixtures;
pub mod product;
