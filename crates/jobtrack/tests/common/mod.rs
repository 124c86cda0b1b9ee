//! Shared test utilities for jobtrack integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated test execution with a temp working directory
//! - `PdfBuilder` for writing small text PDFs programmatically

pub mod builders;
pub mod harness;

pub use builders::PdfBuilder;
pub use harness::TestHarness;
