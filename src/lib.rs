//! Synthetic CSS fixtures for stress tests.
//!
//! Each fixture is a file of `.class<k> {color: #000;}` rules sized to
//! roughly a target number of megabytes.

pub mod error;
pub mod generator;
pub mod rule;

pub use error::{GenerateError, Result};
pub use generator::{
    fixture_file_name, generate, generate_with, write_fixture, FixturePlan, GeneratedFile,
};
