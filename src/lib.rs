//! Turns free-text business requirements into Gherkin scenarios with a
//! language model, then selects the happy paths worth automating.

pub mod auth;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod providers;
pub mod scenarios;
