//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against map files written to
//! temporary directories.

mod ancestor;
mod config;
mod logging;
mod misc;
mod support;
mod traverse;
