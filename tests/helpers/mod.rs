//! Shared test helpers
#![allow(dead_code)]

pub mod replacer_helpers;
pub mod source_fixtures;
