//! Core pipeline for winstall: fetch a Windows installer, verify its SHA-256
//! against the published checksum descriptor, run it silently, and delete
//! the temporary file afterward.

pub mod artifact;
pub mod checksum;
pub mod config;
pub mod error;
pub mod fetch;
pub mod install;
pub mod logging;
pub mod runner;
