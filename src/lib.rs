//! CivicTrack - local-first civic issue tracker
//!
//! This crate provides the core functionality for the `ct` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Account, Profile, Issue, Status, Location)
//! - [`storage`] - SQLite-backed key-value store
//! - [`auth`] - Credential store and session management
//! - [`issues`] - Issue repository and demo-data seeding
//! - [`browse`] - Filter-search-pagination pipeline
//! - [`config`] - Store path resolution
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod issues;
pub mod model;
pub mod storage;
pub mod validate;

pub use error::{Error, Result};
