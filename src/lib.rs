//! fundboard - Terminal-based fund request dashboard
//!
//! This library provides the core functionality for fundboard, a dashboard for
//! creating and reviewing organizational fund requests: aggregate statistics
//! and recent activity on one view, and a fund-creation form with a per-year
//! budget table and a year-keyed allocation table on the other.
//!
//! Fund data is in-memory sample data for the lifetime of the process; only
//! user settings are ever written to disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (years, amounts, allocations, requests)
//! - `planner`: Budget year ledger, allocation matrix, and their coordinator
//! - `sample`: Static sample data
//! - `display`: Plain terminal output formatting
//! - `tui`: The interactive terminal interface

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod planner;
pub mod sample;
pub mod tui;

pub use error::FundboardError;
