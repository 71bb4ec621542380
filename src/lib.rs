//! Income calculation engine for part-time shift tracking.
//!
//! This crate provides the pure computational core of a personal
//! shift-tracking and income-management tool: it converts raw shift records
//! and configurable pay rules into working-hour breakdowns, night-differential
//! pay, monthly and yearly aggregates, and projections against the Japanese
//! ¥1,030,000 ("103万円") dependent-income tax threshold.
//!
//! The engine performs no I/O and holds no state. Persistence, UI rendering,
//! export file generation, and notifications are external collaborators that
//! call into the functions of the [`calculation`] module with data shaped by
//! the [`models`] and [`config`] modules.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
