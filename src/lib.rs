//! Shift Roster Engine
//!
//! This crate provides a data model and reconciliation engine for monthly
//! shift schedules: assigning employees to day, night, and custom shifts per
//! location, tracking per-assignment earnings, and deriving monthly
//! statistics and earnings history.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
