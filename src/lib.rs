//! Client core for the employee performance-evaluation admin console.
//!
//! This crate provides typed access to the evaluation REST API together with
//! the pure computations the console relies on: category weight
//! normalization, period status resolution, shared formatting and form
//! validation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
