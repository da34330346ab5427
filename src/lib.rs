//! Severance Engine for CLT employment terminations
//!
//! This crate estimates the settlement owed when an employment relationship
//! ends: salary balance, notice payment or deduction, proportional 13th salary,
//! vacation pay and the severance-fund penalty, driven by the termination
//! category and a handful of elections made by the caller.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
