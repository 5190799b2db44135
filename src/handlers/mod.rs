// src/handlers/mod.rs
pub mod error;
pub mod submission;
pub mod valuation;
