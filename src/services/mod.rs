// src/services/mod.rs
pub mod calculations;
pub mod growth_data;
pub mod locations;
pub mod sheets;
