//! Core business logic for Changemaker.
//!
//! This crate contains pure change-making logic with ZERO web dependencies.
//!
//! # Modules
//!
//! - `change` - Coin denominations and greedy change decomposition

pub mod change;
