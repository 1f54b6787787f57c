//! Core library of the membership application admin portal.
//!
//! The interesting parts live in [`portal::applications`]: the alias-driven
//! normalization of four generations of raw application schemas into one
//! canonical view model, and the always-revertible multi-entity editing of
//! its bounded collections.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
