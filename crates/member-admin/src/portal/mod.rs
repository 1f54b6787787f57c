//! Admin portal modules.

pub mod applications;
