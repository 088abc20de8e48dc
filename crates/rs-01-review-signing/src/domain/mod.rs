//! Domain layer for review signing.

pub mod entities;
pub mod errors;
