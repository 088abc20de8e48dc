//! Domain layer for review signature verification.
//!
//! Contains pure logic with no I/O dependencies.

pub mod display;
pub mod entities;
pub mod errors;
pub mod policy;
pub mod recovery;
pub mod wire;
