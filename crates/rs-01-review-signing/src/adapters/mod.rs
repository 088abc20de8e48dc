//! In-process adapters for the wallet and the review store.

pub mod local_wallet;
pub mod memory_store;
