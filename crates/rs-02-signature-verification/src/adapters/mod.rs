//! Adapters for the verification client port.

pub mod local_client;
