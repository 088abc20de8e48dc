//! # RealStay Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── sign_and_verify.rs  # signer → store → verifier, in process
//!     └── http_flow.rs        # the same flow over a real HTTP listener
//!
//! tests/benches/
//! └── verification_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rs-tests
//! cargo test -p rs-tests integration::http_flow
//!
//! # Benchmarks
//! cargo bench -p rs-tests
//! ```

pub mod integration;
