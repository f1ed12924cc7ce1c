//! # Facade Demo Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── doubles.rs    # Subsystem doubles that count creations and drops
//!     ├── output.rs     # Composite output across every configuration
//!     ├── ownership.rs  # Release accounting for owned vs borrowed slots
//!     └── runtime.rs    # Full demo output
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fc-tests
//!
//! # By category
//! cargo test -p fc-tests integration::ownership::
//! ```

pub mod integration;
