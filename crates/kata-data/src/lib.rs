//! Small data utilities for the kata crates.
//!
//! - **Rectangle** - a plain value with a computed area
//! - **Serial** - JSON encoding, and decoding onto a typed prototype

/// A width/height pair with a computed area.
pub mod rectangle;
/// JSON helpers built on `serde_json`.
pub mod serial;

// Re-exports for convenience
pub use rectangle::{Rectangle, rectangle};
pub use serial::{SerialError, deserialize, deserialize_strict, serialize};
