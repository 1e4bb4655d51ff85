//! Filesystem utilities for stencil.
//!
//! Provides the atomic write primitive used when persisting rendered
//! output.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
