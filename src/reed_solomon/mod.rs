//! Reed-Solomon Error Correction Module
//!
//! This module locates and repairs symbol errors in GF(256) Reed-Solomon
//! codewords such as the error correction blocks of QR and Data Matrix symbols.
//! Errors are found at unknown positions; erasures and encoding are not handled.

pub mod batch;
pub mod decoder;
pub mod error;
pub mod types;

pub use batch::*;
pub use decoder::*;
pub use error::*;
pub use types::*;
