//! Reed-Solomon error correction over GF(256)
//!
//! Repairs symbol errors at unknown positions in byte codewords, the decoding
//! half of the codes used by QR and Data Matrix symbols.
//!
//! ```
//! let mut codeword = vec![
//!     0, 0, 0, 0, 55, 64, 236, 20, 236, 17, 236, 17, 236, 17, 236, 17, 233, 234, 27, 99, 188,
//!     204, 151, 48, 90, 104,
//! ];
//! let correction = rsdecode::decode(&mut codeword, 10).unwrap();
//! assert_eq!(correction.error_count(), 5);
//! assert_eq!(&codeword[..8], &[64, 69, 70, 87, 55, 64, 236, 17]);
//! ```

pub mod args;
pub mod codeword;
pub mod galois;
pub mod poly;
pub mod reed_solomon;

pub use args::parse_args;
pub use galois::{FieldError, Gf256};
pub use poly::Polynomial;
pub use reed_solomon::{decode, Correction, Decoder, DecoderConfig, RsError, RsResult};
