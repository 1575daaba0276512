//! Types and structures for Reed-Solomon decoding

use smallvec::SmallVec;

/// At most 127 errors fit in a 255-symbol codeword; most codes fix far fewer.
pub(crate) const INLINE_ERRORS: usize = 16;

/// Error positions or magnitudes for one codeword
pub type ErrorList<T> = SmallVec<[T; INLINE_ERRORS]>;

/// Configuration for the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Multiply each error magnitude by the inverse location again.
    ///
    /// Data Matrix codewords need this; QR codewords do not.
    pub data_matrix: bool,
}

impl DecoderConfig {
    pub fn new(data_matrix: bool) -> Self {
        Self { data_matrix }
    }

    pub fn with_data_matrix(mut self, data_matrix: bool) -> Self {
        self.data_matrix = data_matrix;
        self
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        Self::new(matches.get_flag("data-matrix"))
    }
}

/// Outcome of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// Every syndrome was zero; nothing was changed
    Clean,
    /// Errors were found and corrected in place
    Repaired {
        /// Codeword indices, in the order the locator roots were found
        positions: ErrorList<usize>,
        /// Value XORed into the codeword at the matching position
        magnitudes: ErrorList<u8>,
    },
}

impl Correction {
    pub fn is_clean(&self) -> bool {
        matches!(self, Correction::Clean)
    }

    pub fn error_count(&self) -> usize {
        match self {
            Correction::Clean => 0,
            Correction::Repaired { positions, .. } => positions.len(),
        }
    }
}
