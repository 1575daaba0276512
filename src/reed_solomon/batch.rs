//! Decoding many independent codewords at once
//!
//! Each codeword is decoded on its own; the only shared state is the
//! read-only field tables, so codewords are spread across rayon workers.

use super::decoder::Decoder;
use super::error::RsResult;
use super::types::Correction;
use log::{debug, warn};
use rayon::prelude::*;

/// Configuration for batch decoding
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to decode in parallel (false = single-threaded)
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
        }
    }
}

impl BatchConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);
        let parallel = !matches.get_flag("sequential");

        Self::new(threads, parallel)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1,
            (true, 0) => rayon::current_num_threads(),
            (true, n) => n,
        }
    }
}

/// Decode every codeword in place using rayon's global pool.
///
/// Results are index-aligned with `codewords`.
pub fn decode_batch(
    decoder: &Decoder,
    codewords: &mut [Vec<u8>],
    two_s: usize,
) -> Vec<RsResult<Correction>> {
    codewords
        .par_iter_mut()
        .enumerate()
        .map(|(index, codeword)| decode_one(decoder, index, codeword, two_s))
        .collect()
}

/// Decode every codeword honouring `config`'s threading choice
pub fn decode_batch_with(
    decoder: &Decoder,
    codewords: &mut [Vec<u8>],
    two_s: usize,
    config: &BatchConfig,
) -> Vec<RsResult<Correction>> {
    if !config.parallel {
        debug!("Decoding {} codewords sequentially", codewords.len());
        return codewords
            .iter_mut()
            .enumerate()
            .map(|(index, codeword)| decode_one(decoder, index, codeword, two_s))
            .collect();
    }

    if config.threads == 0 {
        return decode_batch(decoder, codewords, two_s);
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => {
            debug!(
                "Decoding {} codewords on {} threads",
                codewords.len(),
                config.threads
            );
            pool.install(|| decode_batch(decoder, codewords, two_s))
        }
        Err(e) => {
            warn!("Failed to build thread pool ({e}), using the global pool");
            decode_batch(decoder, codewords, two_s)
        }
    }
}

fn decode_one(
    decoder: &Decoder,
    index: usize,
    codeword: &mut [u8],
    two_s: usize,
) -> RsResult<Correction> {
    let result = decoder.decode(codeword, two_s);
    if let Err(e) = &result {
        warn!("Codeword {index} could not be decoded: {e}");
    }
    result
}
