//! Reed-Solomon decoder over GF(256)
//!
//! ## Pipeline
//!
//! ```text
//! codeword ──► syndromes ──► (sigma, omega) ──► locations ──► magnitudes ──► corrected
//!             S(x) at α^i     extended Euclid    Chien search   Forney
//! ```
//!
//! Every stage runs once per call and the error count is discovered from the
//! degree of the locator, never assumed. All corrections are computed before
//! the first byte is touched, so a failed decode leaves the buffer as it was.

use super::error::{RsError, RsResult};
use super::types::{Correction, DecoderConfig, ErrorList};
use crate::galois::Gf256;
use crate::poly::Polynomial;
use log::{debug, trace};
use smallvec::smallvec;

/// Largest codeword whose positions the field can address
pub const MAX_CODEWORD_LEN: usize = 255;

/// Reed-Solomon decoder. Holds only its configuration and is cheap to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Locate and repair up to `two_s / 2` symbol errors in place.
    ///
    /// `two_s` is the number of error correction symbols at the end of the
    /// codeword. Returns [`Correction::Clean`] when every syndrome is zero.
    pub fn decode(&self, codeword: &mut [u8], two_s: usize) -> RsResult<Correction> {
        validate_parameters(codeword.len(), two_s)?;

        let received = Polynomial::from_bytes(codeword);
        let syndrome = compute_syndromes(&received, two_s);
        if syndrome.is_zero() {
            trace!("All {two_s} syndromes are zero");
            return Ok(Correction::Clean);
        }
        debug!("Syndrome polynomial: {syndrome}");

        let (sigma, omega) =
            run_euclidean_algorithm(Polynomial::monomial(two_s, Gf256::ONE), syndrome, two_s)?;
        debug!("Error locator: {sigma}, error evaluator: {omega}");

        // Nonzero syndrome but a constant locator: too many errors to locate any
        if sigma.degree() == 0 {
            return Err(RsError::UncorrectableErrorCount {
                expected: 0,
                found: 0,
            });
        }

        let locations = find_error_locations(&sigma)?;
        let magnitudes = find_error_magnitudes(&omega, &locations, self.config.data_matrix)?;
        let positions = error_positions(&locations, codeword.len())?;

        for (&position, &magnitude) in positions.iter().zip(magnitudes.iter()) {
            codeword[position] ^= magnitude;
        }
        debug!(
            "Corrected {} error(s) at positions {:?}",
            positions.len(),
            positions.as_slice()
        );

        Ok(Correction::Repaired {
            positions,
            magnitudes,
        })
    }

    /// Decode an owned codeword and hand back the corrected bytes
    pub fn decode_owned(&self, mut codeword: Vec<u8>, two_s: usize) -> RsResult<Vec<u8>> {
        self.decode(&mut codeword, two_s)?;
        Ok(codeword)
    }
}

/// Decode with the default (QR) configuration
pub fn decode(codeword: &mut [u8], two_s: usize) -> RsResult<Correction> {
    Decoder::new().decode(codeword, two_s)
}

fn validate_parameters(length: usize, two_s: usize) -> RsResult<()> {
    let reason = if two_s == 0 {
        "at least two error correction symbols are required"
    } else if two_s % 2 != 0 {
        "error correction symbol count must be even"
    } else if two_s > length {
        "more error correction symbols than codeword symbols"
    } else if length > MAX_CODEWORD_LEN {
        "codeword is longer than 255 symbols"
    } else {
        return Ok(());
    };

    Err(RsError::InvalidParameters {
        two_s,
        length,
        reason,
    })
}

/// Syndrome polynomial: coefficient of `x^i` is `received(α^i)`.
fn compute_syndromes(received: &Polynomial, two_s: usize) -> Polynomial {
    let mut coefficients = vec![Gf256::ZERO; two_s];
    for i in 0..two_s {
        coefficients[two_s - 1 - i] = received.evaluate(Gf256::exp(i));
    }
    Polynomial::new(coefficients)
}

/// Solve the key equation with the extended Euclidean algorithm.
///
/// Returns `(sigma, omega)` with `sigma(0) == 1`.
fn run_euclidean_algorithm(
    a: Polynomial,
    b: Polynomial,
    r_degree: usize,
) -> RsResult<(Polynomial, Polynomial)> {
    let (a, b) = if a.degree() < b.degree() { (b, a) } else { (a, b) };

    let mut r_last = a.clone();
    let mut r = b.clone();
    let mut s_last = Polynomial::one();
    let mut s = Polynomial::zero();
    let mut t_last = Polynomial::zero();
    let mut t = Polynomial::one();

    while r.degree() >= r_degree / 2 {
        let r_last_last = std::mem::replace(&mut r_last, r);
        let s_last_last = std::mem::replace(&mut s_last, s);
        let t_last_last = std::mem::replace(&mut t_last, t);

        if r_last.is_zero() {
            return Err(RsError::EuclideanBreakdown {
                degree: r_last_last.degree(),
            });
        }

        let (q, remainder) = r_last_last.div_rem(&r_last)?;
        r = remainder;
        s = q.multiply(&s_last).add(&s_last_last);
        t = q.multiply(&t_last).add(&t_last_last);

        // Bezout: s·a + t·b == r at every step
        debug_assert_eq!(s.multiply(&a).add(&t.multiply(&b)), r);
    }

    let sigma_tilde_at_zero = t.coefficient(0);
    if sigma_tilde_at_zero.is_zero() {
        return Err(RsError::DegenerateLocator);
    }

    let inverse = sigma_tilde_at_zero.inverse()?;
    Ok((t.scale(inverse), r.scale(inverse)))
}

/// Error locations `X_i`, the inverses of the locator's roots
fn find_error_locations(sigma: &Polynomial) -> RsResult<ErrorList<Gf256>> {
    let num_errors = sigma.degree();
    if num_errors == 1 {
        return Ok(smallvec![sigma.coefficient(1)]);
    }
    chien_search(sigma, num_errors)
}

fn chien_search(sigma: &Polynomial, num_errors: usize) -> RsResult<ErrorList<Gf256>> {
    let locations = (1..=255u8)
        .map(Gf256::new)
        .filter(|&x| sigma.evaluate(x).is_zero())
        .take(num_errors)
        .map(|root| {
            trace!("Locator root at {root}");
            root.inverse()
        })
        .collect::<Result<ErrorList<Gf256>, _>>()?;

    if locations.len() != num_errors {
        return Err(RsError::UncorrectableErrorCount {
            expected: num_errors,
            found: locations.len(),
        });
    }
    Ok(locations)
}

/// Forney's formula
fn find_error_magnitudes(
    omega: &Polynomial,
    locations: &[Gf256],
    data_matrix: bool,
) -> RsResult<ErrorList<u8>> {
    locations
        .iter()
        .enumerate()
        .map(|(i, &location)| -> RsResult<u8> {
            let xi_inverse = location.inverse()?;
            let denominator: Gf256 = locations
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| Gf256::ONE + other * xi_inverse)
                .product();

            let mut magnitude = omega.evaluate(xi_inverse) * denominator.inverse()?;
            if data_matrix {
                magnitude *= xi_inverse;
            }
            Ok(magnitude.value())
        })
        .collect()
}

/// Map each location `α^k` to codeword index `length - 1 - k`
fn error_positions(locations: &[Gf256], length: usize) -> RsResult<ErrorList<usize>> {
    locations
        .iter()
        .map(|location| -> RsResult<usize> {
            let log = location.log()?;
            length
                .checked_sub(1 + log)
                .ok_or(RsError::LocationOutOfRange {
                    position: length as isize - 1 - log as isize,
                    length,
                })
        })
        .collect()
}
