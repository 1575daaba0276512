//! Decoder Tests
//!
//! End-to-end decoding of clean, correctable and uncorrectable codewords.

use super::support::{corrupt, encode, CLEAN_CODEWORD, CORRUPTED_CODEWORD};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rsdecode::reed_solomon::{decode, Correction, Decoder, DecoderConfig, RsError};
use rsdecode::{Gf256, Polynomial};

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_decode_message_without_errors() {
    let mut codeword = CLEAN_CODEWORD;
    let correction = decode(&mut codeword, 10).unwrap();

    assert_eq!(correction, Correction::Clean);
    assert_eq!(codeword, CLEAN_CODEWORD);
}

#[test]
fn test_fix_message_with_errors() {
    let mut codeword = CORRUPTED_CODEWORD;
    let correction = decode(&mut codeword, 10).unwrap();

    assert_eq!(codeword, CLEAN_CODEWORD);
    match correction {
        Correction::Repaired {
            positions,
            magnitudes,
        } => {
            let mut sorted = positions.to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 7]);

            for (&position, &magnitude) in positions.iter().zip(magnitudes.iter()) {
                assert_eq!(
                    magnitude,
                    CORRUPTED_CODEWORD[position] ^ CLEAN_CODEWORD[position]
                );
            }
        }
        Correction::Clean => panic!("corrupted codeword decoded as clean"),
    }
}

#[test]
fn test_decode_owned_returns_corrected_codeword() {
    let corrected = Decoder::new()
        .decode_owned(CORRUPTED_CODEWORD.to_vec(), 10)
        .unwrap();
    assert_eq!(corrected, CLEAN_CODEWORD.to_vec());
}

#[test]
fn test_decoding_is_idempotent() {
    let mut codeword = CORRUPTED_CODEWORD;
    decode(&mut codeword, 10).unwrap();
    let first = codeword;

    assert!(decode(&mut codeword, 10).unwrap().is_clean());
    assert_eq!(codeword, first);
}

// ============================================================================
// Capacity Boundaries
// ============================================================================

#[test]
fn test_single_error_at_every_position() {
    for position in 0..CLEAN_CODEWORD.len() {
        let mut codeword = CLEAN_CODEWORD;
        codeword[position] ^= 0xA5;

        let correction = decode(&mut codeword, 10).unwrap();
        assert_eq!(codeword, CLEAN_CODEWORD, "error at {position}");
        assert_eq!(correction.error_count(), 1);
    }
}

#[test]
fn test_maximum_capacity_is_correctable() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for two_s in [2usize, 4, 10, 16, 30] {
        let data: Vec<u8> = (0..40u8).map(|b| b.wrapping_mul(37)).collect();
        let original = encode(&data, two_s);

        for _ in 0..20 {
            let mut codeword = original.clone();
            corrupt(&mut codeword, two_s / 2, &mut rng);

            let correction = decode(&mut codeword, two_s).unwrap();
            assert_eq!(codeword, original, "two_s = {two_s}");
            assert_eq!(correction.error_count(), two_s / 2);
        }
    }
}

#[test]
fn test_too_many_errors_is_reported() {
    let mut rng = StdRng::seed_from_u64(42);
    let original = encode(b"HELLO WORLD", 16);

    for _ in 0..50 {
        let mut codeword = original.clone();
        corrupt(&mut codeword, 9, &mut rng);
        let received = codeword.clone();

        let result = decode(&mut codeword, 16);
        assert!(
            matches!(
                result,
                Err(RsError::UncorrectableErrorCount { .. })
                    | Err(RsError::LocationOutOfRange { .. })
                    | Err(RsError::DegenerateLocator)
            ),
            "unexpected result {result:?}"
        );
        // Failed decodes never touch the buffer
        assert_eq!(codeword, received);
    }
}

#[test]
fn test_low_degree_syndrome_is_not_reported_as_repaired() {
    // e(x) = (x + α^5)(x + α^6)...(x + α^9) vanishes at the upper five
    // syndrome points, so the syndrome polynomial has degree below two_s / 2
    let error = (5..10).fold(Polynomial::one(), |acc, i| {
        acc.multiply(&Polynomial::new(vec![Gf256::ONE, Gf256::exp(i)]))
    });
    let error_bytes: Vec<u8> = error.coefficients().iter().map(|&c| u8::from(c)).collect();
    assert_eq!(error_bytes.len(), 6);
    assert!(error_bytes.iter().all(|&b| b != 0));

    let mut codeword = CLEAN_CODEWORD;
    let tail = codeword.len() - error_bytes.len();
    for (symbol, e) in codeword[tail..].iter_mut().zip(&error_bytes) {
        *symbol ^= e;
    }
    let received = codeword;

    let result = decode(&mut codeword, 10);
    assert!(
        matches!(result, Err(RsError::UncorrectableErrorCount { .. })),
        "unexpected result {result:?}"
    );
    assert_eq!(codeword, received);
}

#[test]
fn test_error_in_check_symbols_only() {
    let mut codeword = CLEAN_CODEWORD;
    codeword[20] = 0;
    codeword[25] = 0;

    decode(&mut codeword, 10).unwrap();
    assert_eq!(codeword, CLEAN_CODEWORD);
}

#[test]
fn test_full_length_codeword() {
    let data: Vec<u8> = (0..=222u8).collect();
    let original = encode(&data, 32);
    assert_eq!(original.len(), 255);

    let mut codeword = original.clone();
    codeword[0] ^= 1;
    codeword[128] ^= 0xFF;
    codeword[254] ^= 0x42;

    decode(&mut codeword, 32).unwrap();
    assert_eq!(codeword, original);
}

// ============================================================================
// Parameters and Configuration
// ============================================================================

#[test]
fn test_invalid_two_s_is_rejected() {
    let mut codeword = CLEAN_CODEWORD;
    for two_s in [0usize, 9, 28] {
        let result = decode(&mut codeword, two_s);
        assert!(
            matches!(result, Err(RsError::InvalidParameters { .. })),
            "two_s = {two_s}"
        );
    }
    assert_eq!(codeword, CLEAN_CODEWORD);
}

#[test]
fn test_data_matrix_mode_defaults_off() {
    assert!(!Decoder::new().config().data_matrix);
    let decoder = Decoder::with_config(DecoderConfig::default().with_data_matrix(true));
    assert!(decoder.config().data_matrix);

    // Clean codewords never reach the magnitude stage
    let mut codeword = CLEAN_CODEWORD;
    assert!(decoder.decode(&mut codeword, 10).unwrap().is_clean());
}

#[test]
fn test_error_messages_carry_context() {
    let mut codeword = [0u8; 4];
    let message = decode(&mut codeword, 6).unwrap_err().to_string();
    assert!(message.contains("length 4"), "{message}");
    assert!(message.contains("two_s 6"), "{message}");
}
