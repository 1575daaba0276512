//! Galois Field GF(2^8) arithmetic for Reed-Solomon decoding
//!
//! ## Field Polynomial
//!
//! The field is built from the primitive polynomial **0x11D**
//! (x⁸ + x⁴ + x³ + x² + 1) with generator element `2`. This is the field QR
//! symbols use for their error correction codewords, so `exp(i)` here is the
//! `α^i` every syndrome is evaluated at.
//!
//! ## Tables
//!
//! Log and antilog tables are built once on first use and then shared
//! read-only, so elements can be used freely across threads.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;
use thiserror::Error;

/// Primitive irreducible polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
const GF8_GENERATOR: u32 = 0x11D;

/// Number of elements in the field
const COUNT: usize = 256;

/// Order of the multiplicative group
const LIMIT: usize = COUNT - 1;

/// Errors raised by field operations that are undefined on zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("multiplicative inverse of zero is undefined")]
    InverseOfZero,

    #[error("discrete logarithm of zero is undefined")]
    LogOfZero,

    #[error("division by zero in GF(256)")]
    DivisionByZero,
}

/// Lookup tables for fast field arithmetic
struct GaloisTable {
    log: [u8; COUNT],
    /// 2x size to avoid a modulo when adding logs
    antilog: [u8; 2 * LIMIT],
}

impl GaloisTable {
    fn new() -> Self {
        let mut table = GaloisTable {
            log: [0; COUNT],
            antilog: [0; 2 * LIMIT],
        };
        table.build_tables();
        table
    }

    fn build_tables(&mut self) {
        let mut b = 1u32;

        for l in 0..LIMIT {
            self.log[b as usize] = l as u8;
            self.antilog[l] = b as u8;

            b <<= 1;
            if b & COUNT as u32 != 0 {
                b ^= GF8_GENERATOR;
            }
        }

        for l in LIMIT..2 * LIMIT {
            self.antilog[l] = self.antilog[l - LIMIT];
        }
    }

    fn get() -> &'static GaloisTable {
        static TABLE: OnceLock<GaloisTable> = OnceLock::new();
        TABLE.get_or_init(GaloisTable::new)
    }
}

/// Element of GF(256)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Gf256(u8);

impl Gf256 {
    /// Additive identity
    pub const ZERO: Gf256 = Gf256(0);

    /// Multiplicative identity
    pub const ONE: Gf256 = Gf256(1);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The generator element raised to `power`
    pub fn exp(power: usize) -> Self {
        Self(GaloisTable::get().antilog[power % LIMIT])
    }

    /// Discrete logarithm base 2, in `0..255`
    pub fn log(self) -> Result<usize, FieldError> {
        if self.is_zero() {
            return Err(FieldError::LogOfZero);
        }
        Ok(GaloisTable::get().log[self.0 as usize] as usize)
    }

    /// Multiplicative inverse
    pub fn inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::InverseOfZero);
        }
        let table = GaloisTable::get();
        Ok(Self(table.antilog[LIMIT - table.log[self.0 as usize] as usize]))
    }
}

// Addition (XOR in Galois fields)
impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl SubAssign for Gf256 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Multiplication using log tables
impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let table = GaloisTable::get();
        let log_sum = table.log[self.0 as usize] as usize + table.log[rhs.0 as usize] as usize;
        Self(table.antilog[log_sum])
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for Gf256 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for Gf256 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

// Conversion traits
impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    fn from(val: Gf256) -> Self {
        val.0
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
