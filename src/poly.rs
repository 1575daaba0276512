//! Polynomials over GF(256)
//!
//! Coefficients are stored most-significant first, the same order codeword
//! bytes are transmitted in, so a codeword converts to its polynomial without
//! reordering. Every operation returns a new polynomial.

use crate::galois::{FieldError, Gf256};
use std::fmt;

/// Immutable polynomial with GF(256) coefficients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// Highest-degree coefficient first, no leading zeros unless zero polynomial
    coefficients: Vec<Gf256>,
}

impl Polynomial {
    /// Build from coefficients, highest degree first. Leading zeros are dropped.
    pub fn new(coefficients: Vec<Gf256>) -> Self {
        match coefficients.iter().position(|c| !c.is_zero()) {
            Some(0) => Self { coefficients },
            Some(first) => Self {
                coefficients: coefficients[first..].to_vec(),
            },
            None => Self::zero(),
        }
    }

    /// Build from raw bytes, e.g. a received codeword
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Gf256::from).collect())
    }

    pub fn zero() -> Self {
        Self {
            coefficients: vec![Gf256::ZERO],
        }
    }

    pub fn one() -> Self {
        Self {
            coefficients: vec![Gf256::ONE],
        }
    }

    /// `coefficient · x^degree`
    pub fn monomial(degree: usize, coefficient: Gf256) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        let mut coefficients = vec![Gf256::ZERO; degree + 1];
        coefficients[0] = coefficient;
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[Gf256] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0].is_zero()
    }

    /// Coefficient of `x^degree`, zero beyond the polynomial's degree
    pub fn coefficient(&self, degree: usize) -> Gf256 {
        if degree > self.degree() {
            return Gf256::ZERO;
        }
        self.coefficients[self.coefficients.len() - 1 - degree]
    }

    /// Leading coefficient
    pub fn leading(&self) -> Gf256 {
        self.coefficients[0]
    }

    /// Evaluate at `x` using Horner's method
    pub fn evaluate(&self, x: Gf256) -> Gf256 {
        if x.is_zero() {
            return self.coefficient(0);
        }
        if x == Gf256::ONE {
            return self.coefficients.iter().copied().sum();
        }
        self.coefficients
            .iter()
            .fold(Gf256::ZERO, |acc, &c| acc * x + c)
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let (smaller, larger) = if self.coefficients.len() > other.coefficients.len() {
            (&other.coefficients, &self.coefficients)
        } else {
            (&self.coefficients, &other.coefficients)
        };

        let offset = larger.len() - smaller.len();
        let mut sum = larger.clone();
        for (slot, &c) in sum[offset..].iter_mut().zip(smaller.iter()) {
            *slot += c;
        }
        Polynomial::new(sum)
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let mut product = vec![Gf256::ZERO; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Polynomial::new(product)
    }

    /// Multiply every coefficient by `scalar`
    pub fn scale(&self, scalar: Gf256) -> Polynomial {
        if scalar.is_zero() {
            return Polynomial::zero();
        }
        if scalar == Gf256::ONE {
            return self.clone();
        }
        Polynomial::new(self.coefficients.iter().map(|&c| c * scalar).collect())
    }

    /// Multiply by `coefficient · x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: Gf256) -> Polynomial {
        if coefficient.is_zero() || self.is_zero() {
            return Polynomial::zero();
        }

        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(self.coefficients.iter().map(|&c| c * coefficient));
        product.resize(self.coefficients.len() + degree, Gf256::ZERO);
        Polynomial { coefficients: product }
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial), FieldError> {
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }

        let lead_inverse = divisor.leading().inverse()?;
        let mut quotient = Polynomial::zero();
        let mut remainder = self.clone();

        while remainder.degree() >= divisor.degree() && !remainder.is_zero() {
            let degree_diff = remainder.degree() - divisor.degree();
            let scale = remainder.leading() * lead_inverse;
            quotient = quotient.add(&Polynomial::monomial(degree_diff, scale));
            remainder = remainder.add(&divisor.multiply_by_monomial(degree_diff, scale));
        }

        Ok((quotient, remainder))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match self.degree() - i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}x")?,
                d => write!(f, "{c}x^{d}")?,
            }
        }
        Ok(())
    }
}
