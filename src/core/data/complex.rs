use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComplexError {
    DivisionByZero,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "division by zero: complex value has zero modulus")
            }
        }
    }
}

impl Error for ComplexError {}

// implement Complex instead of using the num-complex trait for learning
/// An immutable point in the complex plane with `f64` components.
///
/// Equality is exact IEEE-754 equality on both components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// Unit-modulus value at angle `theta` (radians).
    #[must_use]
    pub fn rotation(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    #[must_use]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[must_use]
    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.real + other.real, self.imaginary + other.imaginary)
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.real - other.real, self.imaginary - other.imaginary)
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }

    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.real * factor, self.imaginary * factor)
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    #[must_use]
    pub fn squared_modulus(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    #[must_use]
    pub fn modulus(&self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Multiplicative inverse. Fails only when the value is exactly zero.
    pub fn reciprocal(self) -> Result<Self, ComplexError> {
        let squared_modulus = self.squared_modulus();

        if squared_modulus == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }

        Ok(self.conjugate().scale(1.0 / squared_modulus))
    }

    pub fn divide(self, divisor: Self) -> Result<Self, ComplexError> {
        Ok(self.multiply(divisor.reciprocal()?))
    }

    /// Repeated multiplication; `pow(0)` is `ONE` for every value, zero included.
    #[must_use]
    pub fn pow(self, exponent: u32) -> Self {
        let mut result = Self::ONE;

        for _ in 0..exponent {
            result = result.multiply(self);
        }

        result
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::from_real(real)
    }
}

// 0.0 == -0.0, so both must feed the hasher the same bits
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.real).hash(state);
        canonical_bits(self.imaginary).hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Complex{{real={:?}, imaginary={:?}}}",
            self.real, self.imaginary
        )
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Complex::add(self, other)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
