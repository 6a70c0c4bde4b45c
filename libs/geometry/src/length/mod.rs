//! Millimetre length scalar.
//!
//! `Length` is a distinct type from a plain `f64` so that coordinates and
//! offsets cannot be silently mixed with ratios. Arithmetic follows a fixed
//! set of rules:
//!
//! | Expression          | Result   |
//! |---------------------|----------|
//! | `Length ± number`   | `Length` |
//! | `number ± Length`   | `Length` |
//! | `Length * number`   | `Length` |
//! | `number * Length`   | `Length` |
//! | `Length / number`   | `Length` |
//! | `number / Length`   | `f64`    |
//! | `Length ± Length`   | `Length` |
//! | `Length / Length`   | `f64`    |
//!
//! Note the asymmetry of division: a length divided by a number is still a
//! length, while a number divided by a length collapses to a plain scalar.
//! There is no reciprocal-length type and no `Length * Length`.
//!
//! ```
//! use dmt_geometry::Length;
//!
//! assert_eq!(Length::new(3.0) / 6.0, Length::new(0.5));
//! assert_eq!(6.0 / Length::new(3.0), 2.0);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A length in millimetres.
///
/// Equality and ordering compare the raw `f64` exactly, with IEEE semantics.
/// Use [`Length::approx_eq`] when a tolerance is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64);

impl Length {
    /// Zero millimetres.
    pub const ZERO: Length = Length(0.0);

    /// Creates a length of `millimetres`.
    #[inline]
    pub const fn new(millimetres: f64) -> Self {
        Self(millimetres)
    }

    /// Returns the raw value in millimetres.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute length.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the smaller of two lengths.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the larger of two lengths.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Compares two lengths within an explicit tolerance in millimetres.
    ///
    /// # Examples
    /// ```
    /// use dmt_geometry::Length;
    /// use config::constants::EPSILON_TOLERANCE;
    ///
    /// let a = Length::new(0.1) + 0.2;
    /// assert_ne!(a, Length::new(0.3));
    /// assert!(a.approx_eq(Length::new(0.3), EPSILON_TOLERANCE));
    /// ```
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

impl From<f64> for Length {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Length {
    #[inline]
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i32> for Length {
    #[inline]
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Length> for f64 {
    #[inline]
    fn from(length: Length) -> Self {
        length.0
    }
}

// =============================================================================
// LENGTH (op) NUMBER, NUMBER (op) LENGTH
// =============================================================================

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {$(
        impl Add<$scalar> for Length {
            type Output = Length;
            #[inline]
            fn add(self, rhs: $scalar) -> Length {
                Length(self.0 + f64::from(rhs))
            }
        }

        impl Add<Length> for $scalar {
            type Output = Length;
            #[inline]
            fn add(self, rhs: Length) -> Length {
                Length(f64::from(self) + rhs.0)
            }
        }

        impl Sub<$scalar> for Length {
            type Output = Length;
            #[inline]
            fn sub(self, rhs: $scalar) -> Length {
                Length(self.0 - f64::from(rhs))
            }
        }

        impl Sub<Length> for $scalar {
            type Output = Length;
            #[inline]
            fn sub(self, rhs: Length) -> Length {
                Length(f64::from(self) - rhs.0)
            }
        }

        impl Mul<$scalar> for Length {
            type Output = Length;
            #[inline]
            fn mul(self, rhs: $scalar) -> Length {
                Length(self.0 * f64::from(rhs))
            }
        }

        impl Mul<Length> for $scalar {
            type Output = Length;
            #[inline]
            fn mul(self, rhs: Length) -> Length {
                Length(f64::from(self) * rhs.0)
            }
        }

        impl Div<$scalar> for Length {
            type Output = Length;
            #[inline]
            fn div(self, rhs: $scalar) -> Length {
                Length(self.0 / f64::from(rhs))
            }
        }

        // number / length drops the unit
        impl Div<Length> for $scalar {
            type Output = f64;
            #[inline]
            fn div(self, rhs: Length) -> f64 {
                f64::from(self) / rhs.0
            }
        }
    )*};
}

impl_scalar_ops!(f64, i32);

// =============================================================================
// LENGTH (op) LENGTH
// =============================================================================

impl Add for Length {
    type Output = Length;
    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;
    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

/// Ratio of two lengths.
impl Div for Length {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

impl Neg for Length {
    type Output = Length;
    #[inline]
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl AddAssign for Length {
    #[inline]
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl AddAssign<f64> for Length {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl SubAssign for Length {
    #[inline]
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl SubAssign<f64> for Length {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.0 -= rhs;
    }
}

impl MulAssign<f64> for Length {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl DivAssign<f64> for Length {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Self {
        iter.fold(Length::ZERO, |acc, l| acc + l)
    }
}

impl<'a> Sum<&'a Length> for Length {
    fn sum<I: Iterator<Item = &'a Length>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests;
