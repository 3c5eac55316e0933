//! # Non-standard implementations
//!
//! Operations with `Decimal` operands. A decimal is itself a fraction with a power of ten as its
//! denominator, so these are computed exactly.
mod field {
    mod mul {
        use std::ops::Mul;

        use rust_decimal::Decimal;

        use crate::fraction::Fraction;

        impl Mul<Decimal> for Fraction {
            type Output = Fraction;

            fn mul(self, rhs: Decimal) -> Self::Output {
                self * Fraction::from_decimal(rhs)
            }
        }

        impl Mul<Decimal> for &Fraction {
            type Output = Fraction;

            fn mul(self, rhs: Decimal) -> Self::Output {
                self * Fraction::from_decimal(rhs)
            }
        }

        impl Mul<Fraction> for Decimal {
            type Output = Fraction;

            fn mul(self, rhs: Fraction) -> Self::Output {
                Fraction::from_decimal(self) * rhs
            }
        }

        impl Mul<&Fraction> for Decimal {
            type Output = Fraction;

            fn mul(self, rhs: &Fraction) -> Self::Output {
                Fraction::from_decimal(self) * rhs
            }
        }
    }
}
