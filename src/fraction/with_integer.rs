//! # Interactions with primitive integers
//!
//! Integers are lifted to fractions with denominator one, after which most operations simplify:
//! the common denominator of `a/b` and `n` is always `b`.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::Fraction;

macro_rules! define_interactions {
    ($primitive:ident, $module_name:ident) => {
        mod $module_name {
            use super::*;

            mod creation {
                use super::*;

                impl From<$primitive> for Fraction {
                    fn from(value: $primitive) -> Self {
                        Self::from_integer(value)
                    }
                }

                impl From<&$primitive> for Fraction {
                    fn from(value: &$primitive) -> Self {
                        Self::from_integer(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$primitive> for Fraction {
                    fn eq(&self, other: &$primitive) -> bool {
                        let (numerator, denominator) = self.parts();
                        denominator.is_one() && *numerator == BigInt::from(*other)
                    }
                }

                impl PartialEq<Fraction> for $primitive {
                    fn eq(&self, other: &Fraction) -> bool {
                        *other == *self
                    }
                }

                impl PartialOrd<$primitive> for Fraction {
                    fn partial_cmp(&self, other: &$primitive) -> Option<Ordering> {
                        let (numerator, denominator) = self.parts();
                        Some(numerator.cmp(&(denominator * BigInt::from(*other))))
                    }
                }

                impl PartialOrd<Fraction> for $primitive {
                    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                        <Fraction as PartialOrd<$primitive>>::partial_cmp(other, self).map(Ordering::reverse)
                    }
                }
            }

            mod field {
                use super::*;

                mod add {
                    use super::*;

                    impl Add<$primitive> for Fraction {
                        type Output = Fraction;

                        fn add(self, rhs: $primitive) -> Self::Output {
                            self.increment_by(rhs)
                        }
                    }

                    impl Add<$primitive> for &Fraction {
                        type Output = Fraction;

                        fn add(self, rhs: $primitive) -> Self::Output {
                            self.increment_by(rhs)
                        }
                    }

                    impl Add<Fraction> for $primitive {
                        type Output = Fraction;

                        fn add(self, rhs: Fraction) -> Self::Output {
                            rhs.increment_by(self)
                        }
                    }

                    impl Add<&Fraction> for $primitive {
                        type Output = Fraction;

                        fn add(self, rhs: &Fraction) -> Self::Output {
                            rhs.increment_by(self)
                        }
                    }

                    impl AddAssign<$primitive> for Fraction {
                        fn add_assign(&mut self, rhs: $primitive) {
                            *self = self.increment_by(rhs);
                        }
                    }
                }

                mod sub {
                    use super::*;

                    impl Sub<$primitive> for Fraction {
                        type Output = Fraction;

                        fn sub(self, rhs: $primitive) -> Self::Output {
                            self.decrement_by(rhs)
                        }
                    }

                    impl Sub<$primitive> for &Fraction {
                        type Output = Fraction;

                        fn sub(self, rhs: $primitive) -> Self::Output {
                            self.decrement_by(rhs)
                        }
                    }

                    impl Sub<Fraction> for $primitive {
                        type Output = Fraction;

                        /// Computed as `(n·b - a) / b`.
                        fn sub(self, rhs: Fraction) -> Self::Output {
                            let (numerator, denominator) = rhs.parts();
                            Fraction::canonical(denominator * BigInt::from(self) - numerator, denominator.clone())
                        }
                    }

                    impl Sub<&Fraction> for $primitive {
                        type Output = Fraction;

                        fn sub(self, rhs: &Fraction) -> Self::Output {
                            let (numerator, denominator) = rhs.parts();
                            Fraction::canonical(denominator * BigInt::from(self) - numerator, denominator.clone())
                        }
                    }

                    impl SubAssign<$primitive> for Fraction {
                        fn sub_assign(&mut self, rhs: $primitive) {
                            *self = self.decrement_by(rhs);
                        }
                    }
                }

                mod mul {
                    use super::*;

                    impl Mul<$primitive> for Fraction {
                        type Output = Fraction;

                        fn mul(self, rhs: $primitive) -> Self::Output {
                            &self * rhs
                        }
                    }

                    impl Mul<$primitive> for &Fraction {
                        type Output = Fraction;

                        fn mul(self, rhs: $primitive) -> Self::Output {
                            if rhs.is_zero() {
                                return Fraction::zero();
                            }

                            let (numerator, denominator) = self.parts();
                            Fraction::canonical(numerator * BigInt::from(rhs), denominator.clone())
                        }
                    }

                    impl Mul<Fraction> for $primitive {
                        type Output = Fraction;

                        fn mul(self, rhs: Fraction) -> Self::Output {
                            &rhs * self
                        }
                    }

                    impl Mul<&Fraction> for $primitive {
                        type Output = Fraction;

                        fn mul(self, rhs: &Fraction) -> Self::Output {
                            rhs * self
                        }
                    }

                    impl MulAssign<$primitive> for Fraction {
                        fn mul_assign(&mut self, rhs: $primitive) {
                            *self = &*self * rhs;
                        }
                    }
                }

                mod div {
                    use super::*;

                    impl Div<$primitive> for Fraction {
                        type Output = Fraction;

                        /// # Panics
                        ///
                        /// When dividing by zero.
                        fn div(self, rhs: $primitive) -> Self::Output {
                            &self / rhs
                        }
                    }

                    impl Div<$primitive> for &Fraction {
                        type Output = Fraction;

                        /// # Panics
                        ///
                        /// When dividing by zero.
                        fn div(self, rhs: $primitive) -> Self::Output {
                            if rhs.is_zero() {
                                panic!("{}", crate::error::ArithmeticError::DivisionByZero);
                            }

                            let (numerator, denominator) = self.parts();
                            Fraction::canonical(numerator.clone(), denominator * BigInt::from(rhs))
                        }
                    }

                    impl Div<Fraction> for $primitive {
                        type Output = Fraction;

                        /// Computed as `(n·b) / a`.
                        ///
                        /// # Panics
                        ///
                        /// When dividing by zero.
                        fn div(self, rhs: Fraction) -> Self::Output {
                            self / &rhs
                        }
                    }

                    impl Div<&Fraction> for $primitive {
                        type Output = Fraction;

                        fn div(self, rhs: &Fraction) -> Self::Output {
                            if rhs.is_zero() {
                                panic!("{}", crate::error::ArithmeticError::DivisionByZero);
                            }

                            let (numerator, denominator) = rhs.parts();
                            Fraction::canonical(denominator * BigInt::from(self), numerator.clone())
                        }
                    }
                }
            }
        }
    }
}

define_interactions!(i32, int32);
define_interactions!(i64, int64);
define_interactions!(u32, uint32);
define_interactions!(u64, uint64);
