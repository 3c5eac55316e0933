//! # Field operations
//!
//! Addition, subtraction, multiplication and division between fractions, for all combinations of
//! owned and borrowed operands.
//!
//! Every operation is computed once, on `Cow`s, and the trait implementations only decide which
//! operands can be reused.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

/// Implement a binary operator and its assigning form for every owned and borrowed combination.
macro_rules! forward_binary {
    ($operator:ident, $method:ident, $operator_assign:ident, $method_assign:ident, $core:path) => {
        impl std::ops::$operator for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $core(Cow::Owned(self), Cow::Owned(rhs))
            }
        }

        impl std::ops::$operator<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $core(Cow::Owned(self), Cow::Borrowed(rhs))
            }
        }

        impl std::ops::$operator<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Self::Output {
                $core(Cow::Borrowed(self), Cow::Owned(rhs))
            }
        }

        impl std::ops::$operator for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Self::Output {
                $core(Cow::Borrowed(self), Cow::Borrowed(rhs))
            }
        }

        impl std::ops::$operator_assign for Fraction {
            fn $method_assign(&mut self, rhs: Fraction) {
                let lhs = std::mem::take(self);
                *self = $core(Cow::Owned(lhs), Cow::Owned(rhs));
            }
        }

        impl std::ops::$operator_assign<&Fraction> for Fraction {
            fn $method_assign(&mut self, rhs: &Fraction) {
                let lhs = std::mem::take(self);
                *self = $core(Cow::Owned(lhs), Cow::Borrowed(rhs));
            }
        }
    }
}

mod add {
    use std::borrow::Cow;
    use std::iter::Sum;

    use num_traits::Zero;

    use crate::fraction::Fraction;
    use crate::fraction::field::common_denominator;

    pub(super) fn add(left: Cow<Fraction>, right: Cow<Fraction>) -> Fraction {
        // The other operand is returned as is, it is already canonical.
        if left.is_zero() {
            return right.into_owned().into_defined();
        }
        if right.is_zero() {
            return left.into_owned().into_defined();
        }

        let (a, b) = left.parts();
        let (c, d) = right.parts();

        if b == d {
            return Fraction::canonical(a + c, b.clone());
        }

        let lcm = common_denominator(b, d);
        let numerator = a * (&lcm / b) + c * (&lcm / d);
        Fraction::canonical(numerator, lcm)
    }

    forward_binary!(Add, add, AddAssign, add_assign, add);

    impl Sum for Fraction {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a> Sum<&'a Fraction> for Fraction {
        fn sum<I: Iterator<Item=&'a Fraction>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }
}

mod sub {
    use std::borrow::Cow;

    use num_traits::Zero;

    use crate::fraction::Fraction;
    use crate::fraction::field::common_denominator;

    pub(super) fn sub(left: Cow<Fraction>, right: Cow<Fraction>) -> Fraction {
        if right.is_zero() {
            return left.into_owned().into_defined();
        }
        if left.is_zero() {
            return -right.into_owned();
        }

        let (a, b) = left.parts();
        let (c, d) = right.parts();

        if b == d {
            return Fraction::canonical(a - c, b.clone());
        }

        let lcm = common_denominator(b, d);
        let numerator = a * (&lcm / b) - c * (&lcm / d);
        Fraction::canonical(numerator, lcm)
    }

    forward_binary!(Sub, sub, SubAssign, sub_assign, sub);
}

mod mul {
    use std::borrow::Cow;
    use std::iter::Product;

    use num_traits::{One, Zero};

    use crate::fraction::Fraction;

    pub(super) fn mul(left: Cow<Fraction>, right: Cow<Fraction>) -> Fraction {
        if left.is_zero() || right.is_zero() {
            return Fraction::zero();
        }
        if left.is_one() {
            return right.into_owned();
        }
        if right.is_one() {
            return left.into_owned();
        }

        let (a, b) = left.parts();
        let (c, d) = right.parts();
        Fraction::canonical(a * c, b * d)
    }

    forward_binary!(Mul, mul, MulAssign, mul_assign, mul);

    impl Product for Fraction {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'a> Product<&'a Fraction> for Fraction {
        fn product<I: Iterator<Item=&'a Fraction>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod div {
    use std::borrow::Cow;

    use num_traits::{One, Zero};

    use crate::error::{ArithmeticError, ArithmeticResult};
    use crate::fraction::Fraction;

    impl Fraction {
        /// Divide by a fraction or by a primitive integer.
        ///
        /// An integer dividend is covered by converting it first, as in
        /// `Fraction::from(3).checked_div(&divisor)`.
        ///
        /// # Errors
        ///
        /// `DivisionByZero` if `rhs` is zero.
        pub fn checked_div<R: Into<Fraction>>(&self, rhs: R) -> ArithmeticResult<Fraction> {
            checked(Cow::Borrowed(self), Cow::Owned(rhs.into()))
        }
    }

    fn checked(left: Cow<Fraction>, right: Cow<Fraction>) -> ArithmeticResult<Fraction> {
        if right.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if left.is_zero() {
            return Ok(Fraction::zero());
        }
        if right.is_one() {
            return Ok(left.into_owned());
        }

        let (a, b) = left.parts();
        let (c, d) = right.parts();
        Ok(Fraction::canonical(a * d, b * c))
    }

    /// # Panics
    ///
    /// When dividing by zero.
    pub(super) fn div(left: Cow<Fraction>, right: Cow<Fraction>) -> Fraction {
        match checked(left, right) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }

    forward_binary!(Div, div, DivAssign, div_assign, div);
}

mod neg {
    use std::ops::Neg;

    use crate::fraction::Fraction;

    impl Neg for Fraction {
        type Output = Self;

        fn neg(self) -> Self::Output {
            let (numerator, denominator) = self.into_parts();
            Self { numerator: -numerator, denominator, }
        }
    }

    impl Neg for &Fraction {
        type Output = Fraction;

        fn neg(self) -> Self::Output {
            let (numerator, denominator) = self.parts();
            Fraction { numerator: -numerator, denominator: denominator.clone(), }
        }
    }
}

mod identities {
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    use crate::fraction::Fraction;

    impl Zero for Fraction {
        fn zero() -> Self {
            Self { numerator: BigInt::zero(), denominator: BigInt::one(), }
        }

        /// An undefined fraction counts as zero.
        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }

        fn set_zero(&mut self) {
            self.numerator.set_zero();
            self.denominator.set_one();
        }
    }

    impl One for Fraction {
        fn one() -> Self {
            Self { numerator: BigInt::one(), denominator: BigInt::one(), }
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }

        fn set_one(&mut self) {
            self.numerator.set_one();
            self.denominator.set_one();
        }
    }
}

/// Least common multiple of two positive denominators, `(|a| / gcd(a, b)) · |b|`.
fn common_denominator(a: &BigInt, b: &BigInt) -> BigInt {
    let gcd = a.gcd(b);
    (a.abs() / gcd) * b.abs()
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    use crate::F;
    use crate::error::ArithmeticError;
    use crate::fraction::Fraction;
    use crate::fraction::field::common_denominator;

    #[test]
    fn add() {
        assert_eq!(F!(1, 5) + F!(3, 10), F!(1, 2));
        assert_eq!(&F!(1, 2) + F!(1, 3), F!(5, 6));
        assert_eq!(F!(1, 4) + &F!(-1, 4), Fraction::zero());
        assert_eq!(&F!(2, 3) + &F!(1, 3), Fraction::one());
        assert_eq!(F!(-3, 7) + F!(1, 7), F!(-2, 7));

        let mut total = F!(1, 6);
        total += F!(1, 3);
        assert_eq!(total, F!(1, 2));
        total += &F!(1, 2);
        assert_eq!(total, F!(1));
    }

    #[test]
    fn add_zero() {
        let value = F!(7, 3);
        assert_eq!(Fraction::zero() + &value, value);
        assert_eq!(&value + Fraction::zero(), value);
        assert_eq!(Fraction::default() + &value, value);

        let sum = Fraction::default() + Fraction::default();
        assert_eq!(sum, Fraction::zero());
        assert!(!sum.is_undefined());
    }

    #[test]
    fn sub() {
        assert_eq!(F!(1, 2) - F!(1, 3), F!(1, 6));
        assert_eq!(&F!(1, 3) - F!(1, 2), F!(-1, 6));
        assert_eq!(F!(5, 4) - &F!(1, 4), F!(1));
        assert_eq!(Fraction::zero() - F!(2, 9), F!(-2, 9));
        assert_eq!(F!(2, 9) - Fraction::default(), F!(2, 9));

        let mut difference = F!(3);
        difference -= F!(1, 2);
        difference -= &F!(1, 2);
        assert_eq!(difference, F!(2));
    }

    #[test]
    fn mul() {
        assert_eq!(F!(2, 3) * F!(3, 4), F!(1, 2));
        assert_eq!(&F!(-2, 3) * &F!(3, 2), F!(-1));
        assert_eq!(F!(5, 7) * Fraction::zero(), Fraction::zero());
        assert_eq!(Fraction::one() * &F!(5, 7), F!(5, 7));

        let mut product = F!(1, 2);
        product *= F!(4);
        product *= &F!(1, 3);
        assert_eq!(product, F!(2, 3));
    }

    #[test]
    fn div() {
        assert_eq!(F!(1, 3) / F!(1, 5), F!(5, 3));
        assert_eq!(&F!(1, 3) / &F!(-1, 5), F!(-5, 3));
        assert_eq!(Fraction::zero() / F!(3), Fraction::zero());
        assert_eq!(F!(-4, 9) / F!(-2, 3), F!(2, 3));

        let mut quotient = F!(3, 4);
        quotient /= F!(3);
        assert_eq!(quotient, F!(1, 4));
    }

    #[test]
    fn checked_div() {
        assert_eq!(F!(1, 2).checked_div(&F!(1, 4)), Ok(F!(2)));
        assert_eq!(F!(1, 2).checked_div(&Fraction::zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(F!(1, 2).checked_div(&Fraction::default()), Err(ArithmeticError::DivisionByZero));

        assert_eq!(F!(3, 4).checked_div(3_i32), Ok(F!(1, 4)));
        assert_eq!(F!(3, 4).checked_div(-2_i64), Ok(F!(-3, 8)));
        assert_eq!(F!(3, 4).checked_div(0_u32), Err(ArithmeticError::DivisionByZero));
        assert_eq!(F!(3, 4).checked_div(0_u64), Err(ArithmeticError::DivisionByZero));
        assert_eq!(Fraction::from(2_u64).checked_div(F!(2, 3)), Ok(F!(3)));
        assert_eq!(Fraction::from(2_i32).checked_div(Fraction::zero()), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    #[should_panic]
    fn div_zero() {
        let _ = F!(1, 2) / Fraction::zero();
    }

    #[test]
    fn neg() {
        assert_eq!(-F!(1, 2), F!(-1, 2));
        assert_eq!(-&F!(-1, 2), F!(1, 2));
        assert_eq!(-Fraction::zero(), Fraction::zero());
        assert!(!(-Fraction::default()).is_undefined());
    }

    #[test]
    fn sum_product() {
        let values = vec![F!(1, 2), F!(1, 3), F!(1, 6)];
        assert_eq!(values.iter().sum::<Fraction>(), F!(1));
        assert_eq!(values.iter().product::<Fraction>(), F!(1, 36));
        assert_eq!(values.into_iter().sum::<Fraction>(), F!(1));
        assert_eq!(Vec::<Fraction>::new().into_iter().sum::<Fraction>(), Fraction::zero());
        assert_eq!(Vec::<Fraction>::new().into_iter().product::<Fraction>(), Fraction::one());
    }

    #[test]
    fn identities() {
        assert!(Fraction::zero().is_zero());
        assert!(Fraction::default().is_zero());
        assert!(Fraction::one().is_one());
        assert!(!F!(2, 2).is_zero());
        assert!(F!(2, 2).is_one());

        let mut value = F!(3, 4);
        value.set_zero();
        assert_eq!(value, Fraction::zero());
        value.set_one();
        assert_eq!(value, Fraction::one());
    }

    #[test]
    fn lcm() {
        assert_eq!(common_denominator(&BigInt::from(4), &BigInt::from(6)), BigInt::from(12));
        assert_eq!(common_denominator(&BigInt::from(5), &BigInt::from(7)), BigInt::from(35));
        assert_eq!(common_denominator(&BigInt::from(1), &BigInt::from(9)), BigInt::from(9));
    }
}
