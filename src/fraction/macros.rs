/// Shorthand for creating a fraction in tests.
///
/// With two arguments, a zero denominator yields zero, see [`over`](crate::fraction::over).
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::fraction::Fraction::from_integer($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::over($numerator as i64, $denominator as i64)
    };
}
