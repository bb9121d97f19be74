use num::bigint::BigInt;
use num::complex::Complex64;
use num::rational::BigRational;

/// Numeric values as the reader produces them.
///
/// Arithmetic in the builtin table binds fixnums only; the other variants
/// exist as first class values that can be read, printed and compared.
#[derive(Debug, PartialEq, Clone)]
pub enum Number {
    Fixnum(BigInt),
    Flonum(f64),
    Rational(BigRational),
    Complex(Complex64),
}

impl Number {
    pub fn fixnum<I: Into<BigInt>>(n: I) -> Self {
        Self::Fixnum(n.into())
    }

    pub fn flonum(f: f64) -> Self {
        Self::Flonum(f)
    }

    /// The denominator must be non-zero; `BigRational` reduces the fraction
    /// and keeps the denominator positive.
    pub fn fraction<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Self {
        Self::Rational(BigRational::new(numer.into(), denom.into()))
    }

    pub fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex64::new(re, im))
    }

    pub fn is_fixnum(&self) -> bool {
        matches!(self, Self::Fixnum(_))
    }
}

impl<I: Into<BigInt>> From<I> for Number {
    fn from(n: I) -> Number {
        Number::Fixnum(n.into())
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixnum(n) => write!(f, "{}", n),
            Self::Flonum(x) => write!(f, "{:?}", x),
            Self::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Complex(c) if c.im < 0.0 => write!(f, "{}-{}i", c.re, -c.im),
            Self::Complex(c) => write!(f, "{}+{}i", c.re, c.im),
        }
    }
}
