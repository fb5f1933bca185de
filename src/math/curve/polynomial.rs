use std::fmt;
use std::ops::{
    Add,
    Mul,
    Neg,
    Sub
};
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::calculuserror::{
    CalculusError,
    CalculusResult
};
use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};

// ─────────────────────────────────────────────
// Coefficient text format
// ─────────────────────────────────────────────
//
// Tokens are separated by any run of whitespace and/or commas. Each token
// must be a finite real-number literal; the first token is the
// highest-degree coefficient and every lower degree needs its own token.

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn parse_literal(token: &str) -> CalculusResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalculusError::InvalidLiteral(token.to_owned()))
}

/// `x^n` by repeated multiplication, so `x^0` is exactly 1 for every x.
fn power(x: f64, n: usize) -> f64 {
    (0..n).fold(1.0, |acc, _| acc * x)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PolynomialJsonProp {
    Text(String),
    Coefficients(Vec<f64>)
}

// ─────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────

/// A polynomial in one real variable, stored as its coefficients with the
/// highest degree first.
///
/// `[2.0, 0.0, -1.0]` is `2x^2 - 1`: every degree down to the constant term
/// has an explicit entry. An empty sequence means no polynomial is set, and
/// all three evaluators reject it with [`CalculusError::EmptyPolynomial`].
///
/// Values are immutable: scaling and addition return new polynomials, and
/// `clone` copies the coefficients, so two clones never alias.
///
/// ```
/// use wingsail::math::curve::polynomial::Polynomial;
///
/// let p: Polynomial = "1 1 1".parse().unwrap();
/// assert_eq!(p.evaluate(2.0).unwrap(), 7.0);
/// assert_eq!(p.evaluate_derivative(2.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PolynomialJsonProp", into = "Vec<f64>")]
pub struct Polynomial {
    coefficients: Vec<f64>
}

impl Polynomial {
    /// Stores `coefficients` verbatim, highest degree first.
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// A polynomial with no coefficients.
    pub fn empty() -> Polynomial {
        Polynomial { coefficients: Vec::new() }
    }

    /// Builds a polynomial from the textual coefficient format.
    ///
    /// An empty or blank string yields an empty polynomial; evaluating it
    /// fails later with [`CalculusError::EmptyPolynomial`].
    ///
    /// # Errors
    /// [`CalculusError::InvalidLiteral`] carrying the first token that is
    /// not a finite real number.
    pub fn parse(text: &str) -> CalculusResult<Polynomial> {
        let coefficients = split_tokens(text)
            .map(parse_literal)
            .collect::<CalculusResult<Vec<f64>>>()?;
        Ok(Polynomial { coefficients })
    }

    /// Syntax check of the textual coefficient format.
    ///
    /// Only the tokens are checked, so a string without tokens is valid here
    /// even though it describes no polynomial.
    pub fn is_valid_polynomial(text: &str) -> bool {
        split_tokens(text).all(|token| parse_literal(token).is_ok())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// `None` when no polynomial is set.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// (exponent, coefficient) pairs, highest exponent first.
    fn terms(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let degree = self.coefficients.len().saturating_sub(1);
        self.coefficients
            .iter()
            .enumerate()
            .map(move |(i, &coefficient)| (degree - i, coefficient))
    }

    fn ensure_not_empty(&self) -> CalculusResult<()> {
        if self.is_empty() {
            Err(CalculusError::EmptyPolynomial)
        } else {
            Ok(())
        }
    }

    pub fn evaluate(&self, x: f64) -> CalculusResult<f64> {
        self.ensure_not_empty()?;
        Ok(self
            .terms()
            .map(|(exponent, coefficient)| coefficient * power(x, exponent))
            .sum())
    }

    /// Exact first derivative at `x`.
    pub fn evaluate_derivative(&self, x: f64) -> CalculusResult<f64> {
        self.ensure_not_empty()?;
        // The constant term is `c * 0 * x^0`; the zero exponent factor removes it.
        Ok(self
            .terms()
            .map(|(exponent, coefficient)| {
                coefficient * exponent as f64 * power(x, exponent.saturating_sub(1))
            })
            .sum())
    }

    /// Exact definite integral `F(b) - F(a)`, with `F` the antiderivative
    /// whose integration constant is zero.
    ///
    /// # Errors
    /// - [`CalculusError::EmptyPolynomial`] if no polynomial is set
    /// - [`CalculusError::NotANumberBound`] if `a` or `b` is NaN
    pub fn evaluate_integral(&self, a: f64, b: f64) -> CalculusResult<f64> {
        self.ensure_not_empty()?;
        if a.is_nan() || b.is_nan() {
            return Err(CalculusError::NotANumberBound);
        }
        Ok(self.antiderivative(b) - self.antiderivative(a))
    }

    fn antiderivative(&self, x: f64) -> f64 {
        self.terms()
            .map(|(exponent, coefficient)| {
                coefficient / (exponent + 1) as f64 * power(x, exponent + 1)
            })
            .sum()
    }

    /// Every coefficient scaled by `c`. An empty polynomial stays empty.
    pub fn multiply_by_constant(&self, c: f64) -> Polynomial {
        Polynomial {
            coefficients: self.coefficients.iter().map(|coefficient| coefficient * c).collect()
        }
    }

    /// Sum of two polynomials aligned at the constant term.
    ///
    /// Coefficients are matched from the end of each sequence (constant with
    /// constant, linear with linear, ...), so `"1 2"` plus `"1 0 0"` is
    /// `"1 1 2"`. The result has the degree of the longer operand.
    pub fn add_polynomial(&self, other: &Polynomial) -> Polynomial {
        let (longer, shorter) = if other.coefficients.len() > self.coefficients.len() {
            (other, self)
        } else {
            (self, other)
        };
        let mut coefficients = longer.coefficients.clone();
        for (slot, &coefficient) in coefficients.iter_mut().rev().zip(shorter.coefficients.iter().rev()) {
            *slot += coefficient;
        }
        Polynomial { coefficients }
    }
}

impl FromStr for Polynomial {
    type Err = CalculusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s)
    }
}

impl TryFrom<PolynomialJsonProp> for Polynomial {
    type Error = CalculusError;

    fn try_from(json_prop: PolynomialJsonProp) -> Result<Self, Self::Error> {
        match json_prop {
            PolynomialJsonProp::Text(text) => Polynomial::parse(&text),
            PolynomialJsonProp::Coefficients(coefficients) => Ok(Polynomial::new(coefficients))
        }
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefficients: Vec<f64>) -> Self {
        Polynomial::new(coefficients)
    }
}

/// Writes the coefficient format accepted by [`Polynomial::parse`].
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coefficient in &self.coefficients {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", coefficient)?;
            first = false;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.add_polynomial(rhs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        self.add_polynomial(&rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.multiply_by_constant(-1.0)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.multiply_by_constant(-1.0)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.add_polynomial(&-rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.add_polynomial(&-rhs)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.multiply_by_constant(rhs)
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.multiply_by_constant(rhs)
    }
}

// ─────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────

impl Curve for Polynomial {
    fn value(&self, x: f64) -> CalculusResult<f64> {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> CalculusResult<f64> {
        self.evaluate_derivative(x)
    }
}

impl CurveIntegration for Polynomial {
    fn integral(&self, a: f64, b: f64) -> CalculusResult<f64> {
        self.evaluate_integral(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(text: &str) -> Polynomial {
        Polynomial::parse(text).unwrap()
    }

    #[test]
    fn test_valid_coefficient_strings() {
        for text in ["1 2 3", " 2   3.5 0  ", "-2 -3.547 0 0", "0 .1 -1", "1, 2,3", "1e5", ""] {
            assert!(Polynomial::is_valid_polynomial(text), "{text:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_coefficient_strings() {
        for text in ["3 . 5", "2x^2+1", "a b c", "3 - 5", "1/2 2", "1 inf", "NaN"] {
            assert!(!Polynomial::is_valid_polynomial(text), "{text:?} should be invalid");
        }
    }

    #[test]
    fn test_parse_reports_first_bad_token() {
        assert_eq!(
            Polynomial::parse("1 x 2/3"),
            Err(CalculusError::InvalidLiteral("x".to_owned()))
        );
        assert_eq!(poly(" 2   3.5 0  ").coefficients(), &[2.0, 3.5, 0.0]);
        assert_eq!(poly("0 .1 -1").coefficients(), &[0.0, 0.1, -1.0]);
        assert_eq!(poly("1e5 -2.5E-1").coefficients(), &[100000.0, -0.25]);
    }

    #[test]
    fn test_quadratic_scenario() {
        let p = poly("1 1 1");
        assert_eq!(p.degree(), Some(2));
        assert_eq!(p.evaluate(2.0).unwrap(), 7.0);
        assert_eq!(p.evaluate_derivative(2.0).unwrap(), 5.0);
        assert_relative_eq!(p.evaluate_integral(0.0, 1.0).unwrap(), 11.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_at_zero_is_constant_term() {
        for text in ["4", "1 -3", "2 0 0 -7.5", "0 .1 -1"] {
            let p = poly(text);
            assert_eq!(p.evaluate(0.0).unwrap(), *p.coefficients().last().unwrap());
        }
    }

    #[test]
    fn test_derivative_of_constant_is_zero() {
        let p = poly("3.25");
        assert_eq!(p.evaluate_derivative(0.0).unwrap(), 0.0);
        assert_eq!(p.evaluate_derivative(-12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_integral_is_antisymmetric() {
        let p = poly("-2 -3.547 0 0.5");
        for (a, b) in [(0.0, 1.0), (-3.5, 2.25), (10.0, -0.125)] {
            assert_eq!(p.evaluate_integral(a, b).unwrap(), -p.evaluate_integral(b, a).unwrap());
            assert_eq!(p.evaluate_integral(a, a).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_empty_polynomial_fails_everywhere() {
        let p = Polynomial::parse("   ").unwrap();
        assert!(p.is_empty());
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate(1.0), Err(CalculusError::EmptyPolynomial));
        assert_eq!(p.evaluate_derivative(1.0), Err(CalculusError::EmptyPolynomial));
        assert_eq!(p.evaluate_integral(0.0, 1.0), Err(CalculusError::EmptyPolynomial));
        assert!(p.multiply_by_constant(2.0).is_empty());
    }

    #[test]
    fn test_nan_bound_is_rejected() {
        let p = poly("1 0");
        assert_eq!(p.evaluate_integral(f64::NAN, 1.0), Err(CalculusError::NotANumberBound));
        assert_eq!(p.evaluate_integral(0.0, f64::NAN), Err(CalculusError::NotANumberBound));
    }

    #[test]
    fn test_addition_aligns_constant_terms() {
        let sum = poly("1 0 0").add_polynomial(&poly("1 2"));
        assert_eq!(sum, poly("1 1 2"));
        let sum = poly("1 2").add_polynomial(&poly("1 0 0"));
        assert_eq!(sum, poly("1 1 2"));
        assert_eq!(Polynomial::empty().add_polynomial(&poly("3 4")), poly("3 4"));
    }

    #[test]
    fn test_operators() {
        let trailing = poly("0.5 2");
        let leading = poly("0.25 0 0.5");
        let chord = &trailing - &leading;
        assert_eq!(chord, poly("-0.25 0.5 1.5"));
        assert_eq!(&chord * 2.0, poly("-0.5 1 3"));
        assert_eq!(-poly("1 -1"), poly("-1 1"));
        assert_eq!(poly("1") + poly("2 3"), poly("2 4"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = poly("1 -2 3");
        let copy = original.clone();
        for x in [-2.0, 0.0, 0.5, 7.0] {
            assert_eq!(original.evaluate(x).unwrap(), copy.evaluate(x).unwrap());
        }
        let scaled = copy.multiply_by_constant(3.0);
        assert_eq!(original, poly("1 -2 3"));
        assert_eq!(scaled, poly("3 -6 9"));
    }

    #[test]
    fn test_display_round_trip() {
        let p = poly("-2 -3.547 0 0.1");
        assert_eq!(p.to_string(), "-2 -3.547 0 0.1");
        assert_eq!(p.to_string().parse::<Polynomial>().unwrap(), p);
    }

    #[test]
    fn test_json() {
        let from_text: Polynomial = serde_json::from_str("\"1, 2 3\"").unwrap();
        let from_array: Polynomial = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
        assert_eq!(from_text, from_array);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "[1.0,2.0,3.0]");
        assert!(serde_json::from_str::<Polynomial>("\"2x^2+1\"").is_err());
    }
}
