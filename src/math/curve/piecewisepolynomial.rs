use serde::{
    Deserialize,
    Serialize
};

use crate::math::calculuserror::{
    CalculusError,
    CalculusResult
};
use crate::math::curve::boundedcurve::{
    BoundedCurve,
    Point2D
};
use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::curve::polynomial::Polynomial;

// ─────────────────────────────────────────────
// Domain
// ─────────────────────────────────────────────

/// Closed interval `[lower, upper]`, written `[lower, upper]` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Domain {
    lower: f64,
    upper: f64
}

impl Domain {
    pub fn new(lower: f64, upper: f64) -> Domain {
        Domain { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl From<(f64, f64)> for Domain {
    fn from((lower, upper): (f64, f64)) -> Self {
        Domain::new(lower, upper)
    }
}

impl From<Domain> for (f64, f64) {
    fn from(domain: Domain) -> Self {
        (domain.lower, domain.upper)
    }
}

// ─────────────────────────────────────────────
// Piece
// ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    polynomial: Polynomial,
    domain: Domain
}

impl Piece {
    pub fn new(polynomial: Polynomial, domain: Domain) -> Piece {
        Piece { polynomial, domain }
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Integral of this piece over its whole domain.
    fn full_integral(&self) -> CalculusResult<f64> {
        self.polynomial.evaluate_integral(self.domain.lower, self.domain.upper)
    }
}

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

/// Polynomials glued together over consecutive closed domains.
///
/// Pieces are kept in insertion order and the caller appends them with
/// increasing domains; adjacent domains share their boundary point, which
/// belongs to the earlier piece for point evaluation.
///
/// Every result is multiplied by the unit `scale_factor`: once for point
/// values and derivatives, squared for definite integrals.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial {
    pieces: Vec<Piece>,
    scale_factor: f64
}

impl PiecewisePolynomial {
    pub fn new(scale_factor: f64) -> PiecewisePolynomial {
        PiecewisePolynomial {
            pieces: Vec::new(),
            scale_factor
        }
    }

    /// A piecewise polynomial whose scale factor is 1.
    pub fn unscaled() -> PiecewisePolynomial {
        Self::new(1.0)
    }

    pub fn from_pieces(pieces: Vec<Piece>, scale_factor: f64) -> PiecewisePolynomial {
        PiecewisePolynomial { pieces, scale_factor }
    }

    /// Appends a piece. Ordering and overlap are not checked.
    pub fn add_piece(&mut self, polynomial: Polynomial, lower: f64, upper: f64) {
        self.pieces.push(Piece::new(polynomial, Domain::new(lower, upper)));
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// First piece, in insertion order, whose domain holds `x`.
    fn first_piece_containing(&self, x: f64) -> Option<usize> {
        self.pieces.iter().position(|piece| piece.domain.contains(x))
    }

    /// Last piece, in insertion order, whose domain holds `x`.
    fn last_piece_containing(&self, x: f64) -> Option<usize> {
        self.pieces.iter().rposition(|piece| piece.domain.contains(x))
    }

    /// Value at `x`, or NaN when no domain holds `x`.
    ///
    /// # Errors
    /// [`CalculusError::EmptyPolynomial`] if the selected piece has no coefficients.
    pub fn evaluate(&self, x: f64) -> CalculusResult<f64> {
        match self.first_piece_containing(x) {
            Some(i) => Ok(self.pieces[i].polynomial.evaluate(x)? * self.scale_factor),
            None => Ok(f64::NAN)
        }
    }

    /// Derivative at `x`, or NaN when no domain holds `x`.
    pub fn evaluate_derivative(&self, x: f64) -> CalculusResult<f64> {
        match self.first_piece_containing(x) {
            Some(i) => Ok(self.pieces[i].polynomial.evaluate_derivative(x)? * self.scale_factor),
            None => Ok(f64::NAN)
        }
    }

    /// Definite integral from `a` to `b`, possibly spanning several pieces.
    ///
    /// The piece holding `a` is searched from the front and the piece holding
    /// `b` from the back, so a bound on a shared boundary picks the earlier
    /// piece for `a` and the later one for `b`.
    ///
    /// # Errors
    /// - [`CalculusError::NotANumberBound`] if `a` or `b` is NaN
    /// - [`CalculusError::OutOfDomain`] if no piece holds `a` or `b`
    /// - [`CalculusError::EmptyPolynomial`] if a touched piece has no coefficients
    pub fn evaluate_integral(&self, a: f64, b: f64) -> CalculusResult<f64> {
        if a.is_nan() || b.is_nan() {
            return Err(CalculusError::NotANumberBound);
        }
        let start = self.first_piece_containing(a).ok_or(CalculusError::OutOfDomain(a))?;
        let end = self.last_piece_containing(b).ok_or(CalculusError::OutOfDomain(b))?;

        let result = if start <= end {
            self.accumulate(start, end, a, b)?
        } else {
            -self.accumulate(end, start, b, a)?
        };
        Ok(result * self.scale_factor * self.scale_factor)
    }

    /// Unscaled integral from `from` in piece `first` to `to` in piece `last`,
    /// where `first <= last`.
    fn accumulate(&self, first: usize, last: usize, from: f64, to: f64) -> CalculusResult<f64> {
        let first_piece = &self.pieces[first];
        if first == last {
            return first_piece.polynomial.evaluate_integral(from, to);
        }

        let mut result = first_piece.polynomial.evaluate_integral(from, first_piece.domain.upper)?;
        for piece in &self.pieces[(first + 1)..last] {
            result += piece.full_integral()?;
        }
        let last_piece = &self.pieces[last];
        result += last_piece.polynomial.evaluate_integral(last_piece.domain.lower, to)?;
        Ok(result)
    }

    /// Every piece scaled by `c`; the scale factor is unchanged.
    pub fn multiply_by_constant(&self, c: f64) -> PiecewisePolynomial {
        PiecewisePolynomial {
            pieces: self
                .pieces
                .iter()
                .map(|piece| Piece::new(piece.polynomial.multiply_by_constant(c), piece.domain))
                .collect(),
            scale_factor: self.scale_factor
        }
    }
}

// ─────────────────────────────────────────────
// Trait implementations
// ─────────────────────────────────────────────

impl Curve for PiecewisePolynomial {
    fn value(&self, x: f64) -> CalculusResult<f64> {
        self.evaluate(x)
    }

    fn derivative(&self, x: f64) -> CalculusResult<f64> {
        self.evaluate_derivative(x)
    }
}

impl CurveIntegration for PiecewisePolynomial {
    fn integral(&self, a: f64, b: f64) -> CalculusResult<f64> {
        self.evaluate_integral(a, b)
    }
}

impl BoundedCurve for PiecewisePolynomial {
    fn knots(&self) -> CalculusResult<Vec<Point2D>> {
        let mut knots = Vec::with_capacity(self.pieces.len() + 1);
        for piece in &self.pieces {
            let x = piece.domain.lower;
            knots.push(Point2D::new(x, self.evaluate(x)?));
        }
        if let Some(piece) = self.pieces.last() {
            let x = piece.domain.upper;
            knots.push(Point2D::new(x, self.evaluate(x)?));
        }
        Ok(knots)
    }

    fn min_x(&self) -> Option<f64> {
        self.pieces.first().map(|piece| piece.domain.lower)
    }

    fn max_x(&self) -> Option<f64> {
        self.pieces.last().map(|piece| piece.domain.upper)
    }
}
