use log::debug;

use crate::configuration::Configuration;
use crate::manager::manager::IManager;
use crate::math::calculuserror::CalculusResult;
use crate::math::curve::boundedcurve::BoundedCurve;
use crate::math::curve::piecewisepolynomial::{
    Piece,
    PiecewisePolynomial
};
use crate::wing::wingerror::WingError;
use crate::wing::wingparameters::WingParameters;

/// Planform of a wingsail: the chord as a function of height.
///
/// The chord is the trailing edge minus the leading edge, built piece by
/// piece, so both edges must be partitioned over the same domains.
pub struct WingGeometry {
    chord: PiecewisePolynomial,
    airfoil_width_coefficient: f64
}

impl WingGeometry {
    pub fn new(leading_edge: &PiecewisePolynomial,
               trailing_edge: &PiecewisePolynomial,
               airfoil_width_coefficient: f64) -> Result<WingGeometry, WingError> {
        if leading_edge.is_empty() || trailing_edge.is_empty() {
            return Err(WingError::EmptyWing);
        }
        if leading_edge.scale_factor() != trailing_edge.scale_factor() {
            return Err(WingError::MismatchedScaleFactors);
        }
        if leading_edge.len() != trailing_edge.len() {
            return Err(WingError::MismatchedDomains {
                index: leading_edge.len().min(trailing_edge.len())
            });
        }

        let mut pieces = Vec::with_capacity(leading_edge.len());
        for (index, (leading, trailing)) in leading_edge.pieces().iter().zip(trailing_edge.pieces()).enumerate() {
            if leading.domain() != trailing.domain() {
                return Err(WingError::MismatchedDomains { index });
            }
            let chord = trailing
                .polynomial()
                .add_polynomial(&leading.polynomial().multiply_by_constant(-1.0));
            debug!("chord piece {}: {}", index, chord);
            pieces.push(Piece::new(chord, leading.domain()));
        }

        Ok(WingGeometry {
            chord: PiecewisePolynomial::from_pieces(pieces, leading_edge.scale_factor()),
            airfoil_width_coefficient
        })
    }

    /// Looks up the edge curves named by `parameters` in `configuration`.
    pub fn from_configuration(configuration: &Configuration,
                              parameters: &WingParameters) -> Result<WingGeometry, WingError> {
        let curve_manager = configuration.curve_manager();
        let leading_edge = curve_manager.get(parameters.leading_edge())?;
        let trailing_edge = curve_manager.get(parameters.trailing_edge())?;
        WingGeometry::new(&leading_edge, &trailing_edge, parameters.airfoil_width_coefficient())
    }

    pub fn chord_function(&self) -> &PiecewisePolynomial {
        &self.chord
    }

    /// Lowest and highest covered height.
    pub fn span(&self) -> Result<(f64, f64), WingError> {
        match (self.chord.min_x(), self.chord.max_x()) {
            (Some(bottom), Some(top)) => Ok((bottom, top)),
            _ => Err(WingError::EmptyWing)
        }
    }

    /// NaN outside the span.
    pub fn chord_at(&self, height: f64) -> CalculusResult<f64> {
        self.chord.evaluate(height)
    }

    pub fn thickness_at(&self, height: f64) -> CalculusResult<f64> {
        Ok(self.airfoil_width_coefficient * self.chord_at(height)?)
    }

    /// Side area between two heights.
    pub fn planform_area(&self, from: f64, to: f64) -> CalculusResult<f64> {
        self.chord.evaluate_integral(from, to)
    }

    /// Area facing a wind along the chord between two heights.
    pub fn frontal_area(&self, from: f64, to: f64) -> CalculusResult<f64> {
        Ok(self.airfoil_width_coefficient * self.planform_area(from, to)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::math::curve::polynomial::Polynomial;

    fn edge(pieces: &[(&str, f64, f64)], scale_factor: f64) -> PiecewisePolynomial {
        let mut curve = PiecewisePolynomial::new(scale_factor);
        for &(text, lower, upper) in pieces {
            curve.add_piece(Polynomial::parse(text).unwrap(), lower, upper);
        }
        curve
    }

    #[test]
    fn test_chord_is_trailing_minus_leading() {
        let leading = edge(&[("0.1 0", 0.0, 2.0), ("0.2 -0.2", 2.0, 4.0)], 1.0);
        let trailing = edge(&[("1", 0.0, 2.0), ("-0.1 1.2", 2.0, 4.0)], 1.0);
        let geometry = WingGeometry::new(&leading, &trailing, 0.12).unwrap();

        assert_relative_eq!(geometry.chord_at(0.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(geometry.chord_at(2.0).unwrap(), 0.8, epsilon = 1e-12);
        assert_relative_eq!(geometry.chord_at(4.0).unwrap(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(geometry.thickness_at(0.0).unwrap(), 0.12, epsilon = 1e-12);
        assert!(geometry.chord_at(5.0).unwrap().is_nan());
        // trapezoids 1.8 + 1.0
        assert_relative_eq!(geometry.planform_area(0.0, 4.0).unwrap(), 2.8, epsilon = 1e-12);
        assert_relative_eq!(geometry.frontal_area(0.0, 4.0).unwrap(), 0.336, epsilon = 1e-12);
        assert_eq!(geometry.span().unwrap(), (0.0, 4.0));
    }

    #[test]
    fn test_scale_factor_carries_into_chord() {
        let leading = edge(&[("0", 0.0, 1.0)], 2.0);
        let trailing = edge(&[("1", 0.0, 1.0)], 2.0);
        let geometry = WingGeometry::new(&leading, &trailing, 0.1).unwrap();
        assert_eq!(geometry.chord_at(0.5).unwrap(), 2.0);
        assert_relative_eq!(geometry.planform_area(0.0, 1.0).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_edges() {
        let leading = edge(&[("0", 0.0, 1.0), ("0", 1.0, 2.0)], 1.0);
        let shifted = edge(&[("1", 0.0, 1.0), ("1", 1.0, 2.5)], 1.0);
        let short = edge(&[("1", 0.0, 1.0)], 1.0);
        let rescaled = edge(&[("1", 0.0, 1.0), ("1", 1.0, 2.0)], 1.33);

        assert!(matches!(WingGeometry::new(&leading, &shifted, 0.1), Err(WingError::MismatchedDomains { index: 1 })));
        assert!(matches!(WingGeometry::new(&leading, &short, 0.1), Err(WingError::MismatchedDomains { index: 1 })));
        assert!(matches!(WingGeometry::new(&leading, &rescaled, 0.1), Err(WingError::MismatchedScaleFactors)));
        assert!(matches!(
            WingGeometry::new(&PiecewisePolynomial::unscaled(), &short, 0.1),
            Err(WingError::EmptyWing)
        ));
    }
}
