use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::math::curve::piecewisepolynomial::{
    Piece,
    PiecewisePolynomial
};

#[derive(Deserialize)]
struct PiecewisePolynomialJsonProp {
    pieces: Vec<Piece>
}

/// `scale_factor` is the unit factor shared by every curve of a configuration.
fn get_piecewise_polynomial_from_json(json_value: serde_json::Value,
                                      scale_factor: &f64) -> Result<PiecewisePolynomial, ManagerError> {
    let json_prop: PiecewisePolynomialJsonProp = parse_json_value(json_value)?;
    Ok(PiecewisePolynomial::from_pieces(json_prop.pieces, *scale_factor))
}


pub struct CurveManager;


impl CurveManager {
    pub fn new() -> Manager<PiecewisePolynomial, f64> {
        Manager::new(get_piecewise_polynomial_from_json)
    }
}
