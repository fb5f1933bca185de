use log::{
    debug,
    info
};

use crate::wing::wingerror::WingError;
use crate::wing::winggeometry::WingGeometry;
use crate::wing::wingparameters::WingParameters;

/// Loads carried by one rib, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibLoad {
    position: f64,
    chord: f64,
    tributary_area: f64,
    side_force: f64,
    frontal_force: f64,
    weight: f64,
    shear: f64
}

impl RibLoad {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    /// Planform area between the midpoints to the neighbouring ribs.
    pub fn tributary_area(&self) -> f64 {
        self.tributary_area
    }

    /// Wind at 90 degrees angle of attack on the tributary area.
    pub fn side_force(&self) -> f64 {
        self.side_force
    }

    /// Wind at 0 degrees angle of attack on the tributary frontal area.
    pub fn frontal_force(&self) -> f64 {
        self.frontal_force
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Side wind load on the part of the wing above this rib.
    pub fn shear(&self) -> f64 {
        self.shear
    }
}

/// Spreads the wind and gravity loads of a wing over evenly spaced ribs.
pub struct RibLoadCalculator<'a> {
    geometry: &'a WingGeometry,
    parameters: &'a WingParameters
}

impl<'a> RibLoadCalculator<'a> {
    pub fn new(geometry: &'a WingGeometry, parameters: &'a WingParameters) -> RibLoadCalculator<'a> {
        RibLoadCalculator { geometry, parameters }
    }

    /// Rib heights from the bottom to the top of the span, both ends included.
    pub fn rib_positions(&self) -> Result<Vec<f64>, WingError> {
        let rib_count = self.parameters.rib_count();
        if rib_count < 2 {
            return Err(WingError::TooFewRibs(rib_count));
        }
        let (bottom, top) = self.geometry.span()?;
        let spacing = (top - bottom) / (rib_count - 1) as f64;
        // The last rib sits exactly on the top so it stays inside the span.
        Ok((0..rib_count)
            .map(|i| if i == rib_count - 1 { top } else { bottom + i as f64 * spacing })
            .collect())
    }

    pub fn rib_loads(&self) -> Result<Vec<RibLoad>, WingError> {
        let positions = self.rib_positions()?;
        let (bottom, top) = self.geometry.span()?;
        let dynamic_pressure = self.parameters.dynamic_pressure();
        let total_area = self.geometry.planform_area(bottom, top)?;
        info!("wing span [{}, {}], planform area {:.6}", bottom, top, total_area);

        let last = positions.len() - 1;
        let mut loads = Vec::with_capacity(positions.len());
        for (i, &position) in positions.iter().enumerate() {
            let lower = if i == 0 { bottom } else { 0.5 * (positions[i - 1] + position) };
            let upper = if i == last { top } else { 0.5 * (position + positions[i + 1]) };
            let tributary_area = self.geometry.planform_area(lower, upper)?;
            let weight = if total_area == 0.0 {
                0.0
            } else {
                self.parameters.weight() * tributary_area / total_area
            };
            let load = RibLoad {
                position,
                chord: self.geometry.chord_at(position)?,
                tributary_area,
                side_force: dynamic_pressure * tributary_area,
                frontal_force: dynamic_pressure * self.geometry.frontal_area(lower, upper)?,
                weight,
                shear: dynamic_pressure * self.geometry.planform_area(position, top)?
            };
            debug!("rib {} at {}: {:?}", i, position, load);
            loads.push(load);
        }
        Ok(loads)
    }
}
