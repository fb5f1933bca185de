use serde::{
    Deserialize,
    Serialize
};

fn standard_gravity() -> f64 {
    9.80665
}

/// Physical inputs of the rib load model, in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingParameters {
    wind_speed: f64,
    air_density: f64,
    /// Airfoil thickness as a fraction of the chord.
    airfoil_width_coefficient: f64,
    wing_mass: f64,
    #[serde(default = "standard_gravity")]
    gravitational_acceleration: f64,
    rib_count: usize,
    /// Name of the leading edge curve in the curve manager.
    leading_edge: String,
    trailing_edge: String
}

impl WingParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(wind_speed: f64,
               air_density: f64,
               airfoil_width_coefficient: f64,
               wing_mass: f64,
               gravitational_acceleration: f64,
               rib_count: usize,
               leading_edge: String,
               trailing_edge: String) -> WingParameters {
        WingParameters {
            wind_speed,
            air_density,
            airfoil_width_coefficient,
            wing_mass,
            gravitational_acceleration,
            rib_count,
            leading_edge,
            trailing_edge
        }
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn air_density(&self) -> f64 {
        self.air_density
    }

    pub fn airfoil_width_coefficient(&self) -> f64 {
        self.airfoil_width_coefficient
    }

    pub fn wing_mass(&self) -> f64 {
        self.wing_mass
    }

    pub fn gravitational_acceleration(&self) -> f64 {
        self.gravitational_acceleration
    }

    pub fn rib_count(&self) -> usize {
        self.rib_count
    }

    pub fn leading_edge(&self) -> &str {
        &self.leading_edge
    }

    pub fn trailing_edge(&self) -> &str {
        &self.trailing_edge
    }

    /// `0.5 * rho * v^2`
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.air_density * self.wind_speed * self.wind_speed
    }

    pub fn weight(&self) -> f64 {
        self.wing_mass * self.gravitational_acceleration
    }
}
