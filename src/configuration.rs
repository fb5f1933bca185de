use std::cell::{
    Cell,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use log::{
    info,
    warn
};
use serde::Deserialize;

use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::curve::curvemanager::CurveManager;
use crate::math::curve::piecewisepolynomial::PiecewisePolynomial;
use crate::wing::wingparameters::WingParameters;

fn default_scale_factor() -> f64 {
    1.0
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_scale_factor")]
    scale_factor: f64,
    #[serde(default)]
    curve: Vec<serde_json::Value>,
    wing: Option<WingParameters>
}

/// Inputs of a wing calculation: the unit scale factor, the named edge
/// curves and the physical parameters.
pub struct Configuration {
    scale_factor_cell: Cell<f64>,
    curve_manager_cell: RefCell<Manager<PiecewisePolynomial, f64>>,
    wing_parameters_cell: RefCell<Option<WingParameters>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            scale_factor_cell: Cell::new(default_scale_factor()),
            curve_manager_cell: RefCell::new(CurveManager::new()),
            wing_parameters_cell: RefCell::new(None)
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor_cell.get()
    }

    pub fn curve_manager(&self) -> RefMut<'_, Manager<PiecewisePolynomial, f64>> {
        self.curve_manager_cell.borrow_mut()
    }

    pub fn wing_parameters(&self) -> Option<WingParameters> {
        self.wing_parameters_cell.borrow().clone()
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        info!("loading configuration from {}", file_path);
        self.load_json_value(json_value)
    }

    /// Curves are built with the scale factor of the same document.
    pub fn load_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        self.scale_factor_cell.set(json_prop.scale_factor);
        let curve_manager = self.curve_manager_cell.borrow_mut();
        curve_manager.insert_obj_from_json_vec(&json_prop.curve, &json_prop.scale_factor)?;
        info!("{} curves loaded with scale factor {}", json_prop.curve.len(), json_prop.scale_factor);
        if json_prop.wing.is_none() {
            warn!("configuration has no wing section");
        }
        *self.wing_parameters_cell.borrow_mut() = json_prop.wing;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
