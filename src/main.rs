use std::env;
use std::error::Error;

use log::info;

use wingsail::configuration::Configuration;
use wingsail::wing::ribload::RibLoadCalculator;
use wingsail::wing::wingerror::WingError;
use wingsail::wing::winggeometry::WingGeometry;

const DEFAULT_CONFIG_PATH: &str = "json/config.json";

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = Configuration::new();
    config.from_reader(&config_path)?;
    let parameters = config
        .wing_parameters()
        .ok_or(WingError::MissingWingParameters)?;
    let geometry = WingGeometry::from_configuration(&config, &parameters)?;
    let (bottom, top) = geometry.span()?;
    info!("chord function: {} pieces over [{}, {}]", geometry.chord_function().len(), bottom, top);

    println!("planform area: {:.4} m^2", geometry.planform_area(bottom, top)?);
    println!("dynamic pressure: {:.4} Pa", parameters.dynamic_pressure());
    println!("{:>10} {:>10} {:>12} {:>12} {:>12} {:>12} {:>12}",
             "height", "chord", "area", "side", "frontal", "weight", "shear");
    for rib in RibLoadCalculator::new(&geometry, &parameters).rib_loads()? {
        println!("{:>10.4} {:>10.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                 rib.position(),
                 rib.chord(),
                 rib.tributary_area(),
                 rib.side_force(),
                 rib.frontal_force(),
                 rib.weight(),
                 rib.shear());
    }
    Ok(())
}
