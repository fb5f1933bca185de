use approx::assert_relative_eq;

use wingsail::configuration::Configuration;
use wingsail::manager::manager::IManager;
use wingsail::math::curve::boundedcurve::BoundedCurve;
use wingsail::wing::ribload::{
    RibLoad,
    RibLoadCalculator
};
use wingsail::wing::winggeometry::WingGeometry;

fn sample_configuration() -> Configuration {
    let config = Configuration::new();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/json/config.json");
    config.from_reader(path).unwrap();
    config
}

#[test]
fn sample_curves_are_registered() {
    let config = sample_configuration();
    assert_eq!(config.scale_factor(), 1.33);
    assert_eq!(config.curve_manager().names(), vec!["leading_edge".to_owned(), "trailing_edge".to_owned()]);

    let leading = config.curve_manager().get("leading_edge").unwrap();
    assert_eq!(leading.min_x(), Some(0.0));
    assert_eq!(leading.max_x(), Some(6.0));
    // continuous at the shared knot
    assert_relative_eq!(leading.evaluate(3.0).unwrap(), 0.18 * 1.33, epsilon = 1e-12);
    assert_relative_eq!(leading.evaluate(3.0 + 1e-9).unwrap(), 0.18 * 1.33, epsilon = 1e-8);
}

#[test]
fn sample_chord_and_area() {
    let config = sample_configuration();
    let parameters = config.wing_parameters().unwrap();
    let geometry = WingGeometry::from_configuration(&config, &parameters).unwrap();

    assert_relative_eq!(geometry.chord_at(0.0).unwrap(), 1.5 * 1.33, epsilon = 1e-12);
    assert_relative_eq!(geometry.chord_at(6.0).unwrap(), 0.42 * 1.33, epsilon = 1e-12);
    assert!(geometry.chord_at(6.5).unwrap().is_nan());

    // chord is 1.5 - 0.03 y^2 on [0, 3] and -0.03 y^2 + 1.5 on [3, 6]
    let unscaled_area = 1.5 * 6.0 - 0.01 * 216.0;
    assert_relative_eq!(geometry.planform_area(0.0, 6.0).unwrap(), unscaled_area * 1.33 * 1.33, epsilon = 1e-9);
}

#[test]
fn sample_rib_loads_balance() {
    let config = sample_configuration();
    let parameters = config.wing_parameters().unwrap();
    let geometry = WingGeometry::from_configuration(&config, &parameters).unwrap();
    let loads = RibLoadCalculator::new(&geometry, &parameters).rib_loads().unwrap();

    assert_eq!(loads.len(), 5);
    let total_area = geometry.planform_area(0.0, 6.0).unwrap();
    let area_sum: f64 = loads.iter().map(RibLoad::tributary_area).sum();
    let weight_sum: f64 = loads.iter().map(RibLoad::weight).sum();
    assert_relative_eq!(area_sum, total_area, epsilon = 1e-9);
    assert_relative_eq!(weight_sum, parameters.weight(), epsilon = 1e-9);
    assert_relative_eq!(loads[0].shear(), parameters.dynamic_pressure() * total_area, epsilon = 1e-9);
    assert_relative_eq!(loads[4].shear(), 0.0, epsilon = 1e-12);
}
