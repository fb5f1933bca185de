use crate::math::calculuserror::CalculusResult;

pub trait Curve {
    fn value(&self, x: f64) -> CalculusResult<f64>;

    fn derivative(&self, x: f64) -> CalculusResult<f64>;
}

pub trait CurveIntegration {
    /// Definite integral from `a` to `b`; `integral(a, b) == -integral(b, a)`.
    fn integral(&self, a: f64, b: f64) -> CalculusResult<f64>;
}
