use crate::math::calculuserror::CalculusResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A curve that is only defined on a closed range of x.
pub trait BoundedCurve {
    /// The curve sampled at every breakpoint, lowest x first.
    fn knots(&self) -> CalculusResult<Vec<Point2D>>;

    fn min_x(&self) -> Option<f64>;

    fn max_x(&self) -> Option<f64>;
}
