pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod calculuserror;
    pub mod curve {
        pub mod curve;
        pub mod boundedcurve;
        pub mod polynomial;
        pub mod piecewisepolynomial;
        pub mod curvemanager;
    }
}

pub mod wing {
    pub mod wingerror;
    pub mod wingparameters;
    pub mod winggeometry;
    pub mod ribload;
}
