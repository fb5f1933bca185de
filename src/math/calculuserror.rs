/// Failures raised by the polynomial and piecewise polynomial evaluators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculusError {
    /// The coefficient sequence is empty.
    #[error("no polynomial is set")]
    EmptyPolynomial,

    /// A token of a coefficient string is not a real-number literal.
    #[error("'{0}' is not a valid real-number literal")]
    InvalidLiteral(String),

    /// An integration bound is not covered by any piece.
    #[error("{0} lies outside every domain of the piecewise polynomial")]
    OutOfDomain(f64),

    #[error("integration bound is not a number")]
    NotANumberBound,
}

pub type CalculusResult<T> = Result<T, CalculusError>;
