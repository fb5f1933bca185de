use crate::manager::managererror::ManagerError;
use crate::math::calculuserror::CalculusError;

#[derive(Debug, thiserror::Error)]
pub enum WingError {
    #[error(transparent)]
    Calculus(#[from] CalculusError),

    #[error(transparent)]
    Manager(#[from] ManagerError),

    #[error("configuration has no wing section")]
    MissingWingParameters,

    #[error("leading and trailing edges have no pieces")]
    EmptyWing,

    #[error("leading and trailing edges differ at piece {index}")]
    MismatchedDomains {
        index: usize
    },

    #[error("leading and trailing edges use different scale factors")]
    MismatchedScaleFactors,

    #[error("at least 2 ribs are required, got {0}")]
    TooFewRibs(usize)
}
