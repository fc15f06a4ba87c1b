use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    #[error("invalid configuration: either a length unit or a black hole mass must be supplied")]
    InvalidConfiguration,
}

pub type UnitsResult<T> = Result<T, UnitsError>;
