//! Physical constants in CGS and geometrized unit systems for
//! astrophysical simulation codes.

pub mod constant;
pub mod error;
pub mod units;

pub use constant::cgs;
pub use error::{UnitsError, UnitsResult};
pub use units::{LengthScale, UnitSystem};
