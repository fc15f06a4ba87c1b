//! Geometrized unit systems scaled to a reference mass and length.
//!
//! Simulation codes evolve dimensionless quantities in units where
//! `G = c = 1`; converting those to physical CGS values requires a mass
//! unit and a length unit. The length unit either is supplied directly or
//! follows from a black hole mass as the gravitational radius `G M / c^2`.

use serde::{Deserialize, Serialize};

use crate::constant::{CL, GNEWT, MEV, MP, MSOLAR};
use crate::error::{UnitsError, UnitsResult};

/// Determines the length unit of a [`UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LengthScale {
    /// Gravitational radius of a black hole of the given mass in solar masses.
    BlackHoleMass(f64),
    /// Explicit length unit in cm, used verbatim.
    Length(f64),
}

impl LengthScale {
    /// Resolves the optional-parameter convention used by setup scripts.
    ///
    /// The black hole mass is checked first, so it takes precedence when
    /// both parameters are supplied. With neither there is no way to fix a
    /// length scale and the call fails with
    /// [`UnitsError::InvalidConfiguration`].
    pub fn from_options(
        length_unit: Option<f64>,
        black_hole_mass: Option<f64>,
    ) -> UnitsResult<Self> {
        match (black_hole_mass, length_unit) {
            (Some(solar_masses), _) => Ok(LengthScale::BlackHoleMass(solar_masses)),
            (None, Some(cm)) => Ok(LengthScale::Length(cm)),
            (None, None) => Err(UnitsError::InvalidConfiguration),
        }
    }

    /// The length unit in cm implied by this scale.
    fn length_cm(&self) -> f64 {
        match *self {
            LengthScale::BlackHoleMass(solar_masses) => {
                let mbh = solar_masses * MSOLAR;
                GNEWT * mbh / (CL * CL)
            }
            LengthScale::Length(cm) => cm,
        }
    }
}

/// An immutable set of unit scales relating code units to CGS.
///
/// Constructed once per simulation setup; changing any parameter requires
/// constructing a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSystem {
    m: f64,
    l: f64,
    rho: f64,
    u: f64,
    t: f64,
}

impl UnitSystem {
    /// Creates a unit system from a mass unit in grams and a length scale.
    ///
    /// Inputs are not validated beyond the length-scale choice: zero or
    /// non-finite units propagate as NaN/infinity through the derived
    /// scales rather than failing.
    pub fn new(mass_unit: f64, scale: LengthScale) -> Self {
        match scale {
            LengthScale::BlackHoleMass(_) => log::info!("[UnitSystem]: Using black hole mass."),
            LengthScale::Length(_) => log::info!("[UnitSystem]: Using L unit."),
        }
        let m = mass_unit;
        let l = scale.length_cm();
        let rho = m / (l * l * l);
        let u = rho * CL * CL;
        let t = MP * CL * CL / MEV;
        let units = UnitSystem { m, l, rho, u, t };
        log::info!(
            "[UnitSystem]: Units are:\n\tM   = {}\n\tL   = {}\n\tRHO = {}\n\tU   = {}\n\tT   = {}",
            units.m,
            units.l,
            units.rho,
            units.u,
            units.t
        );
        units
    }

    /// Creates a unit system from optional parameters, with the precedence
    /// documented on [`LengthScale::from_options`].
    pub fn from_options(
        mass_unit: f64,
        length_unit: Option<f64>,
        black_hole_mass: Option<f64>,
    ) -> UnitsResult<Self> {
        let scale = LengthScale::from_options(length_unit, black_hole_mass)?;
        Ok(UnitSystem::new(mass_unit, scale))
    }

    /// Mass unit in g.
    pub fn mass_unit(&self) -> f64 {
        self.m
    }

    /// Length unit in cm.
    pub fn length_unit(&self) -> f64 {
        self.l
    }

    /// Density unit in g/cm^3, `M / L^3`.
    pub fn density_unit(&self) -> f64 {
        self.rho
    }

    /// Energy density unit in erg/cm^3, `RHO c^2`.
    pub fn energy_density_unit(&self) -> f64 {
        self.u
    }

    /// Temperature scale in MeV, the proton rest-mass energy `m_p c^2`.
    ///
    /// Depends only on table constants, so it is identical for every
    /// instance regardless of the supplied mass and length units.
    pub fn temperature_unit(&self) -> f64 {
        self.t
    }

    /// Light-crossing time of the length unit, in s.
    pub fn time_unit(&self) -> f64 {
        self.l / CL
    }

    pub fn to_cgs_mass(&self, m_code: f64) -> f64 {
        m_code * self.m
    }

    pub fn to_code_mass(&self, m_cgs: f64) -> f64 {
        m_cgs / self.m
    }

    pub fn to_cgs_length(&self, l_code: f64) -> f64 {
        l_code * self.l
    }

    pub fn to_code_length(&self, l_cgs: f64) -> f64 {
        l_cgs / self.l
    }

    pub fn to_cgs_density(&self, rho_code: f64) -> f64 {
        rho_code * self.rho
    }

    pub fn to_code_density(&self, rho_cgs: f64) -> f64 {
        rho_cgs / self.rho
    }

    pub fn to_cgs_energy_density(&self, u_code: f64) -> f64 {
        u_code * self.u
    }

    pub fn to_code_energy_density(&self, u_cgs: f64) -> f64 {
        u_cgs / self.u
    }
}

#[cfg(test)]
pub mod tests {

    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_missing_length_scale_is_an_error() {
        init_logging();
        let result = UnitSystem::from_options(1.0, None, None);
        assert_eq!(result, Err(UnitsError::InvalidConfiguration));
    }

    #[test]
    fn test_black_hole_mass_scale() {
        init_logging();
        let units = UnitSystem::from_options(1.0, None, Some(10.0)).expect("valid configuration");
        let l = GNEWT * (10.0 * MSOLAR) / (CL * CL);
        assert_eq!(units.length_unit(), l);
        assert_eq!(units.mass_unit(), 1.0);
        assert_eq!(units.density_unit(), 1.0 / (l * l * l));
        assert_eq!(units.energy_density_unit(), units.density_unit() * CL * CL);
        assert_eq!(units.temperature_unit(), MP * CL * CL / MEV);
        // The gravitational radius of a ten solar mass hole is ~14.8 km.
        assert_approx_eq!(units.length_unit(), 1.477e6, 1e4);
    }

    #[test]
    fn test_explicit_length_scale() {
        init_logging();
        let units = UnitSystem::from_options(2.0, Some(5.0), None).expect("valid configuration");
        assert_eq!(units.length_unit(), 5.0);
        assert_eq!(units.density_unit(), 2.0 / 125.0);
        assert_eq!(units.energy_density_unit(), (2.0 / 125.0) * CL * CL);
    }

    #[test]
    fn test_black_hole_mass_takes_precedence() {
        init_logging();
        let units =
            UnitSystem::from_options(1.0, Some(5.0), Some(10.0)).expect("valid configuration");
        let l = GNEWT * (10.0 * MSOLAR) / (CL * CL);
        assert_eq!(units.length_unit(), l);
    }

    #[test]
    fn test_temperature_unit_is_invariant() {
        init_logging();
        let a = UnitSystem::new(1.0, LengthScale::BlackHoleMass(10.0));
        let b = UnitSystem::new(2.0, LengthScale::Length(5.0));
        let c = UnitSystem::new(1.0e20, LengthScale::Length(1.0e-3));
        assert_eq!(a.temperature_unit(), b.temperature_unit());
        assert_eq!(b.temperature_unit(), c.temperature_unit());
        // Proton rest-mass energy, ~938 MeV.
        assert_approx_eq!(a.temperature_unit(), 938.3, 0.1);
    }

    #[test]
    fn test_time_unit() {
        init_logging();
        let units = UnitSystem::new(1.0, LengthScale::Length(5.0));
        assert_eq!(units.time_unit(), 5.0 / CL);
    }

    #[test]
    fn test_conversions_round_trip() {
        init_logging();
        let units = UnitSystem::new(3.0, LengthScale::BlackHoleMass(1.0));
        assert_approx_eq!(
            units.to_code_density(units.to_cgs_density(0.7)),
            0.7,
            1e-12
        );
        assert_approx_eq!(
            units.to_code_energy_density(units.to_cgs_energy_density(1.3)),
            1.3,
            1e-12
        );
        assert_eq!(units.to_cgs_mass(2.0), 6.0);
        assert_eq!(units.to_cgs_length(1.0), units.length_unit());
    }

    #[test]
    fn test_degenerate_inputs_propagate() {
        init_logging();
        let units = UnitSystem::new(1.0, LengthScale::Length(0.0));
        assert!(units.density_unit().is_infinite());
        assert!(units.energy_density_unit().is_infinite());
    }

    #[test]
    fn test_serde_round_trip() {
        init_logging();
        let units = UnitSystem::new(2.0, LengthScale::Length(5.0));
        let json = serde_json::to_string(&units).expect("serializable");
        let recovered: UnitSystem = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(units, recovered);
    }
}
