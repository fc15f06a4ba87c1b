//! Fundamental and astrophysical constants in CGS units.
//!
//! Every constant is exposed as a `pub const` for direct use, and the full
//! table is also available by name through [`cgs`] for callers that index
//! constants with string keys (analysis scripts, config-driven setups).

use hashbrown::HashMap;
use lazy_static::lazy_static;

/// Mathematical constant pi
pub const PI: f64 = std::f64::consts::PI;

/// Kilometer in cm
pub const KM: f64 = 1.0e5;

/// Speed of light in cm/s
pub const CL: f64 = 2.99792458e10;

/// Electron charge in esu
pub const QE: f64 = 4.80320680e-10;

/// Electron mass in g
pub const ME: f64 = 9.1093826e-28;

/// Proton mass in g
pub const MP: f64 = 1.67262171e-24;

/// Neutron mass in g
pub const MN: f64 = 1.67492728e-24;

/// Planck constant in erg s
pub const HPL: f64 = 6.6260693e-27;

/// Reduced Planck constant in erg s
pub const HBAR: f64 = 1.0545717e-27;

/// Boltzmann constant in erg/K
pub const KBOL: f64 = 1.3806505e-16;

/// Gravitational constant in cm^3 g^-1 s^-2
pub const GNEWT: f64 = 6.6742e-8;

/// Stefan-Boltzmann constant in erg cm^-2 s^-1 K^-4
pub const SIG: f64 = 5.670400e-5;

/// Radiation constant in erg cm^-3 K^-4
pub const AR: f64 = 7.5657e-15;

/// Thomson cross-section in cm^2
pub const THOMSON: f64 = 0.665245873e-24;

/// Jansky in erg cm^-2 s^-1 Hz^-1
pub const JY: f64 = 1.0e-23;

/// Parsec in cm
pub const PC: f64 = 3.085678e18;

/// Astronomical unit in cm
pub const AU: f64 = 1.49597870691e13;

/// Solar mass in g
pub const MSOLAR: f64 = 1.989e33;

/// Solar radius in cm
pub const RSOLAR: f64 = 6.96e10;

/// Solar luminosity in erg/s
pub const LSOLAR: f64 = 3.827e33;

/// Electron-volt in erg
pub const EV: f64 = 1.60217653e-12;

/// Mega-electron-volt in erg
pub const MEV: f64 = 1.0e6 * EV;

/// Giga-electron-volt in erg
pub const GEV: f64 = 1.0e9 * EV;

/// One kelvin as an energy in erg, at the precision used for neutrino rates
pub const K: f64 = 1.380648780669e-16;

/// Giga-kelvin in erg
pub const GK: f64 = 1.0e9 * K;

/// Fermi coupling constant in erg cm^3
pub const GFERM: f64 = 1.435850814907447e-49;

/// Axial-vector coupling constant
pub const GA: f64 = -1.272323;

/// Sine squared of the weak mixing angle
pub const S2THW: f64 = 0.222321;

/// Fine-structure constant
pub const ALPHAFS: f64 = 1.0 / 137.0;

/// Neutrino cross-section normalization in cm^2,
/// `4 Gf^2 (me c^2)^2 / (pi (hbar c)^4)`.
pub const NUSIGMA0: f64 = 4.0 * (GFERM * GFERM) * ((ME * CL * CL) * (ME * CL * CL))
    / (PI * ((HBAR * CL) * (HBAR * CL) * (HBAR * CL) * (HBAR * CL)));

lazy_static! {
    static ref CGS: HashMap<&'static str, f64> = {
        let mut table = HashMap::new();
        table.insert("KM", KM);
        table.insert("CL", CL);
        table.insert("QE", QE);
        table.insert("ME", ME);
        table.insert("MP", MP);
        table.insert("MN", MN);
        table.insert("HPL", HPL);
        table.insert("HBAR", HBAR);
        table.insert("KBOL", KBOL);
        table.insert("GNEWT", GNEWT);
        table.insert("SIG", SIG);
        table.insert("AR", AR);
        table.insert("THOMSON", THOMSON);
        table.insert("JY", JY);
        table.insert("PC", PC);
        table.insert("AU", AU);
        table.insert("MSOLAR", MSOLAR);
        table.insert("RSOLAR", RSOLAR);
        table.insert("LSOLAR", LSOLAR);
        table.insert("EV", EV);
        table.insert("MEV", MEV);
        table.insert("GEV", GEV);
        table.insert("K", K);
        table.insert("GK", GK);
        table.insert("GFERM", GFERM);
        table.insert("GA", GA);
        table.insert("S2THW", S2THW);
        table.insert("ALPHAFS", ALPHAFS);
        table.insert("NUSIGMA0", NUSIGMA0);
        table
    };
}

/// Returns the complete constant table, keyed by constant name.
///
/// The table is built on first access and never mutated afterwards; the
/// returned reference is safe to share across threads.
pub fn cgs() -> &'static HashMap<&'static str, f64> {
    &CGS
}
