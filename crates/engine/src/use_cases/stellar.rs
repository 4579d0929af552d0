//! Stellar property resolver.

use starsmith_domain::tables::stellar_property;
use starsmith_domain::{SpectralClass, SpectralGrade, StellarProperty, StellarZones, ZoneScaling};

use super::GenerationError;

/// Mass, luminosity and temperature of a main-sequence star.
pub fn resolve(
    class: SpectralClass,
    grade: SpectralGrade,
) -> Result<StellarProperty, GenerationError> {
    Ok(stellar_property(class, grade)?)
}

/// Like [`resolve`], for unvalidated input. Errors name `class` or `grade`.
pub fn resolve_raw(class: &str, grade: i64) -> Result<StellarProperty, GenerationError> {
    let class: SpectralClass = class.parse()?;
    let grade = SpectralGrade::new(grade)?;
    resolve(class, grade)
}

/// Zone boundaries around a star of the given luminosity.
pub fn zones(luminosity: f64, scaling: &ZoneScaling) -> Result<StellarZones, GenerationError> {
    Ok(scaling.zones_for(luminosity)?)
}
