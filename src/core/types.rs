use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{Error, Result};
use super::{CHANNEL_BLOCK_HZ, HZ_PER_KHZ, LEGAL_RESIDUES_HZ};

/// Unit a [`Frequency`] value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Hertz, as entered by the user and validated
    Hz,
    /// Kilohertz, as used by X-Plane and the network
    KHz,
}

/// A frequency value tagged with its unit
///
/// Equality and hashing compare the physical frequency, so `118025 kHz`
/// equals `118025000 Hz`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Frequency {
    /// Raw value in `unit`
    pub value: u32,
    /// Unit of `value`
    pub unit: Unit,
}

impl Frequency {
    /// Creates a frequency in Hz
    pub const fn hz(value: u32) -> Self {
        Frequency { value, unit: Unit::Hz }
    }

    /// Creates a frequency in kHz
    pub const fn khz(value: u32) -> Self {
        Frequency { value, unit: Unit::KHz }
    }

    /// Value in Hz
    pub fn as_hz(&self) -> u64 {
        match self.unit {
            Unit::Hz => u64::from(self.value),
            Unit::KHz => u64::from(self.value) * HZ_PER_KHZ as u64,
        }
    }

    /// Converts to Hz
    ///
    /// Fails when the result does not fit the value type.
    pub fn to_hz(&self) -> Result<Self> {
        match self.unit {
            Unit::Hz => Ok(*self),
            Unit::KHz => self
                .value
                .checked_mul(HZ_PER_KHZ as u32)
                .map(Frequency::hz)
                .ok_or_else(|| Error::parse(format!("{} kHz does not fit in Hz", self.value))),
        }
    }

    /// Converts to kHz (X-Plane format), rounding to the nearest kHz
    pub fn to_khz(&self) -> Self {
        match self.unit {
            Unit::Hz => Frequency::khz(round_to_khz(u64::from(self.value)) as u32),
            Unit::KHz => *self,
        }
    }

    /// Applies the 25 kHz display-artifact correction in the value's own unit
    pub fn normalized(&self) -> Self {
        match self.unit {
            Unit::Hz => Frequency::hz(crate::frequency::normalize_25khz_hz(i64::from(self.value)) as u32),
            Unit::KHz => Frequency::khz(crate::frequency::normalize_25khz_khz(i64::from(self.value)) as u32),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let khz = round_to_khz(self.as_hz());
        write!(f, "{}.{:03}", khz / 1000, khz % 1000)
    }
}

impl PartialEq for Frequency {
    fn eq(&self, other: &Self) -> bool {
        self.as_hz() == other.as_hz()
    }
}

impl Eq for Frequency {}

impl Hash for Frequency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_hz().hash(state);
    }
}

/// Rounds Hz to the nearest kHz, halves rounding up
fn round_to_khz(hz: u64) -> u64 {
    let step = HZ_PER_KHZ as u64;
    hz / step + u64::from(hz % step >= step / 2)
}

/// Legal tuning range and channel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandPlan {
    /// Lowest legal frequency in Hz (inclusive)
    pub min_hz: i64,
    /// Highest legal frequency in Hz (inclusive)
    pub max_hz: i64,
    /// Reject frequencies off the 25 kHz grid
    #[serde(default = "default_enforce_spacing")]
    pub enforce_spacing: bool,
}

fn default_enforce_spacing() -> bool {
    true
}

impl BandPlan {
    /// Full VHF airband, 108.000 to 136.975 MHz
    pub const AIRBAND: BandPlan = BandPlan {
        min_hz: 108_000_000,
        max_hz: 136_975_000,
        enforce_spacing: true,
    };

    /// VHF communication band, 118.000 to 136.975 MHz
    pub const COM: BandPlan = BandPlan {
        min_hz: 118_000_000,
        max_hz: 136_975_000,
        enforce_spacing: true,
    };

    /// Checks a frequency against this plan, returning it unchanged
    pub fn check(&self, hz: i64) -> Result<i64> {
        if hz < self.min_hz || hz > self.max_hz {
            debug!(hz, min = self.min_hz, max = self.max_hz, "frequency out of range");
            return Err(Error::InvalidRange {
                hz,
                min: self.min_hz,
                max: self.max_hz,
            });
        }
        if self.enforce_spacing && !is_25khz_channel(hz) {
            debug!(hz, "frequency off the 25 kHz grid");
            return Err(Error::InvalidSpacing { hz });
        }
        Ok(hz)
    }

    /// Normalizes a Hz value and validates the result
    pub fn normalize(&self, hz: i64) -> Result<i64> {
        self.check(crate::frequency::normalize_25khz_hz(hz))
    }

    /// Validates the plan itself
    pub fn validate(&self) -> Result<()> {
        if self.min_hz <= 0 {
            return Err(Error::config("Lower band edge must be positive"));
        }
        if self.min_hz > self.max_hz {
            return Err(Error::config(format!(
                "Lower band edge {} above upper edge {}",
                self.min_hz, self.max_hz
            )));
        }
        if self.max_hz > i64::from(u32::MAX) {
            return Err(Error::config("Upper band edge too large"));
        }
        if !is_25khz_channel(self.min_hz) || !is_25khz_channel(self.max_hz) {
            return Err(Error::config("Band edges must lie on the 25 kHz grid"));
        }
        Ok(())
    }
}

impl Default for BandPlan {
    fn default() -> Self {
        BandPlan::AIRBAND
    }
}

/// Whether a Hz value lies on the 25 kHz channel grid
pub fn is_25khz_channel(hz: i64) -> bool {
    LEGAL_RESIDUES_HZ.contains(&hz.rem_euclid(CHANNEL_BLOCK_HZ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        let f = Frequency::hz(118_025_000);
        assert_eq!(f.to_khz(), Frequency::khz(118_025));
        assert_eq!(f.to_khz().to_hz().unwrap(), f);
        assert_eq!(Frequency::khz(118_025).as_hz(), 118_025_000);
        assert_eq!(f.to_khz().unit, Unit::KHz);
    }

    #[test]
    fn test_khz_rounding_matches_display() {
        let f = Frequency::hz(118_024_600);
        assert_eq!(f.to_khz().value, 118_025);
        assert_eq!(f.to_string(), "118.025");

        let f = Frequency::hz(118_024_400);
        assert_eq!(f.to_khz().value, 118_024);
        assert_eq!(f.to_string(), "118.024");

        assert_eq!(Frequency::hz(u32::MAX).to_khz().value, 4_294_967);
    }

    #[test]
    fn test_equality_across_units() {
        use std::collections::HashSet;

        assert_eq!(Frequency::hz(121_500_000), Frequency::khz(121_500));
        assert_ne!(Frequency::hz(121_500_000), Frequency::khz(121_525));

        let set: HashSet<Frequency> = [Frequency::hz(121_500_000), Frequency::khz(121_500)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Frequency::hz(118_025_000).to_string(), "118.025");
        assert_eq!(Frequency::khz(121_500).to_string(), "121.500");
    }

    #[test]
    fn test_normalized_keeps_unit() {
        assert_eq!(Frequency::hz(118_020_000).normalized(), Frequency::hz(118_025_000));
        assert_eq!(Frequency::khz(118_070).normalized(), Frequency::khz(118_075));
        assert_eq!(Frequency::khz(118_050).normalized(), Frequency::khz(118_050));
        assert_eq!(Frequency::khz(118_070).normalized().unit, Unit::KHz);
        assert_eq!(Frequency::hz(118_020_000).normalized().unit, Unit::Hz);
    }

    #[test]
    fn test_plan_bounds() {
        let plan = BandPlan::COM;
        assert_eq!(plan.check(118_000_000).unwrap(), 118_000_000);
        assert!(matches!(plan.check(117_975_000), Err(Error::InvalidRange { .. })));
        assert_eq!(BandPlan::AIRBAND.check(108_000_000).unwrap(), 108_000_000);
    }

    #[test]
    fn test_plan_spacing_toggle() {
        let lax = BandPlan { enforce_spacing: false, ..BandPlan::COM };
        assert_eq!(lax.check(118_010_000).unwrap(), 118_010_000);
        assert!(matches!(
            BandPlan::COM.check(118_010_000),
            Err(Error::InvalidSpacing { hz: 118_010_000 })
        ));
    }

    #[test]
    fn test_plan_validation() {
        assert!(BandPlan::default().validate().is_ok());
        assert!(BandPlan::COM.validate().is_ok());

        let inverted = BandPlan { min_hz: 136_975_000, max_hz: 118_000_000, enforce_spacing: true };
        assert!(matches!(inverted.validate(), Err(Error::Config(_))));

        let off_grid = BandPlan { min_hz: 118_010_000, ..BandPlan::COM };
        assert!(off_grid.validate().is_err());
    }

    #[test]
    fn test_plan_from_json() {
        let plan: BandPlan =
            serde_json::from_str(r#"{"min_hz":118000000,"max_hz":136975000}"#).unwrap();
        assert_eq!(plan, BandPlan::COM);

        let plan: BandPlan = serde_json::from_str(
            r#"{"min_hz":108000000,"max_hz":117975000,"enforce_spacing":false}"#,
        )
        .unwrap();
        assert!(plan.validate().is_ok());
        assert_eq!(plan.check(110_010_000).unwrap(), 110_010_000);
    }
}
