//! Frequency validation, normalization and formatting
//!
//! Frequencies move through three representations:
//!
//! - display strings such as `"118.025"` (MHz, as typed and shown)
//! - integer Hz, validated against a [`BandPlan`]
//! - integer kHz, the X-Plane dataref convention
//!
//! Radios that only display five digits show 25 kHz channels such as
//! 118.025 as `118.02`. Those `20`/`70` endings are folded back onto the
//! real `25`/`75` channel before validation.
//!
//! # Examples
//!
//! ```
//! use avfreq::frequency::{frequency_to_int, print_frequency};
//!
//! let hz = frequency_to_int(" 118.02 ").unwrap();
//! assert_eq!(hz, 118_025_000);
//! assert_eq!(print_frequency(hz), "118.025");
//! assert_eq!(print_frequency(0), "---.---");
//! ```

use tracing::{debug, trace};

use crate::core::{
    BandPlan, Error, Frequency, Result, CHANNEL_BLOCK_HZ, HZ_PER_KHZ, HZ_PER_MHZ, NO_FREQUENCY,
};

/// Values below this are not Hz-scale airband frequencies and are left alone
const NORMALIZE_FLOOR_HZ: i64 = 100_000_000;

/// Integers below this are already in kHz
const XPLANE_THRESHOLD_HZ: i64 = 1_000_000;

/// Digits in a Hz-scale airband frequency
const HZ_DIGITS: usize = 9;

/// Integer digits expected before the decimal point of a display string
const MHZ_DIGITS: usize = 3;

/// Validates a Hz frequency against the full airband
pub fn check_frequency_valid(hz: i64) -> Result<i64> {
    BandPlan::AIRBAND.check(hz)
}

/// Folds a Hz frequency ending in 20 or 70 kHz onto the 25/75 kHz channel
pub fn normalize_25khz_hz(hz: i64) -> i64 {
    if hz < NORMALIZE_FLOOR_HZ {
        return hz;
    }
    match hz % CHANNEL_BLOCK_HZ {
        20_000 | 70_000 => {
            trace!(hz, "normalizing 25 kHz channel");
            hz + 5_000
        }
        _ => hz,
    }
}

/// Folds a kHz frequency ending in 20 or 70 onto the 25/75 channel
pub fn normalize_25khz_khz(khz: i64) -> i64 {
    match khz.rem_euclid(100) {
        20 | 70 => {
            trace!(khz, "normalizing 25 kHz channel");
            khz + 5
        }
        _ => khz,
    }
}

/// Normalizes an MHz display string such as `"118.02"` to `"118.025"`
///
/// Strings with fewer than three integer digits, or no decimal point at
/// all, are returned unchanged. Sub-kHz precision, when present, is kept
/// in the output.
pub fn normalize_25khz_display(text: &str) -> Result<String> {
    let text = text.trim();
    match text.find('.') {
        Some(dot) if dot >= MHZ_DIGITS => {}
        _ => return Ok(text.to_string()),
    }

    let digits = text.replacen('.', "", 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!(text, "display frequency is not numeric");
        return Err(Error::parse(format!("Not a frequency: {:?}", text)));
    }
    if digits.len() > HZ_DIGITS {
        return Err(Error::parse(format!("Too many digits in frequency: {:?}", text)));
    }

    let scale = 10_i64.pow((HZ_DIGITS - digits.len()) as u32);
    let hz = digits
        .parse::<i64>()
        .map_err(|e| Error::parse(format!("Not a frequency: {:?}: {}", text, e)))?
        * scale;
    let hz = normalize_25khz_hz(hz);

    let mut out = if hz % HZ_PER_KHZ == 0 {
        format!("{:06}", hz / HZ_PER_KHZ)
    } else {
        format!("{:09}", hz)
    };
    out.insert(MHZ_DIGITS, '.');
    Ok(out)
}

/// Parses an MHz string into Hz, rounding to the nearest Hz
pub fn parse_mhz(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let mhz: f64 = trimmed.parse().map_err(|e| {
        debug!(text, "unparseable frequency");
        Error::parse(format!("Not a frequency: {:?}: {}", trimmed, e))
    })?;
    if !mhz.is_finite() {
        return Err(Error::parse(format!("Not a frequency: {:?}", trimmed)));
    }
    Ok((mhz * HZ_PER_MHZ as f64).round() as i64)
}

/// Parses, normalizes and validates a display string against `plan`
pub fn parse_frequency(text: &str, plan: &BandPlan) -> Result<Frequency> {
    let hz = plan.normalize(parse_mhz(text)?)?;
    let hz = u32::try_from(hz)
        .map_err(|_| Error::InvalidRange { hz, min: plan.min_hz, max: plan.max_hz })?;
    Ok(Frequency::hz(hz))
}

/// Converts user text such as `" 118.025 "` to Hz on the full airband
pub fn frequency_to_int(text: &str) -> Result<i64> {
    parse_frequency(text, &BandPlan::AIRBAND).map(|f| i64::from(f.value))
}

/// Converts user text to the X-Plane kHz value on the COM band
pub fn frequency_to_xplane(text: &str) -> Result<i64> {
    parse_frequency(text, &BandPlan::COM).map(|f| i64::from(f.to_khz().value))
}

/// Converts an untagged integer to X-Plane kHz
///
/// Values below 1 MHz are taken to be kHz already. Prefer
/// [`Frequency::to_khz`] when the unit is known.
pub fn to_xplane_format(value: i64) -> i64 {
    if value < XPLANE_THRESHOLD_HZ {
        value
    } else {
        value / HZ_PER_KHZ
    }
}

/// Formats a kHz value as `MHz.kHz`
pub(crate) fn format_khz(khz: i64) -> String {
    format!("{}.{:03}", khz / 1000, khz % 1000)
}

/// Formats Hz as a 3-decimal MHz string, or `---.---` when nothing is tuned
pub fn print_frequency(hz: i64) -> String {
    if hz <= 0 {
        return NO_FREQUENCY.to_string();
    }
    format_khz(hz / HZ_PER_KHZ + i64::from(hz % HZ_PER_KHZ >= HZ_PER_KHZ / 2))
}

/// Formats an X-Plane kHz value, normalizing 25 kHz channels first
pub fn print_xplane_frequency(khz: i64) -> String {
    if khz <= 0 {
        return NO_FREQUENCY.to_string();
    }
    format_khz(normalize_25khz_khz(khz))
}
