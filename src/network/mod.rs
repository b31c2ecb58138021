//! Network frequency format
//!
//! The network carries COM frequencies as kHz with the leading "1" of the
//! MHz value dropped, so 122.800 MHz travels as `22800`. Peers may also send
//! the five-digit display form of a 25 kHz channel (`22820` for 122.825), so
//! both sides are normalized before comparing.

mod radio;

pub use self::radio::{ComRadio, RadioStack};

use tracing::trace;

use crate::core::{Error, Frequency, Result, NETWORK_OFFSET_KHZ, NO_FREQUENCY};
use crate::frequency::{format_khz, normalize_25khz_khz};

/// Recovers the kHz frequency of a network value
pub fn from_network(value: u32) -> Result<Frequency> {
    if value >= NETWORK_OFFSET_KHZ {
        return Err(Error::network_format(format!(
            "Network frequency {} has more than five digits",
            value
        )));
    }
    Ok(Frequency::khz(value + NETWORK_OFFSET_KHZ))
}

/// Formats a network value for display, normalizing 25 kHz channels first
pub fn from_network_format(value: i64) -> String {
    match value.checked_add(i64::from(NETWORK_OFFSET_KHZ)) {
        Some(khz) if khz > 0 => format_khz(normalize_25khz_khz(khz)),
        _ => NO_FREQUENCY.to_string(),
    }
}

/// Compresses a frequency into network format
///
/// Only 100.000 to 199.999 MHz can be expressed.
pub fn to_network(frequency: Frequency) -> Result<u32> {
    let khz = frequency.to_khz().value;
    khz.checked_sub(NETWORK_OFFSET_KHZ)
        .filter(|net| *net < NETWORK_OFFSET_KHZ)
        .ok_or_else(|| {
            Error::network_format(format!("{} MHz cannot be sent over the network", frequency))
        })
}

/// Maps a 25/75 kHz channel back onto its 20/70 display form
pub fn denormalize_25khz_khz(khz: i64) -> i64 {
    match khz.rem_euclid(100) {
        25 | 75 => khz - 5,
        _ => khz,
    }
}

/// Network values a transmission on `frequency` is announced under
///
/// Both the 25 kHz channel and its five-digit display form are listed so
/// that peers using either convention hear the transmission.
pub fn transmit_aliases(frequency: Frequency) -> Result<Vec<u32>> {
    let net = i64::from(to_network(frequency)?);
    let mut aliases = vec![normalize_25khz_khz(net) as u32];
    let display = denormalize_25khz_khz(net) as u32;
    if !aliases.contains(&display) {
        aliases.push(display);
    }
    Ok(aliases)
}

/// Whether a network value addresses the radio tuned to `tuned`
pub fn matches_tuned(value: u32, tuned: Frequency) -> bool {
    let incoming = normalize_25khz_khz(i64::from(value)) + i64::from(NETWORK_OFFSET_KHZ);
    let tuned = normalize_25khz_khz(i64::from(tuned.to_khz().value));
    let matched = incoming == tuned;
    trace!(value, tuned, matched, "network frequency match");
    matched
}
