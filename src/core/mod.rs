//! Core types for avfreq
//!
//! This module contains the error type, the unit-tagged frequency value and the
//! band plan shared by the frequency, network and time modules.

pub mod error;
pub mod types;
pub mod serde;

pub use self::error::{Error, Result};
pub use self::types::{is_25khz_channel, BandPlan, Frequency, Unit};

/// Hz per kHz
pub const HZ_PER_KHZ: i64 = 1_000;

/// Hz per MHz
pub const HZ_PER_MHZ: i64 = 1_000_000;

/// Span the channel residues are taken over (100 kHz)
pub const CHANNEL_BLOCK_HZ: i64 = 100_000;

/// Legal residues modulo [`CHANNEL_BLOCK_HZ`] for 25 kHz spacing
pub const LEGAL_RESIDUES_HZ: [i64; 4] = [0, 25_000, 50_000, 75_000];

/// Offset the network removes from kHz frequencies (the leading "1" of 1xx.xxx MHz)
pub const NETWORK_OFFSET_KHZ: u32 = 100_000;

/// Rendered in place of a frequency when nothing is tuned
pub const NO_FREQUENCY: &str = "---.---";
