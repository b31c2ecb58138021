//! avfreq: aviation VHF frequency utilities
//!
//! Parses, validates and formats airband radio frequencies, converts between
//! the Hz, X-Plane kHz and network representations, and renders UTC
//! timestamps for message logs.
//!
//! ```
//! use avfreq::{frequency, network, Frequency};
//!
//! let khz = frequency::frequency_to_xplane("122.8").unwrap();
//! assert_eq!(khz, 122_800);
//! assert_eq!(network::to_network(Frequency::khz(khz as u32)).unwrap(), 22_800);
//! assert_eq!(network::from_network_format(22_800), "122.800");
//! ```
pub mod core;
pub mod frequency;
pub mod network;
pub mod time;

// Re-export commonly used items
pub use self::core::{BandPlan, Error, Frequency, Result, Unit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
