use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Frequency, Result};
use super::{matches_tuned, transmit_aliases};

/// A single COM radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComRadio {
    /// Tuned frequency
    ///
    /// Serialized as its MHz display string and read back in kHz.
    #[serde(serialize_with = "crate::core::serde::serialize_display")]
    #[serde(deserialize_with = "crate::core::serde::deserialize_display")]
    pub frequency: Frequency,
    /// Audio from this radio is heard
    pub receive_enabled: bool,
    /// Microphone is routed to this radio
    pub transmit_enabled: bool,
}

impl ComRadio {
    /// Creates a radio tuned to `frequency` with receive enabled
    pub fn new(frequency: Frequency) -> Self {
        ComRadio {
            frequency,
            receive_enabled: true,
            transmit_enabled: false,
        }
    }

    /// Whether this radio hears a transmission on network value `value`
    pub fn receives(&self, value: u32) -> bool {
        self.receive_enabled && matches_tuned(value, self.frequency)
    }
}

/// The aircraft's pair of COM radios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStack {
    pub com1: ComRadio,
    pub com2: ComRadio,
}

impl RadioStack {
    /// The radio transmissions go out on, COM1 taking precedence
    pub fn transmitter(&self) -> Option<&ComRadio> {
        if self.com1.transmit_enabled {
            Some(&self.com1)
        } else if self.com2.transmit_enabled {
            Some(&self.com2)
        } else {
            None
        }
    }

    /// Network values to announce transmissions under
    pub fn transmit_frequencies(&self) -> Result<Vec<u32>> {
        match self.transmitter() {
            Some(radio) => transmit_aliases(radio.frequency),
            None => Ok(Vec::new()),
        }
    }

    /// The incoming network values heard by either radio, deduplicated in arrival order
    pub fn receiving_frequencies(&self, incoming: &[u32]) -> Vec<u32> {
        let mut heard = Vec::new();
        for &value in incoming {
            if (self.com1.receives(value) || self.com2.receives(value)) && !heard.contains(&value) {
                heard.push(value);
            }
        }
        if heard.is_empty() && !incoming.is_empty() {
            debug!(?incoming, "no radio tuned to incoming frequencies");
        }
        heard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    fn stack() -> RadioStack {
        RadioStack {
            com1: ComRadio {
                transmit_enabled: true,
                ..ComRadio::new(Frequency::khz(118_025))
            },
            com2: ComRadio::new(Frequency::khz(121_500)),
        }
    }

    #[test]
    fn test_transmit_prefers_com1() {
        let stack = stack();
        assert_eq!(stack.transmit_frequencies().unwrap(), vec![18_025, 18_020]);

        let mut stack = stack;
        stack.com2.transmit_enabled = true;
        assert_eq!(stack.transmitter(), Some(&stack.com1));

        stack.com1.transmit_enabled = false;
        assert_eq!(stack.transmit_frequencies().unwrap(), vec![21_500]);

        stack.com2.transmit_enabled = false;
        assert!(stack.transmit_frequencies().unwrap().is_empty());
    }

    #[test]
    fn test_receiving_frequencies() {
        let stack = stack();
        let heard = stack.receiving_frequencies(&[18_020, 21_500, 18_020, 33_000, 18_025]);
        assert_eq!(heard, vec![18_020, 21_500, 18_025]);
    }

    #[test]
    fn test_receive_disabled() {
        let mut stack = stack();
        stack.com2.receive_enabled = false;
        assert!(stack.receiving_frequencies(&[21_500]).is_empty());
    }

    #[test]
    fn test_serialization() {
        let stack = stack();
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(json["com1"]["frequency"], "118.025");
        assert_eq!(json["com2"]["receive_enabled"], true);

        let back: RadioStack = serde_json::from_value(json).unwrap();
        assert_eq!(back, stack);
    }

    #[test]
    fn test_hz_radio_round_trip() {
        let radio = ComRadio::new(Frequency::hz(121_500_000));
        let json = serde_json::to_string(&radio).unwrap();
        let back: ComRadio = serde_json::from_str(&json).unwrap();
        assert_eq!(back, radio);
        assert_eq!(back.frequency.unit, crate::core::Unit::KHz);
        assert_eq!(back.frequency.value, 121_500);
    }
}
