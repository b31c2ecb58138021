use avfreq::frequency::{frequency_to_int, frequency_to_xplane, normalize_25khz_display, print_frequency};
use avfreq::network::{from_network_format, transmit_aliases, ComRadio, RadioStack};
use avfreq::time::current_timestamp;
use avfreq::{Error, Frequency};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["118.02".to_string(), "121.5".to_string(), "118.010".to_string(), "140.000".to_string()]
    } else {
        inputs
    };

    println!("[{}] Checking {} frequencies", current_timestamp(), inputs.len());
    for text in &inputs {
        match frequency_to_int(text) {
            Ok(hz) => {
                let display = normalize_25khz_display(text).unwrap_or_else(|_| text.clone());
                println!("- {:>10} -> {} Hz, shown as {} ({})", text, hz, print_frequency(hz), display);
                if let Ok(khz) = frequency_to_xplane(text) {
                    let aliases = transmit_aliases(Frequency::khz(khz as u32)).unwrap_or_default();
                    println!("  X-Plane {} kHz, network {:?}", khz, aliases);
                }
            }
            Err(e @ Error::InvalidSpacing { .. }) => println!("- {:>10} -> rejected: {}", text, e),
            Err(e) => println!("- {:>10} -> error: {}", text, e),
        }
    }

    let stack = RadioStack {
        com1: ComRadio {
            transmit_enabled: true,
            ..ComRadio::new(Frequency::khz(118_025))
        },
        com2: ComRadio::new(Frequency::khz(121_500)),
    };
    let incoming = [18_020, 21_500, 33_000];
    println!("\nRadio stack receives:");
    for value in stack.receiving_frequencies(&incoming) {
        println!("  {} ({})", value, from_network_format(i64::from(value)));
    }
}
