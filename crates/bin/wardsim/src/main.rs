//! # wardsim — hospital simulation demo
//!
//! Composition root that wires all adapters together and runs one pass:
//! - Build the file-backed event log and the coordinator
//! - Run the three electromagnetic sources for a random duration
//! - Sweep the medical devices for interference susceptibility
//! - Simulate time inside the isolation room
//! - Print the usage report
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use rand::Rng;

use wardsim_adapter_file_log::FileEventLog;
use wardsim_app::ports::SystemClock;
use wardsim_app::services::hospital::Hospital;
use wardsim_domain::device::Device;
use wardsim_domain::log::SharedLog;
use wardsim_domain::source::EmfSource;

const DEVICE_NAMES: [&str; 10] = [
    "EKG",
    "CT scanner",
    "Infusion pump",
    "Defibrillator",
    "X-ray machine",
    "Ultrasound",
    "Lab analyzer",
    "Vital signs monitor",
    "Anesthesia machine",
    "EKG Holter monitor",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let log_path = std::env::var("WARDSIM_LOG").unwrap_or_else(|_| "log.txt".to_string());
    let log = Arc::new(FileEventLog::new(log_path)) as SharedLog;
    let mut hospital = Hospital::new(log, SystemClock);
    let mut rng = rand::thread_rng();

    // Electromagnetic sources in use for a random stretch of time.
    let mut wifi = EmfSource::new("WiFi router", Some(hospital.log()));
    let mut phone = EmfSource::new("Mobile phone", Some(hospital.log()));
    let mut computer = EmfSource::new("Computer", Some(hospital.log()));

    let duration: i64 = rng.gen_range(1..=10);
    wifi.while_on(|_| {
        phone.while_on(|_| computer.while_on(|_| hospital.simulate_time(duration)))
    })?;

    wifi.record_usage(duration)?;
    phone.record_usage(duration + 2)?;
    computer.record_usage(duration + 4)?;

    hospital.register_source(wifi);
    hospital.register_source(phone);
    hospital.register_source(computer);

    // Interference sweep over the ward's equipment.
    for name in DEVICE_NAMES {
        let mut device = Device::new(name, Some(hospital.log()));
        device.powered(|device| {
            if device.check_interference(&mut rng) {
                println!(
                    "Warning: {} is sensitive to electromagnetic interference.",
                    device.name
                );
            }
            Ok(())
        })?;
        hospital.register_device(device);
    }

    hospital.simulate_time_in_isolated_room(5)?;

    for line in hospital.usage_report() {
        println!("{line}");
    }

    Ok(())
}
