//! MX2 Modbus Demo
//!
//! Talks to a real drive over RS-485: loopback test, status and frequency
//! reads, and the fault monitor history.
//!
//! Usage: cargo run --bin mx2_demo --features rtu [serial_port]
//! Example: cargo run --bin mx2_demo --features rtu /dev/ttyUSB0

use mx2_modbus::{catalog, EngineConfig, FaultMonitorField, Mx2Engine, RtuTransport};
use tokio_serial::{Parity, StopBits};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());

    println!("MX2 Modbus Demo");
    println!("===============");
    println!("port: {port}\n");

    let link = RtuTransport::open(&port, 9600, Parity::None, StopBits::One)?;
    let mut mx = Mx2Engine::new(link, EngineConfig::new().with_device_id(1))?;

    print!("loopback test... ");
    mx.loopback_test().await?;
    println!("ok");

    let status = mx
        .read_registers(catalog::modbus::INVERTER_STATUS_A, 3)
        .await?;
    println!("\ninverter status:");
    for value in &status {
        println!("  {value}");
    }

    let frequency = mx
        .read_registers(catalog::monitoring::OUTPUT_FREQUENCY, 1)
        .await?;
    println!("\noutput frequency: {} (0.01 Hz units)", frequency[0].value());

    let running = mx.read_coil_status(catalog::coils::RUNNING, 1).await?;
    println!("{}", running[0]);

    println!("\nfault history (factor per bank):");
    for bank in 1..=6 {
        let factor = mx.read_fault_monitor(bank, FaultMonitorField::Factor).await?;
        println!("  bank {bank}: {factor}");
    }

    Ok(())
}
