//! Interactive fixture test menu.
//!
//! Mirrors the checks a technician runs when bringing a new light onto the
//! network: power toggles, brightness and temperature sweeps, and a short
//! scripted sequence. The fixture never answers, so "success" here means
//! the datagrams left this machine.

use std::io::Write as _;
use std::net::Ipv4Addr;
use std::time::Duration;

use anyhow::{Context, Result};
use glowlink_control::{gl1, UdpSession};
use glowlink_core::units;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Brightness used when only the temperature is being tested, and vice
/// versa (device scale).
const NEUTRAL_LEVEL: u8 = 50;

/// Connect to the fixture and drive the menu until quit or Ctrl-C.
pub async fn run(name: &str, host: Ipv4Addr, port: u16) -> Result<()> {
    println!("GlowLink fixture test tool");
    println!("==========================");
    println!("Target: {name} ({host}:{port})");
    println!();
    println!("Make sure the light is powered on, on WiFi and reachable from this machine.");

    let mut session = UdpSession::new(host, port);
    session
        .connect()
        .await
        .context("Failed to connect to the fixture")?;
    println!("Connected; heartbeat running.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let result = tokio::select! {
        result = menu_loop(&session, &mut lines) => result,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("Interrupted.");
            Ok(())
        }
    };

    session.disconnect().await;
    println!("Disconnected.");
    result
}

async fn menu_loop(session: &UdpSession, lines: &mut Lines<BufReader<Stdin>>) -> Result<()> {
    loop {
        println!();
        println!("Test menu:");
        println!("  1. Power ON");
        println!("  2. Power OFF");
        println!("  3. Set brightness (0-100)");
        println!("  4. Set color temperature (2900-7000 K)");
        println!("  5. Run test sequence");
        println!("  q. Quit");

        let Some(choice) = prompt(lines, "Select option: ").await? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                report(session.send_command(&gl1::POWER_ON).await, "power on");
            }
            "2" => {
                report(session.send_command(&gl1::POWER_OFF).await, "power off");
            }
            "3" => {
                let Some(input) = prompt(lines, "Enter brightness (0-100): ").await? else {
                    return Ok(());
                };
                match input.parse::<u8>() {
                    Ok(brightness) if brightness <= 100 => {
                        report(
                            session
                                .set_brightness_temperature(brightness, NEUTRAL_LEVEL)
                                .await,
                            "brightness",
                        );
                    }
                    _ => println!("Brightness must be a number between 0 and 100"),
                }
            }
            "4" => {
                let Some(input) = prompt(lines, "Enter color temperature (2900-7000): ").await?
                else {
                    return Ok(());
                };
                match input.parse::<u32>() {
                    Ok(kelvin) if (units::MIN_KELVIN..=units::MAX_KELVIN).contains(&kelvin) => {
                        let temperature = units::kelvin_to_device(kelvin);
                        report(
                            session
                                .set_brightness_temperature(NEUTRAL_LEVEL, temperature)
                                .await,
                            "color temperature",
                        );
                    }
                    _ => println!("Temperature must be between 2900 and 7000 K"),
                }
            }
            "5" => run_sequence(session).await,
            "q" => return Ok(()),
            "" => {}
            _ => println!("Invalid option"),
        }
    }
}

/// Scripted bring-up sequence: on, bright, dim, cold, warm, off.
async fn run_sequence(session: &UdpSession) {
    let pause = Duration::from_secs(2);

    println!("Running test sequence...");

    println!("  power ON");
    report(session.send_command(&gl1::POWER_ON).await, "power on");
    tokio::time::sleep(pause).await;

    println!("  brightness 100%");
    report(
        session.set_brightness_temperature(100, NEUTRAL_LEVEL).await,
        "brightness",
    );
    tokio::time::sleep(pause).await;

    println!("  brightness 50%");
    report(
        session.set_brightness_temperature(50, NEUTRAL_LEVEL).await,
        "brightness",
    );
    tokio::time::sleep(pause).await;

    println!("  cool white (6500 K)");
    report(
        session
            .set_brightness_temperature(NEUTRAL_LEVEL, units::kelvin_to_device(6500))
            .await,
        "color temperature",
    );
    tokio::time::sleep(pause).await;

    println!("  warm white (3000 K)");
    report(
        session
            .set_brightness_temperature(NEUTRAL_LEVEL, units::kelvin_to_device(3000))
            .await,
        "color temperature",
    );
    tokio::time::sleep(pause).await;

    println!("  power OFF");
    report(session.send_command(&gl1::POWER_OFF).await, "power off");

    println!("Test sequence complete.");
}

fn report(result: glowlink_control::Result<()>, what: &str) {
    match result {
        Ok(()) => println!("Sent {what}"),
        Err(e) => println!("Failed to send {what}: {e}"),
    }
}

/// Print `text` without a newline and read one trimmed line; `None` on EOF.
async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;

    Ok(lines
        .next_line()
        .await?
        .map(|line| line.trim().to_lowercase()))
}
