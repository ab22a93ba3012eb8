//! Concussion-monitor entry point.
//!
//! Wires the serial BNO055 and the GPIO indicator panel into the
//! monitoring loop and runs it at the fixed sample rate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use hardware::gpio::{BuzzerOutput, PushButton, RgbLed, DEFAULT_GPIO_CHIP};
use hardware::imu::UartImu;
use hardware::signals;
use sentinel::config::DEFAULT_LOG_FILE;
use sentinel::{Monitor, MonitorConfig, Panel};

#[derive(Parser, Debug)]
#[command(name = "monitor")]
#[command(about = "Concussion-detection monitoring loop")]
struct Args {
    /// Serial port of the BNO055 in UART mode
    #[arg(long, default_value = "/dev/serial0")]
    serial: String,

    /// GPIO chip the panel is wired to
    #[arg(long, default_value = DEFAULT_GPIO_CHIP)]
    chip: String,

    /// Red LED line offset
    #[arg(long, default_value = "10")]
    red_line: u32,

    /// Green LED line offset
    #[arg(long, default_value = "9")]
    green_line: u32,

    /// Blue LED line offset
    #[arg(long, default_value = "11")]
    blue_line: u32,

    /// Buzzer line offset
    #[arg(long, default_value = "17")]
    buzzer_line: u32,

    /// Arming button line offset
    #[arg(long, default_value = "14")]
    button_line: u32,

    /// Notification log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Number of ticks to run before exiting (0 = run until Ctrl+C)
    #[arg(long, default_value = "0")]
    ticks: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let sensor = UartImu::open(&args.serial)?;
    let led = RgbLed::new(&args.chip, args.red_line, args.green_line, args.blue_line)?;
    let buzzer = BuzzerOutput::new(&args.chip, args.buzzer_line)?;
    let button = PushButton::new(&args.chip, args.button_line)?;

    let config = MonitorConfig {
        log_path: args.log_file.clone(),
        ..MonitorConfig::default()
    };
    info!("Notification log: {}", args.log_file.display());

    let mut monitor = Monitor::new(
        config,
        Box::new(sensor),
        Panel {
            led: Box::new(led),
            buzzer: Box::new(buzzer),
            button: Box::new(button),
        },
    )?;

    let shutdown = signals::shutdown_flag()?;
    monitor.run(&shutdown, args.ticks)?;
    info!("Shut down complete");
    Ok(())
}
