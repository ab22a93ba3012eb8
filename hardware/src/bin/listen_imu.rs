//! Streams BNO055 motion samples for wiring bring-up.
//!
//! Polls the sensor's gyroscope and linear-acceleration channels at
//! the monitoring rate, printing per-sample values at debug level and
//! periodic rate/fault statistics at info level. Useful for checking
//! a freshly wired sensor before trusting the monitor with it.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

use hardware::imu::UartImu;
use sentinel::config::SAMPLE_INTERVAL_S;
use shared::imu::{AxisTriple, OrientationSensor};

#[derive(Parser, Debug)]
#[command(name = "listen_imu")]
#[command(about = "BNO055 sample receiver and validator")]
struct Args {
    /// Serial port of the BNO055 in UART mode
    #[arg(long, default_value = "/dev/serial0")]
    serial: String,

    /// Number of samples to receive before exiting (0 = infinite)
    #[arg(short, long, default_value = "0")]
    count: u64,

    /// Report statistics every N samples
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    report_interval: u64,
}

/// Statistics tracker
struct Statistics {
    total_samples: u64,
    gyro_faults: u64,
    linear_faults: u64,
    peak_gyro_dps: f64,
    peak_linear_m_s2: f64,
    start_time: Instant,
    last_report_time: Instant,
    last_report_count: u64,
}

impl Statistics {
    fn new() -> Self {
        let now = Instant::now();
        Self {
            total_samples: 0,
            gyro_faults: 0,
            linear_faults: 0,
            peak_gyro_dps: 0.0,
            peak_linear_m_s2: 0.0,
            start_time: now,
            last_report_time: now,
            last_report_count: 0,
        }
    }

    fn record(&mut self, gyro: Option<AxisTriple>, linear: Option<AxisTriple>) {
        self.total_samples += 1;
        match gyro {
            Some(sample) => self.peak_gyro_dps = self.peak_gyro_dps.max(peak_axis(sample)),
            None => self.gyro_faults += 1,
        }
        match linear {
            Some(sample) => self.peak_linear_m_s2 = self.peak_linear_m_s2.max(peak_axis(sample)),
            None => self.linear_faults += 1,
        }
    }

    fn report(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_report_time).as_secs_f64();
        let interval_samples = self.total_samples - self.last_report_count;
        let rate = interval_samples as f64 / elapsed;

        info!(
            "Samples: {} | Rate: {:.1} Hz | Faults: gyro={} linear={} | Peaks: {:.1} deg/s, {:.2} m/s²",
            self.total_samples, rate, self.gyro_faults, self.linear_faults,
            self.peak_gyro_dps, self.peak_linear_m_s2
        );

        self.last_report_time = now;
        self.last_report_count = self.total_samples;
    }

    fn final_report(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        info!("=== Final Statistics ===");
        info!("Total samples: {}", self.total_samples);
        info!("Total time: {elapsed:.1} s");
        info!(
            "Average rate: {:.1} Hz",
            self.total_samples as f64 / elapsed
        );
        info!(
            "Faults: gyro={}, linear={}",
            self.gyro_faults, self.linear_faults
        );
        info!(
            "Peaks: {:.1} deg/s, {:.2} m/s²",
            self.peak_gyro_dps, self.peak_linear_m_s2
        );
    }
}

/// Largest absolute component of a 3-axis sample.
fn peak_axis(sample: AxisTriple) -> f64 {
    sample.0.abs().max(sample.1.abs()).max(sample.2.abs())
}

fn run_receiver(mut imu: UartImu, args: &Args) -> Result<()> {
    info!("Starting IMU sample receiver...");
    info!("Will report statistics every {} samples", args.report_interval);

    let mut stats = Statistics::new();
    let period = Duration::from_secs_f64(SAMPLE_INTERVAL_S);

    loop {
        let gyro = match imu.read_gyroscope() {
            Ok(sample) => {
                debug!(
                    "gyro: ({:.2}, {:.2}, {:.2}) deg/s",
                    sample.0, sample.1, sample.2
                );
                Some(sample)
            }
            Err(e) => {
                warn!("Gyroscope read failed: {e}");
                None
            }
        };
        let linear = match imu.read_linear_acceleration() {
            Ok(sample) => {
                debug!(
                    "linear: ({:.2}, {:.2}, {:.2}) m/s²",
                    sample.0, sample.1, sample.2
                );
                Some(sample)
            }
            Err(e) => {
                warn!("Linear acceleration read failed: {e}");
                None
            }
        };

        stats.record(gyro, linear);

        if stats.total_samples % args.report_interval == 0 {
            stats.report();
        }
        if args.count > 0 && stats.total_samples >= args.count {
            stats.final_report();
            return Ok(());
        }

        thread::sleep(period);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut imu = UartImu::open(&args.serial)?;
    match imu.read_temperature() {
        Ok(temp) => info!("Sensor temperature: {temp:.0} °C"),
        Err(e) => warn!("Temperature read failed: {e}"),
    }

    run_receiver(imu, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_interval_must_be_positive() {
        assert!(Args::try_parse_from(["listen_imu", "--report-interval", "0"]).is_err());

        let args = Args::try_parse_from(["listen_imu", "--report-interval", "1"]).unwrap();
        assert_eq!(args.report_interval, 1);
    }
}
