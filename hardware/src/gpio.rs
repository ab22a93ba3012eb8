//! GPIO-backed indicator panel peripherals.
//!
//! Lines are requested through the character-device interface at
//! construction time, so wiring mistakes surface at startup rather
//! than mid-run.

use anyhow::{Context, Result};
use gpiod::{Chip, Input, Lines, Options, Output};
use shared::panel::{AlarmBuzzer, ArmingButton, LedColor, PanelError, PanelResult, StatusLed};

/// Default GPIO chip on the deployment target.
pub const DEFAULT_GPIO_CHIP: &str = "gpiochip0";

/// RGB status LED driven over three output lines.
pub struct RgbLed {
    lines: Lines<Output>,
    color: LedColor,
}

impl RgbLed {
    /// Requests the red, green, and blue line offsets as outputs,
    /// initially all off.
    pub fn new(chip_name: &str, red: u32, green: u32, blue: u32) -> Result<Self> {
        let chip = Chip::new(chip_name)
            .with_context(|| format!("Failed to open GPIO chip '{chip_name}'"))?;

        let options = Options::output([red, green, blue])
            .values([false, false, false])
            .consumer("status-led");
        let lines = chip
            .request_lines(options)
            .context("Failed to request status LED lines as outputs")?;

        Ok(Self {
            lines,
            color: LedColor::Off,
        })
    }
}

impl StatusLed for RgbLed {
    fn set_color(&mut self, color: LedColor) -> PanelResult<()> {
        let (red, green, blue) = color.channels();
        self.lines
            .set_values([red, green, blue])
            .map_err(|e| PanelError::Gpio(format!("status LED update failed: {e}")))?;
        self.color = color;
        Ok(())
    }

    fn color(&self) -> LedColor {
        self.color
    }
}

/// Alarm buzzer on a single output line.
pub struct BuzzerOutput {
    line: Lines<Output>,
    active: bool,
}

impl BuzzerOutput {
    /// Requests the buzzer line offset as an output, initially off.
    pub fn new(chip_name: &str, offset: u32) -> Result<Self> {
        let chip = Chip::new(chip_name)
            .with_context(|| format!("Failed to open GPIO chip '{chip_name}'"))?;

        let options = Options::output([offset])
            .values([false])
            .consumer("alarm-buzzer");
        let line = chip
            .request_lines(options)
            .context("Failed to request buzzer line as output")?;

        Ok(Self {
            line,
            active: false,
        })
    }

    fn drive(&mut self, on: bool) -> PanelResult<()> {
        self.line
            .set_values([on])
            .map_err(|e| PanelError::Gpio(format!("buzzer update failed: {e}")))?;
        self.active = on;
        Ok(())
    }
}

impl AlarmBuzzer for BuzzerOutput {
    fn on(&mut self) -> PanelResult<()> {
        self.drive(true)
    }

    fn off(&mut self) -> PanelResult<()> {
        self.drive(false)
    }

    fn is_on(&self) -> bool {
        self.active
    }
}

/// Momentary arming button on a single input line.
///
/// Active high: the line reads true while the button is held.
pub struct PushButton {
    line: Lines<Input>,
}

impl PushButton {
    /// Requests the button line offset as an input.
    pub fn new(chip_name: &str, offset: u32) -> Result<Self> {
        let chip = Chip::new(chip_name)
            .with_context(|| format!("Failed to open GPIO chip '{chip_name}'"))?;

        let options = Options::input([offset]).consumer("arming-button");
        let line = chip
            .request_lines(options)
            .context("Failed to request arming button line as input")?;

        Ok(Self { line })
    }
}

impl ArmingButton for PushButton {
    fn is_pressed(&mut self) -> PanelResult<bool> {
        let values = self
            .line
            .get_values([false])
            .map_err(|e| PanelError::Gpio(format!("button read failed: {e}")))?;
        Ok(values[0])
    }
}
