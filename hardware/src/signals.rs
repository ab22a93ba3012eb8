//! Shutdown flag wired to the process termination signals.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::{SIGINT, SIGTERM};

/// Returns a flag that flips to `true` on Ctrl+C or SIGTERM.
///
/// The monitoring loop polls the flag once per tick, so a termination
/// request takes effect within one sample period and the final
/// statistics report still runs.
pub fn shutdown_flag() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&flag))
            .with_context(|| format!("Failed to install handler for signal {signal}"))?;
    }
    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_termination_signal_raises_the_flag() {
        let flag = shutdown_flag().unwrap();
        assert!(!flag.load(Ordering::SeqCst));

        signal_hook::low_level::raise(SIGTERM).unwrap();
        assert!(flag.load(Ordering::SeqCst));
    }
}
