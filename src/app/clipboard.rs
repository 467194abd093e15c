//! Clipboard access and the per-listing "Copied!" indicator.

use super::error::{AppError, Result};

/// How long the copied indicator stays up before reverting.
pub const COPY_FEEDBACK_SECS: f64 = 2.0;

/// Write text to the system clipboard. The clipboard is opened per write;
/// holding it for the app's lifetime blocks other clients on X11.
pub fn write_text(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

/// Idle → copied → idle indicator for one code listing.
///
/// Each successful copy bumps a generation; the timer that reverts the
/// indicator carries the generation it was armed with, so a re-copy during
/// the feedback window simply restarts the cycle and the stale timer's
/// reset is ignored.
#[derive(Debug, Clone, Default)]
pub struct CopyIndicator {
    copied: bool,
    generation: u64,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Enter the copied state; returns the generation to arm the reset with.
    pub fn mark_copied(&mut self) -> u64 {
        self.copied = true;
        self.generation += 1;
        self.generation
    }

    /// Revert to idle if `generation` is still current. Returns whether the
    /// indicator actually reverted.
    pub fn acknowledge(&mut self, generation: u64) -> bool {
        if self.copied && self.generation == generation {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_reset() {
        let mut indicator = CopyIndicator::new();
        assert!(!indicator.is_copied());

        let generation = indicator.mark_copied();
        assert!(indicator.is_copied());

        assert!(indicator.acknowledge(generation));
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_recopy_restarts_the_cycle() {
        let mut indicator = CopyIndicator::new();
        let first = indicator.mark_copied();
        // User copies again before the first reset fires
        let second = indicator.mark_copied();

        // The stale timer must not revert the fresh indicator
        assert!(!indicator.acknowledge(first));
        assert!(indicator.is_copied());

        assert!(indicator.acknowledge(second));
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_acknowledge_when_idle_is_noop() {
        let mut indicator = CopyIndicator::new();
        assert!(!indicator.acknowledge(0));
        assert!(!indicator.acknowledge(1));
    }
}
