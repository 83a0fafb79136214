//! Preloader Timeline

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    Loading,
    /// Overlay fading out
    Hidden,
    /// Main content revealed
    ContentLoaded,
    /// Overlay node removed
    Removed,
}

/// Phase schedule relative to the window `load` event
#[derive(Debug, Clone, PartialEq)]
pub struct Preloader {
    hide_after_ms: u32,
    reveal_after_ms: u32,
    remove_after_ms: u32,
}

impl Preloader {
    pub fn new(hide_after_ms: u32, reveal_after_ms: u32, remove_after_ms: u32) -> Self {
        Self { hide_after_ms, reveal_after_ms, remove_after_ms }
    }

    /// Phase changes as (delay since previous change, phase)
    pub fn schedule(&self) -> Vec<(u32, PreloaderPhase)> {
        let mut steps = vec![
            (self.hide_after_ms, PreloaderPhase::Hidden),
            (self.reveal_after_ms, PreloaderPhase::ContentLoaded),
        ];
        // Removal is timed from the hide, not from the reveal
        let remove_gap = self.remove_after_ms.saturating_sub(self.reveal_after_ms);
        steps.push((remove_gap, PreloaderPhase::Removed));
        steps
    }
}
