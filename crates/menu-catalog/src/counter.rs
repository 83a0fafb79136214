//! Stats Counter Animation
//!
//! Counters count up from zero the first time the stats block scrolls
//! into view. They animate once per page load.

/// One counter stepping toward its target
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            target,
            increment: f64::from(target) / f64::from(steps.max(1)),
            current: 0.0,
        }
    }

    /// Value to display (floor of the running total)
    pub fn value(&self) -> u32 {
        self.current.floor() as u32
    }

    pub fn is_done(&self) -> bool {
        self.current >= f64::from(self.target)
    }

    /// Advance one tick. Returns the value to display; the last tick
    /// clamps to the target.
    pub fn step(&mut self) -> u32 {
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.current = f64::from(self.target);
        }
        self.value()
    }
}

/// What the stats block should do after a scroll check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerAction {
    Start,
    None,
}

/// Trigger for the stats block. Latches after the first start.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTrigger {
    ratio: f64,
    triggered: bool,
}

impl StatsTrigger {
    pub fn new(ratio: f64) -> Self {
        Self { ratio, triggered: false }
    }

    /// Feed the block's bounding rect and the viewport height
    pub fn check(&mut self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> TriggerAction {
        if self.triggered {
            return TriggerAction::None;
        }
        if rect_top <= viewport_height * self.ratio && rect_bottom >= 0.0 {
            self.triggered = true;
            return TriggerAction::Start;
        }
        TriggerAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_reaches_target_in_steps() {
        let mut counter = CounterAnimation::new(500, 50);
        let mut ticks = 0;
        while !counter.is_done() {
            counter.step();
            ticks += 1;
        }
        assert_eq!(ticks, 50);
        assert_eq!(counter.value(), 500);
    }

    #[test]
    fn test_counter_floors_and_clamps() {
        let mut counter = CounterAnimation::new(8, 50);
        assert_eq!(counter.step(), 0); // 0.16
        for _ in 0..10 {
            counter.step();
        }
        assert_eq!(counter.value(), 1); // 1.76
        for _ in 0..100 {
            counter.step();
        }
        assert_eq!(counter.value(), 8);
        assert!(counter.is_done());
    }

    #[test]
    fn test_zero_target() {
        let mut counter = CounterAnimation::new(0, 50);
        assert!(counter.is_done());
        assert_eq!(counter.step(), 0);
    }

    #[test]
    fn test_trigger_starts_once() {
        let mut trigger = StatsTrigger::new(0.7);
        // Below the fold
        assert_eq!(trigger.check(900.0, 1200.0, 1000.0), TriggerAction::None);
        // Top crosses 70% of the viewport
        assert_eq!(trigger.check(650.0, 1000.0, 1000.0), TriggerAction::Start);
        assert_eq!(trigger.check(300.0, 600.0, 1000.0), TriggerAction::None);
        // Scrolled fully above, then back into view: no second run
        assert_eq!(trigger.check(-600.0, -1.0, 1000.0), TriggerAction::None);
        assert_eq!(trigger.check(100.0, 400.0, 1000.0), TriggerAction::None);
    }

    #[test]
    fn test_trigger_needs_block_on_screen() {
        let mut trigger = StatsTrigger::new(0.7);
        // Already above the viewport at first check
        assert_eq!(trigger.check(-600.0, -1.0, 1000.0), TriggerAction::None);
        assert_eq!(trigger.check(100.0, 400.0, 1000.0), TriggerAction::Start);
    }
}
