//! Auto-repeat for a held cursor direction.
//!
//! A newly held direction fires once straight away. Holding it fires again
//! after `REPEAT_DELAY`, then every `REPEAT_INTERVAL`.

use std::time::Duration;

pub const REPEAT_DELAY: Duration = Duration::from_millis(200);
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default)]
pub struct DirectionRepeat {
    last_held: (i8, i8),
    held_for: Duration,
}

impl DirectionRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the direction held this frame (`-1..=1` per axis) and the frame
    /// time. Returns the step to apply to the cursor, if any.
    pub fn update(&mut self, held: (i8, i8), dt: Duration) -> Option<(i8, i8)> {
        let held = (held.0.signum(), held.1.signum());
        if held != self.last_held {
            self.last_held = held;
            self.held_for = Duration::ZERO;
            return (held != (0, 0)).then_some(held);
        }

        if held == (0, 0) {
            return None;
        }

        self.held_for += dt;
        if self.held_for >= REPEAT_DELAY {
            self.held_for -= REPEAT_INTERVAL;
            return Some(held);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(50);

    #[test]
    fn fresh_press_fires_immediately() {
        let mut repeat = DirectionRepeat::new();
        assert_eq!(repeat.update((1, 0), FRAME), Some((1, 0)));
        assert_eq!(repeat.update((1, 0), FRAME), None);
    }

    #[test]
    fn holding_repeats_after_delay_then_at_interval() {
        let mut repeat = DirectionRepeat::new();
        repeat.update((0, -1), FRAME);

        let fired: Vec<bool> = (0..8)
            .map(|_| repeat.update((0, -1), FRAME).is_some())
            .collect();
        // 50,100,150 quiet; 200 fires; then every 100 ms.
        assert_eq!(
            fired,
            vec![false, false, false, true, false, true, false, true]
        );
    }

    #[test]
    fn releasing_resets_the_timer() {
        let mut repeat = DirectionRepeat::new();
        repeat.update((1, 1), FRAME);
        repeat.update((1, 1), Duration::from_millis(150));
        assert_eq!(repeat.update((0, 0), FRAME), None);
        assert_eq!(repeat.update((1, 1), FRAME), Some((1, 1)));
        assert_eq!(repeat.update((1, 1), FRAME), None);
    }
}
