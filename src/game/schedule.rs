//! Round schedule - the cancelable timer group for one round
//!
//! Every deferred effect of a round (each lamp lighting up, then lights-out)
//! lives in a single owned group. Cancelling the group drops every pending
//! entry at once; a cancelled entry never fires.

use crate::constants::{LIGHT_COUNT, LIGHT_INTERVAL};

/// A deferred effect within one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// Turn lamp `i` red
    LightOn(usize),
    /// Extinguish all lamps and begin timing the player
    LightsOut,
}

/// One pending entry, relative to round entry
#[derive(Debug, Clone, Copy)]
struct Entry {
    fire_at: f32,
    action: RoundAction,
}

/// Pending timers for a single round, fired in schedule order.
#[derive(Debug, Default)]
pub struct RoundSchedule {
    /// Seconds since the round entered Starting
    elapsed: f32,
    /// Sorted by fire time, drained from the front as entries come due
    pending: Vec<Entry>,
}

impl RoundSchedule {
    /// Build the standard lighting sequence: one lamp every [`LIGHT_INTERVAL`]
    /// seconds, then lights-out `gap_secs` after the last lamp.
    pub fn lighting_sequence(gap_secs: f32) -> Self {
        let mut pending = Vec::with_capacity(LIGHT_COUNT + 1);
        for i in 0..LIGHT_COUNT {
            pending.push(Entry {
                fire_at: (i as f32 + 1.0) * LIGHT_INTERVAL,
                action: RoundAction::LightOn(i),
            });
        }
        pending.push(Entry {
            fire_at: LIGHT_COUNT as f32 * LIGHT_INTERVAL + gap_secs,
            action: RoundAction::LightsOut,
        });
        Self {
            elapsed: 0.0,
            pending,
        }
    }

    /// Advance the round clock and collect every entry now due, in order
    pub fn advance(&mut self, delta_secs: f32) -> Vec<RoundAction> {
        self.elapsed += delta_secs;
        let due = self
            .pending
            .iter()
            .take_while(|e| e.fire_at <= self.elapsed)
            .count();
        self.pending.drain(..due).map(|e| e.action).collect()
    }

    /// Drop every pending entry so none of them ever fires
    pub fn cancel(&mut self) {
        self.pending.clear();
    }

    /// Number of entries still waiting to fire
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighting_sequence_has_one_entry_per_lamp_plus_lights_out() {
        let schedule = RoundSchedule::lighting_sequence(2.0);
        assert_eq!(schedule.pending_count(), LIGHT_COUNT + 1);
    }

    #[test]
    fn test_entries_fire_in_order() {
        let mut schedule = RoundSchedule::lighting_sequence(1.0);
        let mut fired = Vec::new();

        // Step in small increments well past the last fire time
        for _ in 0..200 {
            fired.extend(schedule.advance(0.05));
        }

        let expected: Vec<RoundAction> = (0..LIGHT_COUNT)
            .map(RoundAction::LightOn)
            .chain(std::iter::once(RoundAction::LightsOut))
            .collect();
        assert_eq!(fired, expected);
        assert_eq!(schedule.pending_count(), 0);
    }

    #[test]
    fn test_single_large_step_fires_everything_in_order() {
        let mut schedule = RoundSchedule::lighting_sequence(3.0);
        let fired = schedule.advance(60.0);

        assert_eq!(fired.len(), LIGHT_COUNT + 1);
        assert_eq!(fired[0], RoundAction::LightOn(0));
        assert_eq!(fired[LIGHT_COUNT - 1], RoundAction::LightOn(LIGHT_COUNT - 1));
        assert_eq!(fired[LIGHT_COUNT], RoundAction::LightsOut);
    }

    #[test]
    fn test_cancel_drops_all_pending_entries() {
        let mut schedule = RoundSchedule::lighting_sequence(2.0);

        // Let the first two lamps fire, then cancel
        assert_eq!(
            schedule.advance(2.4),
            vec![RoundAction::LightOn(0), RoundAction::LightOn(1)]
        );
        schedule.cancel();

        assert_eq!(schedule.pending_count(), 0);
        // Nothing fires even long after the original fire times
        assert!(schedule.advance(60.0).is_empty());
    }

    #[test]
    fn test_nothing_fires_before_first_lamp_delay() {
        let mut schedule = RoundSchedule::lighting_sequence(2.0);
        assert!(schedule.advance(LIGHT_INTERVAL - 0.01).is_empty());
        assert_eq!(schedule.advance(0.02), vec![RoundAction::LightOn(0)]);
    }
}
