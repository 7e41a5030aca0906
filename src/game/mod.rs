//! Game controller - the round state machine
//!
//! All game state (state, lamps, reaction time, round timers) lives in the
//! [`ReactionGame`] resource and is mutated only through the methods here.
//! Input and rendering never touch the fields directly: input applies
//! `start`/`interact`, rendering reads the accessors.

pub mod schedule;

use bevy::prelude::*;
use rand::Rng;

use crate::constants::{LIGHT_COUNT, START_GAP_MAX, START_GAP_MIN};
use crate::lights::LightColor;
use schedule::{RoundAction, RoundSchedule};

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round played yet
    #[default]
    Idle,
    /// Lamps are lighting up; reacting now is a false start
    Starting,
    /// Lights are out, the clock is running
    Running,
    /// Player reacted before lights-out
    JumpStart,
    /// Round completed with a measured reaction time
    Finished,
}

impl GameState {
    /// States where the primary action means "start a new round"
    pub fn awaiting_start(self) -> bool {
        matches!(
            self,
            GameState::Idle | GameState::Finished | GameState::JumpStart
        )
    }
}

/// The single owned game tuple: state machine, lamp array, and timing.
///
/// Everything runs on the main schedule, so cancelling the round timers
/// before any state mutation is enough to keep stale timers from firing
/// into a new round.
#[derive(Resource)]
pub struct ReactionGame {
    state: GameState,
    lights: [LightColor; LIGHT_COUNT],
    /// Some iff `state == Finished`
    reaction_time_ms: Option<f64>,
    /// Captured at lights-out; Some iff the current round reached Running
    start_timestamp_ms: Option<f64>,
    schedule: RoundSchedule,
}

impl Default for ReactionGame {
    fn default() -> Self {
        Self {
            state: GameState::Idle,
            lights: [LightColor::Off; LIGHT_COUNT],
            reaction_time_ms: None,
            start_timestamp_ms: None,
            schedule: RoundSchedule::default(),
        }
    }
}

impl ReactionGame {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn lights(&self) -> &[LightColor; LIGHT_COUNT] {
        &self.lights
    }

    /// Measured reaction time in milliseconds, present once a round finishes
    pub fn reaction_time_ms(&self) -> Option<f64> {
        self.reaction_time_ms
    }

    /// Begin a round with a freshly sampled lights-out gap
    pub fn start(&mut self) {
        self.start_with_gap(sample_start_gap());
    }

    /// Begin a round with a fixed lights-out gap (for deterministic runs).
    ///
    /// Only permitted while awaiting a start (Idle/Finished/JumpStart);
    /// a no-op mid-round. Cancels the previous round's timers before
    /// scheduling anything new.
    pub fn start_with_gap(&mut self, gap_secs: f32) {
        if !self.state.awaiting_start() {
            return;
        }
        self.schedule.cancel();
        self.lights = [LightColor::Off; LIGHT_COUNT];
        self.reaction_time_ms = None;
        self.start_timestamp_ms = None;
        self.schedule = RoundSchedule::lighting_sequence(gap_secs);
        self.state = GameState::Starting;
        info!("Round started (lights-out gap {:.2}s)", gap_secs);
    }

    /// The player's primary action landing on an in-progress round.
    ///
    /// During Starting this is a jump start; during Running it stops the
    /// clock. In every other state it does nothing.
    pub fn interact(&mut self, now_ms: f64) {
        match self.state {
            GameState::Starting => {
                self.schedule.cancel();
                self.state = GameState::JumpStart;
                info!("Jump start");
            }
            GameState::Running => {
                // The timestamp is always set on the Starting -> Running
                // transition; treat a missing one as a no-op rather than
                // a crash.
                let Some(start_ms) = self.start_timestamp_ms else {
                    warn!("Interact while Running without a start timestamp, ignoring");
                    return;
                };
                let elapsed = now_ms - start_ms;
                self.reaction_time_ms = Some(elapsed);
                self.lights = [LightColor::Off; LIGHT_COUNT];
                self.state = GameState::Finished;
                info!("Reaction time: {:.0} ms", elapsed);
            }
            GameState::Idle | GameState::JumpStart | GameState::Finished => {}
        }
    }

    /// Tick the round clock, applying every scheduled effect that came due.
    ///
    /// `now_ms` is the wall clock used to stamp the Running transition.
    pub fn advance(&mut self, delta_secs: f32, now_ms: f64) {
        if self.state != GameState::Starting {
            return;
        }
        for action in self.schedule.advance(delta_secs) {
            match action {
                RoundAction::LightOn(i) => self.lights[i] = LightColor::Red,
                RoundAction::LightsOut => {
                    self.lights = [LightColor::Off; LIGHT_COUNT];
                    self.start_timestamp_ms = Some(now_ms);
                    self.state = GameState::Running;
                }
            }
        }
    }
}

/// Uniformly sampled delay between the last lamp and lights-out
pub fn sample_start_gap() -> f32 {
    rand::thread_rng().gen_range(START_GAP_MIN..START_GAP_MAX)
}

/// Drives the round schedule from frame time
pub fn tick_round(time: Res<Time>, mut game: ResMut<ReactionGame>) {
    if game.state() != GameState::Starting {
        return;
    }
    game.advance(time.delta_secs(), time.elapsed_secs_f64() * 1000.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LIGHT_INTERVAL;

    /// Advance the game by `dt_secs`, keeping a synthetic wall clock in step
    fn step(game: &mut ReactionGame, clock_ms: &mut f64, dt_secs: f32) {
        *clock_ms += f64::from(dt_secs) * 1000.0;
        game.advance(dt_secs, *clock_ms);
    }

    /// Run a fresh round up to the Running transition; returns the clock
    /// value at lights-out.
    fn run_until_running(game: &mut ReactionGame, clock_ms: &mut f64, gap_secs: f32) -> f64 {
        game.start_with_gap(gap_secs);
        while game.state() == GameState::Starting {
            step(game, clock_ms, 0.01);
        }
        assert_eq!(game.state(), GameState::Running);
        *clock_ms
    }

    #[test]
    fn test_start_resets_and_enters_starting() {
        let mut game = ReactionGame::default();
        game.start_with_gap(2.0);

        assert_eq!(game.state(), GameState::Starting);
        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);
        assert_eq!(game.reaction_time_ms(), None);
    }

    #[test]
    fn test_start_is_noop_mid_round() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;

        // While lamps are lighting up
        game.start_with_gap(2.0);
        step(&mut game, &mut clock, 1.2);
        let lights_before = *game.lights();
        game.start_with_gap(2.0);
        assert_eq!(game.state(), GameState::Starting);
        assert_eq!(game.lights(), &lights_before);

        // While the clock is running
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        run_until_running(&mut game, &mut clock, 1.0);
        game.start_with_gap(2.0);
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn test_lamps_light_in_index_order_exactly_once() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        game.start_with_gap(3.0);

        let mut first_lit: Vec<usize> = Vec::new();
        while game.state() == GameState::Starting {
            let before = *game.lights();
            step(&mut game, &mut clock, 0.02);
            for i in 0..LIGHT_COUNT {
                if before[i] == LightColor::Off && game.lights()[i] == LightColor::Red {
                    first_lit.push(i);
                }
                // Once lit, a lamp stays lit until lights-out
                if before[i] == LightColor::Red && game.state() == GameState::Starting {
                    assert_eq!(game.lights()[i], LightColor::Red);
                }
            }
        }

        assert_eq!(first_lit, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_all_lamps_lit_before_lights_out() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        game.start_with_gap(1.0);

        // Just past the fifth lamp, before the gap elapses
        step(&mut game, &mut clock, LIGHT_COUNT as f32 * LIGHT_INTERVAL + 0.01);
        assert_eq!(game.state(), GameState::Starting);
        assert_eq!(game.lights(), &[LightColor::Red; LIGHT_COUNT]);
    }

    #[test]
    fn test_lights_out_records_timestamp_and_enters_running() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        run_until_running(&mut game, &mut clock, 1.5);

        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);
        assert_eq!(game.reaction_time_ms(), None);
    }

    #[test]
    fn test_interact_during_starting_is_jump_start() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        game.start_with_gap(2.0);

        // Two lamps on, then the player twitches
        step(&mut game, &mut clock, 2.4);
        game.interact(clock);
        assert_eq!(game.state(), GameState::JumpStart);

        // No cancelled timer ever fires: nothing changes even long after
        // the original fire times
        let lights_at_penalty = *game.lights();
        step(&mut game, &mut clock, 60.0);
        assert_eq!(game.state(), GameState::JumpStart);
        assert_eq!(game.lights(), &lights_at_penalty);
        assert_eq!(game.reaction_time_ms(), None);
    }

    #[test]
    fn test_interact_during_running_measures_reaction_time() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        let lights_out_ms = run_until_running(&mut game, &mut clock, 2.0);

        game.interact(lights_out_ms + 300.0);
        assert_eq!(game.state(), GameState::Finished);
        assert_eq!(game.reaction_time_ms(), Some(300.0));
        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);
    }

    #[test]
    fn test_interact_between_rounds_is_noop() {
        let mut game = ReactionGame::default();
        game.interact(1000.0);
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.reaction_time_ms(), None);

        let mut clock = 0.0;
        run_until_running(&mut game, &mut clock, 1.0);
        game.interact(clock + 250.0);
        assert_eq!(game.state(), GameState::Finished);

        // A second interact after finishing changes nothing
        game.interact(clock + 900.0);
        assert_eq!(game.reaction_time_ms(), Some(250.0));
        assert_eq!(game.state(), GameState::Finished);
    }

    #[test]
    fn test_restart_resets_previous_round_data() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;

        // Finish a round
        run_until_running(&mut game, &mut clock, 1.0);
        game.interact(clock + 420.0);
        assert_eq!(game.state(), GameState::Finished);

        // Restarting wipes the old result
        game.start_with_gap(2.0);
        assert_eq!(game.state(), GameState::Starting);
        assert_eq!(game.reaction_time_ms(), None);
        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);

        // Same from a jump start
        game.interact(clock);
        assert_eq!(game.state(), GameState::JumpStart);
        game.start_with_gap(2.0);
        assert_eq!(game.state(), GameState::Starting);
        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);
    }

    #[test]
    fn test_start_gap_sampled_within_bounds() {
        let mut sum = 0.0;
        for _ in 0..1000 {
            let gap = sample_start_gap();
            assert!((START_GAP_MIN..START_GAP_MAX).contains(&gap));
            sum += f64::from(gap);
        }
        // Uniform over [1, 3): the mean of 1000 samples lands near 2
        let mean = sum / 1000.0;
        assert!((1.7..2.3).contains(&mean), "mean {mean} outside window");
    }

    #[test]
    fn test_full_round_scenario() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        game.start_with_gap(2.0);

        // All five lamps red after the fifth delay
        step(&mut game, &mut clock, LIGHT_COUNT as f32 * LIGHT_INTERVAL + 0.01);
        assert_eq!(game.lights(), &[LightColor::Red; LIGHT_COUNT]);

        // Past the gap: lights out, clock running
        step(&mut game, &mut clock, 2.0);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.lights(), &[LightColor::Off; LIGHT_COUNT]);

        // React 300ms later
        game.interact(clock + 300.0);
        assert_eq!(game.state(), GameState::Finished);
        assert_eq!(game.reaction_time_ms(), Some(300.0));
    }

    #[test]
    fn test_jump_start_scenario_no_late_light_changes() {
        let mut game = ReactionGame::default();
        let mut clock = 0.0;
        game.start_with_gap(2.0);

        // Interact at 2.0s, before the second lamp (fires at 2.3s)
        step(&mut game, &mut clock, 2.0);
        game.interact(clock);
        assert_eq!(game.state(), GameState::JumpStart);
        assert_eq!(
            game.lights(),
            &[
                LightColor::Red,
                LightColor::Off,
                LightColor::Off,
                LightColor::Off,
                LightColor::Off
            ]
        );

        // 6+ seconds later nothing has moved
        step(&mut game, &mut clock, 6.0);
        assert_eq!(game.lights()[1], LightColor::Off);
        assert_eq!(game.state(), GameState::JumpStart);
    }
}
