//! Reveal animation state machine
//!
//! Clock-free core of the reveal: the machine only decides which lineup
//! entry is displayed on each tick and how long to wait before the next
//! one. Which entry is the true outcome is decided elsewhere; the machine
//! is forced onto it for the final settle so the displayed item always
//! matches the draw.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timing profile for one reveal run, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTiming {
    /// Interval between ticks while cycling at full speed
    pub base_tick_ms: u32,
    /// Total number of cycle ticks before the settle
    pub total_ticks: u32,
    /// How many of the final ticks decelerate
    pub slowdown_ticks: u32,
    /// Interval increase per decelerating tick
    pub slowdown_step_ms: u32,
    /// Pause on the landed entry before completion fires
    pub settle_delay_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            base_tick_ms: 80,
            total_ticks: 25,
            slowdown_ticks: 10,
            slowdown_step_ms: 40,
            settle_delay_ms: 500,
        }
    }
}

/// Phase of the reveal machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Advancing through the lineup at full speed
    Cycling,
    /// Decelerating towards the landed entry
    Settling,
    /// Terminal; completion has been reported
    Done,
}

/// One step of the reveal: what to show and how long until the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFrame {
    pub display_index: usize,
    pub phase: RevealPhase,
    /// `None` exactly once, on the completion frame
    pub delay_to_next_ms: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimatorError {
    #[error("lineup must contain at least one entry")]
    EmptyLineup,
    #[error("outcome index {index} outside lineup of length {len}")]
    OutcomeOutOfBounds { index: usize, len: usize },
    #[error("timing profile invalid: {0}")]
    InvalidTiming(&'static str),
    #[error("reveal already finished")]
    Finished,
}

/// Deterministic tick-by-tick reveal sequence over a lineup
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    timing: RevealTiming,
    lineup_len: usize,
    outcome_index: usize,
    ticks_elapsed: u32,
    display_index: usize,
    interval_ms: u32,
    phase: RevealPhase,
}

impl RevealAnimator {
    /// Build a reveal over `lineup_len` entries landing on `outcome_index`.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty lineup, an out-of-bounds outcome, or
    /// a timing profile with no ticks or more slowdown ticks than ticks.
    pub fn new(
        lineup_len: usize,
        outcome_index: usize,
        timing: RevealTiming,
    ) -> Result<Self, AnimatorError> {
        if lineup_len == 0 {
            return Err(AnimatorError::EmptyLineup);
        }
        if outcome_index >= lineup_len {
            return Err(AnimatorError::OutcomeOutOfBounds {
                index: outcome_index,
                len: lineup_len,
            });
        }
        if timing.total_ticks == 0 {
            return Err(AnimatorError::InvalidTiming("total_ticks must be >= 1"));
        }
        if timing.slowdown_ticks > timing.total_ticks {
            return Err(AnimatorError::InvalidTiming(
                "slowdown_ticks exceeds total_ticks",
            ));
        }
        Ok(Self {
            timing,
            lineup_len,
            outcome_index,
            ticks_elapsed: 0,
            display_index: 0,
            interval_ms: timing.base_tick_ms,
            phase: RevealPhase::Cycling,
        })
    }

    /// The frame shown before the first tick fires
    #[must_use]
    pub const fn initial_frame(&self) -> RevealFrame {
        RevealFrame {
            display_index: 0,
            phase: RevealPhase::Cycling,
            delay_to_next_ms: Some(self.timing.base_tick_ms),
        }
    }

    /// Currently displayed lineup position
    #[must_use]
    pub const fn display_index(&self) -> usize {
        self.display_index
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether the completion frame has been produced
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }

    /// Advance by one tick.
    ///
    /// While cycling the display index wraps through the lineup; the final
    /// tick lands on the outcome and requests one settle delay. The frame
    /// after the settle has no next delay and marks the machine `Done`.
    ///
    /// # Errors
    ///
    /// Returns `Finished` when called after the completion frame.
    pub fn advance(&mut self) -> Result<RevealFrame, AnimatorError> {
        if self.phase == RevealPhase::Done {
            return Err(AnimatorError::Finished);
        }

        if self.ticks_elapsed >= self.timing.total_ticks {
            // Settle elapsed; report completion on the outcome.
            self.display_index = self.outcome_index;
            self.phase = RevealPhase::Done;
            return Ok(RevealFrame {
                display_index: self.display_index,
                phase: RevealPhase::Done,
                delay_to_next_ms: None,
            });
        }

        self.ticks_elapsed += 1;
        self.display_index = (self.display_index + 1) % self.lineup_len;
        if self.ticks_elapsed > self.timing.total_ticks - self.timing.slowdown_ticks {
            self.phase = RevealPhase::Settling;
            self.interval_ms += self.timing.slowdown_step_ms;
        }

        if self.ticks_elapsed == self.timing.total_ticks {
            // Land: force the display onto the true outcome for the settle.
            self.display_index = self.outcome_index;
            Ok(RevealFrame {
                display_index: self.display_index,
                phase: self.phase,
                delay_to_next_ms: Some(self.timing.settle_delay_ms),
            })
        } else {
            Ok(RevealFrame {
                display_index: self.display_index,
                phase: self.phase,
                delay_to_next_ms: Some(self.interval_ms),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(animator: &mut RevealAnimator) -> Vec<RevealFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = animator.advance().expect("machine not yet done");
            frames.push(frame);
            if frame.delay_to_next_ms.is_none() {
                return frames;
            }
        }
    }

    #[test]
    fn default_profile_matches_reveal_shape() {
        let timing = RevealTiming::default();
        let mut animator = RevealAnimator::new(5, 1, timing).unwrap();
        let frames = run_to_completion(&mut animator);

        // 25 cycle ticks plus the completion frame.
        assert_eq!(frames.len(), 26);

        // Full speed for the first 15 ticks.
        for frame in &frames[..15] {
            assert_eq!(frame.phase, RevealPhase::Cycling);
            assert_eq!(frame.delay_to_next_ms, Some(80));
        }
        // Deceleration over the final 10 ticks: 120, 160, .. up to the land.
        assert_eq!(frames[15].phase, RevealPhase::Settling);
        assert_eq!(frames[15].delay_to_next_ms, Some(120));
        assert_eq!(frames[23].delay_to_next_ms, Some(440));
        // Landing tick shows the outcome and requests the settle delay.
        assert_eq!(frames[24].display_index, 1);
        assert_eq!(frames[24].delay_to_next_ms, Some(500));
        // Completion frame stays on the outcome.
        assert_eq!(frames[25].phase, RevealPhase::Done);
        assert_eq!(frames[25].display_index, 1);
        assert_eq!(frames[25].delay_to_next_ms, None);
    }

    #[test]
    fn converges_on_outcome_for_any_lineup_length() {
        for lineup_len in 1..=8 {
            for outcome_index in 0..lineup_len {
                let mut animator =
                    RevealAnimator::new(lineup_len, outcome_index, RevealTiming::default())
                        .unwrap();
                let frames = run_to_completion(&mut animator);
                let last = frames.last().unwrap();
                assert_eq!(last.display_index, outcome_index);
                assert!(animator.is_done());
            }
        }
    }

    #[test]
    fn cycling_wraps_through_the_lineup_in_order() {
        let mut animator = RevealAnimator::new(3, 0, RevealTiming::default()).unwrap();
        assert_eq!(animator.initial_frame().display_index, 0);
        assert_eq!(animator.advance().unwrap().display_index, 1);
        assert_eq!(animator.advance().unwrap().display_index, 2);
        assert_eq!(animator.advance().unwrap().display_index, 0);
        assert_eq!(animator.advance().unwrap().display_index, 1);
    }

    #[test]
    fn advancing_past_done_is_rejected() {
        let mut animator = RevealAnimator::new(2, 1, RevealTiming::default()).unwrap();
        let _ = run_to_completion(&mut animator);
        assert_eq!(animator.advance().unwrap_err(), AnimatorError::Finished);
    }

    #[test]
    fn construction_rejects_bad_input() {
        let timing = RevealTiming::default();
        assert_eq!(
            RevealAnimator::new(0, 0, timing).unwrap_err(),
            AnimatorError::EmptyLineup
        );
        assert_eq!(
            RevealAnimator::new(3, 3, timing).unwrap_err(),
            AnimatorError::OutcomeOutOfBounds { index: 3, len: 3 }
        );
        let zero_ticks = RevealTiming {
            total_ticks: 0,
            ..timing
        };
        assert!(matches!(
            RevealAnimator::new(3, 0, zero_ticks).unwrap_err(),
            AnimatorError::InvalidTiming(_)
        ));
        let lopsided = RevealTiming {
            total_ticks: 5,
            slowdown_ticks: 6,
            ..timing
        };
        assert!(matches!(
            RevealAnimator::new(3, 0, lopsided).unwrap_err(),
            AnimatorError::InvalidTiming(_)
        ));
    }

    #[test]
    fn fewer_ticks_than_lineup_entries_still_lands_on_outcome() {
        let timing = RevealTiming {
            total_ticks: 3,
            slowdown_ticks: 1,
            ..RevealTiming::default()
        };
        let mut animator = RevealAnimator::new(10, 7, timing).unwrap();
        let frames = run_to_completion(&mut animator);
        assert_eq!(frames.last().unwrap().display_index, 7);
    }
}
