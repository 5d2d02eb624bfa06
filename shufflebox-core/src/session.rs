//! Screen sequencing for one shuffle session
//!
//! Gates and drives the Ready → Animating → Result flow. The session is
//! the only writer of its state; the animator and selector never touch it.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::campaign::{CampaignConfig, DrawOutcome, Quota};
use crate::selector;

/// Which of the three flow screens is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Screen {
    #[default]
    Ready,
    Animating,
    Result,
}

/// Mutable per-session state; created at Ready, torn down with the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    pub quota: Quota,
    pub terms_accepted: bool,
}

/// One user-facing shuffle session over an immutable campaign
#[derive(Debug, Clone)]
pub struct ShuffleSession {
    config: CampaignConfig,
    state: SessionState,
    outcome: Option<DrawOutcome>,
}

impl ShuffleSession {
    /// Open a session on the Ready screen with the campaign's quota.
    #[must_use]
    pub fn new(config: CampaignConfig) -> Self {
        let state = SessionState {
            screen: Screen::Ready,
            quota: config.quota,
            terms_accepted: false,
        };
        Self {
            config,
            state,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CampaignConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.state.screen
    }

    #[must_use]
    pub const fn quota(&self) -> Quota {
        self.state.quota
    }

    /// Outcome bound by the most recent `start`
    #[must_use]
    pub const fn outcome(&self) -> Option<&DrawOutcome> {
        self.outcome.as_ref()
    }

    /// Lineup position of the bound outcome, for driving the reveal
    #[must_use]
    pub fn outcome_position(&self) -> Option<usize> {
        self.outcome
            .as_ref()
            .and_then(|o| self.config.position_of(o.id))
    }

    #[must_use]
    pub const fn terms_accepted(&self) -> bool {
        self.state.terms_accepted
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.state.terms_accepted = accepted;
    }

    /// Whether a draw may start: quota remains and, when the campaign
    /// requires it, terms have been accepted.
    #[must_use]
    pub const fn can_start(&self) -> bool {
        self.state.quota.has_remaining()
            && (!self.config.flags.require_terms_agreement || self.state.terms_accepted)
    }

    /// Begin a draw: Ready → Animating, quota consumed, outcome bound.
    ///
    /// A no-op returning `None` when gating fails or the session is not on
    /// the Ready screen, so re-entrant calls while animating are ignored
    /// and the quota is consumed at most once per transition.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&DrawOutcome> {
        if self.state.screen != Screen::Ready || !self.can_start() {
            return None;
        }
        let outcome = match selector::draw(&self.config, rng) {
            Ok(outcome) => outcome,
            Err(err) => {
                // Unreachable for a validated campaign; refuse the draw
                // rather than consume quota on broken data.
                log::error!("draw refused: {err}");
                return None;
            }
        };
        self.state.quota.remaining -= 1;
        self.state.screen = Screen::Animating;
        self.outcome = Some(outcome);
        self.outcome.as_ref()
    }

    /// Animating → Result once the reveal animation completes. Result is
    /// never reachable from Ready directly.
    pub fn finish_reveal(&mut self) -> bool {
        if self.state.screen == Screen::Animating {
            self.state.screen = Screen::Result;
            true
        } else {
            false
        }
    }

    /// Result → Ready for another draw in the same session, only while
    /// quota remains. Clears the bound outcome.
    pub fn reset(&mut self) -> bool {
        if self.state.screen == Screen::Result && self.state.quota.has_remaining() {
            self.state.screen = Screen::Ready;
            self.outcome = None;
            true
        } else {
            false
        }
    }
}
