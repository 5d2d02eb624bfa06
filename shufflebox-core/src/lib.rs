//! Shufflebox Core
//!
//! Platform-agnostic logic for the shuffle reveal flow: campaign data
//! model, weighted outcome selection, the reveal animation state machine,
//! and the screen sequencer. No UI or browser dependencies; timers come
//! in through the [`driver::TimerHost`] seam.

pub mod animator;
pub mod campaign;
pub mod driver;
pub mod selector;
pub mod session;

// Re-export commonly used types
pub use animator::{AnimatorError, RevealAnimator, RevealFrame, RevealPhase, RevealTiming};
pub use campaign::{
    ActiveWindow, CampaignConfig, CampaignError, DemoCampaign, DrawOutcome, LineupEntry,
    MAX_PROBABILITY_WEIGHT, Quota, Rarity, VisibilityFlags,
};
pub use driver::{RevealDriver, TimerHost};
pub use selector::{SelectorError, draw, select};
pub use session::{Screen, SessionState, ShuffleSession};
