//! Campaign configuration and lineup data model
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CLASSIC_CAMPAIGN_DATA: &str =
    include_str!("../../shufflebox-web/static/assets/data/campaigns/classic.json");
const MYSTERY_CAMPAIGN_DATA: &str =
    include_str!("../../shufflebox-web/static/assets/data/campaigns/mystery.json");
const TERMS_CAMPAIGN_DATA: &str =
    include_str!("../../shufflebox-web/static/assets/data/campaigns/terms.json");

/// Maximum per-entry probability weight accepted by validation.
pub const MAX_PROBABILITY_WEIGHT: u32 = 100;

/// Rarity tier of a lineup entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "SSR")]
    Ssr,
    #[serde(rename = "SR")]
    Sr,
    R,
    N,
}

impl Rarity {
    /// Display label for the rarity badge
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ssr => "SSR",
            Self::Sr => "SR",
            Self::R => "R",
            Self::N => "N",
        }
    }
}

/// One prize in the campaign lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    pub probability_weight: u32,
}

/// Remaining/maximum draw allowance for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub remaining: u32,
    pub max: u32,
}

impl Quota {
    /// True while at least one draw is allowed
    #[must_use]
    pub const fn has_remaining(self) -> bool {
        self.remaining > 0
    }
}

/// Campaign run window. Informational only; never checked against the
/// current time by the flow itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub start: String,
    pub end: String,
}

const fn default_true() -> bool {
    true
}

/// Orthogonal UI toggles carried by a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityFlags {
    #[serde(default = "default_true")]
    pub show_lineup: bool,
    #[serde(default = "default_true")]
    pub show_probability: bool,
    #[serde(default = "default_true")]
    pub show_share_button: bool,
    #[serde(default)]
    pub require_terms_agreement: bool,
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self {
            show_lineup: true,
            show_probability: true,
            show_share_button: true,
            require_terms_agreement: false,
        }
    }
}

/// Full immutable description of one shuffle campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub active_window: ActiveWindow,
    #[serde(default)]
    pub flags: VisibilityFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
    pub quota: Quota,
    pub lineup: Vec<LineupEntry>,
}

/// Configuration-level failures, all surfaced eagerly at load time
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("campaign JSON malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("campaign lineup is empty")]
    EmptyLineup,
    #[error("quota max must be at least 1")]
    ZeroQuotaMax,
    #[error("quota remaining {remaining} exceeds max {max}")]
    QuotaOverflow { remaining: u32, max: u32 },
    #[error("lineup entry {id} weight {weight} outside 0..={MAX_PROBABILITY_WEIGHT}")]
    WeightOutOfRange { id: u32, weight: u32 },
    #[error("lineup weights sum to zero; no entry can ever be drawn")]
    ZeroWeightTotal,
}

impl CampaignConfig {
    /// Parse and validate a campaign document.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or any structural
    /// invariant (non-empty lineup, quota bounds, weight bounds) is violated.
    pub fn from_json(raw: &str) -> Result<Self, CampaignError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every structural invariant of the campaign.
    ///
    /// Lineup weights not summing to exactly 100 is tolerated (the data is
    /// display-oriented and the selector draws over the actual total) but
    /// logged so bad campaign data is visible during development.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), CampaignError> {
        if self.lineup.is_empty() {
            return Err(CampaignError::EmptyLineup);
        }
        if self.quota.max == 0 {
            return Err(CampaignError::ZeroQuotaMax);
        }
        if self.quota.remaining > self.quota.max {
            return Err(CampaignError::QuotaOverflow {
                remaining: self.quota.remaining,
                max: self.quota.max,
            });
        }
        for entry in &self.lineup {
            if entry.probability_weight > MAX_PROBABILITY_WEIGHT {
                return Err(CampaignError::WeightOutOfRange {
                    id: entry.id,
                    weight: entry.probability_weight,
                });
            }
        }
        let total = self.weight_total();
        if total == 0 {
            return Err(CampaignError::ZeroWeightTotal);
        }
        if total != 100 {
            log::warn!(
                "campaign '{title}' lineup weights sum to {total}, not 100",
                title = self.title
            );
        }
        Ok(())
    }

    /// Sum of all lineup probability weights
    #[must_use]
    pub fn weight_total(&self) -> u32 {
        self.lineup.iter().map(|e| e.probability_weight).sum()
    }

    /// Lineup position of the entry with the given id
    #[must_use]
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.lineup.iter().position(|e| e.id == id)
    }

    /// Lineup entry with the given id
    #[must_use]
    pub fn entry_by_id(&self, id: u32) -> Option<&LineupEntry> {
        self.lineup.iter().find(|e| e.id == id)
    }
}

/// The single prize result bound to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
}

impl From<&LineupEntry> for DrawOutcome {
    fn from(entry: &LineupEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            image_url: entry.image_url.clone(),
            rarity: entry.rarity,
        }
    }
}

/// The demo campaigns shipped with the web frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoCampaign {
    /// Full lineup with probabilities and rarity tiers on display
    Classic,
    /// Lineup and probabilities hidden until the reveal
    Mystery,
    /// Lineup visible but the draw is gated on terms agreement
    Terms,
}

impl DemoCampaign {
    /// Load and validate the embedded campaign document for this demo.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded document fails validation, which
    /// indicates a bug in the shipped asset rather than a runtime condition.
    pub fn config(self) -> Result<CampaignConfig, CampaignError> {
        let raw = match self {
            Self::Classic => CLASSIC_CAMPAIGN_DATA,
            Self::Mystery => MYSTERY_CAMPAIGN_DATA,
            Self::Terms => TERMS_CAMPAIGN_DATA,
        };
        CampaignConfig::from_json(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_campaign(lineup: Vec<LineupEntry>) -> CampaignConfig {
        CampaignConfig {
            title: "Test Campaign".to_string(),
            description: String::new(),
            image_url: "https://example.com/hero.png".to_string(),
            active_window: ActiveWindow {
                start: "2025-01-01T00:00:00".to_string(),
                end: "2025-02-28T23:59:59".to_string(),
            },
            flags: VisibilityFlags::default(),
            external_link_url: None,
            terms_url: None,
            quota: Quota { remaining: 2, max: 3 },
            lineup,
        }
    }

    fn entry(id: u32, weight: u32) -> LineupEntry {
        LineupEntry {
            id,
            name: format!("Prize {id}"),
            image_url: format!("https://example.com/{id}.png"),
            rarity: None,
            probability_weight: weight,
        }
    }

    #[test]
    fn all_demo_campaigns_load_and_validate() {
        for demo in [
            DemoCampaign::Classic,
            DemoCampaign::Mystery,
            DemoCampaign::Terms,
        ] {
            let config = demo.config().expect("embedded campaign must validate");
            assert_eq!(config.lineup.len(), 5);
            assert_eq!(config.weight_total(), 100);
            assert_eq!(config.quota, Quota { remaining: 2, max: 3 });
        }
    }

    #[test]
    fn demo_flags_match_their_variants() {
        let classic = DemoCampaign::Classic.config().unwrap();
        assert!(classic.flags.show_lineup);
        assert!(classic.flags.show_probability);
        assert!(!classic.flags.require_terms_agreement);

        let mystery = DemoCampaign::Mystery.config().unwrap();
        assert!(!mystery.flags.show_lineup);
        assert!(!mystery.flags.show_probability);

        let terms = DemoCampaign::Terms.config().unwrap();
        assert!(terms.flags.require_terms_agreement);
        assert!(terms.terms_url.is_some());
    }

    #[test]
    fn rarity_only_set_for_classic_lineup() {
        let classic = DemoCampaign::Classic.config().unwrap();
        assert!(classic.lineup.iter().all(|e| e.rarity.is_some()));
        let mystery = DemoCampaign::Mystery.config().unwrap();
        assert!(mystery.lineup.iter().all(|e| e.rarity.is_none()));
    }

    #[test]
    fn empty_lineup_is_rejected() {
        let config = minimal_campaign(Vec::new());
        assert!(matches!(
            config.validate(),
            Err(CampaignError::EmptyLineup)
        ));
    }

    #[test]
    fn quota_invariants_are_enforced() {
        let mut config = minimal_campaign(vec![entry(1, 100)]);
        config.quota = Quota { remaining: 4, max: 3 };
        assert!(matches!(
            config.validate(),
            Err(CampaignError::QuotaOverflow { remaining: 4, max: 3 })
        ));

        config.quota = Quota { remaining: 0, max: 0 };
        assert!(matches!(config.validate(), Err(CampaignError::ZeroQuotaMax)));
    }

    #[test]
    fn oversized_weight_is_rejected() {
        let config = minimal_campaign(vec![entry(1, 101)]);
        assert!(matches!(
            config.validate(),
            Err(CampaignError::WeightOutOfRange { id: 1, weight: 101 })
        ));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let config = minimal_campaign(vec![entry(1, 0), entry(2, 0)]);
        assert!(matches!(
            config.validate(),
            Err(CampaignError::ZeroWeightTotal)
        ));
    }

    #[test]
    fn weights_not_summing_to_100_are_tolerated() {
        let config = minimal_campaign(vec![entry(1, 30), entry(2, 30)]);
        assert!(config.validate().is_ok());
        assert_eq!(config.weight_total(), 60);
    }

    #[test]
    fn position_and_lookup_by_id() {
        let config = minimal_campaign(vec![entry(7, 50), entry(9, 50)]);
        assert_eq!(config.position_of(9), Some(1));
        assert_eq!(config.entry_by_id(9).map(|e| e.id), Some(9));
        assert_eq!(config.position_of(42), None);
    }

    #[test]
    fn rarity_round_trips_through_serde_labels() {
        let json = r#"{"id":1,"name":"X","image_url":"u","rarity":"SSR","probability_weight":1}"#;
        let parsed: LineupEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rarity, Some(Rarity::Ssr));
        assert_eq!(Rarity::Ssr.label(), "SSR");
        let back = serde_json::to_string(&parsed).unwrap();
        assert!(back.contains("\"SSR\""));
    }
}
