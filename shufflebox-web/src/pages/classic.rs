use shufflebox_core::DemoCampaign;
use yew::prelude::*;

use crate::components::shuffle_flow::{FlowTheme, ShuffleFlow};

/// Demo flow with the full lineup, rarity tiers, and probabilities shown.
#[function_component(ClassicDemoPage)]
pub fn classic_demo_page() -> Html {
    html! { <ShuffleFlow demo={DemoCampaign::Classic} theme={FlowTheme::Sunset} /> }
}
