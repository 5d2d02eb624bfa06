use shufflebox_core::DemoCampaign;
use yew::prelude::*;

use crate::components::shuffle_flow::{FlowTheme, ShuffleFlow};

/// Demo flow that keeps the lineup hidden until the reveal.
#[function_component(MysteryDemoPage)]
pub fn mystery_demo_page() -> Html {
    html! { <ShuffleFlow demo={DemoCampaign::Mystery} theme={FlowTheme::Midnight} /> }
}
