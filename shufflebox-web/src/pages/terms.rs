use shufflebox_core::DemoCampaign;
use yew::prelude::*;

use crate::components::shuffle_flow::{FlowTheme, ShuffleFlow};

/// Demo flow gated on terms agreement before the draw is allowed.
#[function_component(TermsDemoPage)]
pub fn terms_demo_page() -> Html {
    html! { <ShuffleFlow demo={DemoCampaign::Terms} theme={FlowTheme::Meadow} /> }
}
