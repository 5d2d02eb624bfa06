use shufflebox_core::{LineupEntry, Rarity};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub entry: LineupEntry,
    #[prop_or_default]
    pub show_probability: bool,
}

const fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Ssr => "rarity-badge rarity-ssr",
        Rarity::Sr => "rarity-badge rarity-sr",
        Rarity::R => "rarity-badge rarity-r",
        Rarity::N => "rarity-badge rarity-n",
    }
}

/// One lineup entry card. Hover lift is a state flag driving a class, so
/// rendering stays a pure function of component state.
#[function_component(PrizeCard)]
pub fn prize_card(props: &Props) -> Html {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let entry = &props.entry;
    html! {
        <div
            class={classes!("prize-card", (*hovered).then_some("prize-card-lifted"))}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="prize-card-image">
                <img src={entry.image_url.clone()} alt={entry.name.clone()} loading="lazy" />
                if let Some(rarity) = entry.rarity {
                    <span class={rarity_class(rarity)}>{ rarity.label() }</span>
                }
            </div>
            <div class="prize-card-body">
                <p class="prize-card-name">{ &entry.name }</p>
                if props.show_probability {
                    <p class="prize-card-probability">
                        { format!("{}%", entry.probability_weight) }
                    </p>
                }
            </div>
        </div>
    }
}
