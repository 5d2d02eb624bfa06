use gloo::timers::callback::Timeout;
use shufflebox_core::{CampaignConfig, DrawOutcome};
use yew::prelude::*;

use crate::dom;

const CONFETTI_COLORS: [&str; 14] = [
    "#FF0000", "#FF4500", "#FF6900", "#FFD700", "#FFFF00", "#7CFC00", "#00FF00", "#00CED1",
    "#00BFFF", "#1E90FF", "#8A2BE2", "#FF00FF", "#FF1493", "#FF69B4",
];
const CONFETTI_COUNT: usize = 24;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: CampaignConfig,
    pub outcome: DrawOutcome,
    pub can_reset: bool,
    pub on_reset: Callback<()>,
}

fn confetti_layer() -> Html {
    // Deterministic scatter; real randomness buys nothing here.
    let pieces = (0..CONFETTI_COUNT).map(|i| {
        let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
        let left = (i * 37 + 11) % 100;
        let delay_ms = (i * 83) % 2000;
        let style = format!(
            "background:{color};left:{left}%;animation-delay:{delay_ms}ms;"
        );
        html! { <span key={i} class="confetti-piece" {style} /> }
    });
    html! { <div class="confetti" aria-hidden="true">{ for pieces }</div> }
}

/// Result screen: the drawn prize with entrance styling, confetti, and
/// the optional share / collection-link / replay actions.
#[function_component(ResultScreen)]
pub fn result_screen(props: &Props) -> Html {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let entrance = Timeout::new(300, move || revealed.set(true));
            move || drop(entrance)
        });
    }

    let on_share = {
        let title = format!(
            "Got {name} from {campaign}!",
            name = props.outcome.name,
            campaign = props.config.title
        );
        let text = match props.outcome.rarity {
            Some(rarity) => format!(
                "I pulled the {tier}-tier {name}!",
                tier = rarity.label(),
                name = props.outcome.name
            ),
            None => format!("I pulled {name}!", name = props.outcome.name),
        };
        Callback::from(move |_: MouseEvent| {
            dom::share(&title, &text, &dom::current_url());
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="result-screen">
            { confetti_layer() }

            <div class={classes!("result-content", (*revealed).then_some("result-content-revealed"))}>
                <p class="result-congrats">{ "Congratulations!" }</p>
                <h1 class="result-heading">{ "Your draw" }</h1>

                <div class="result-card">
                    <div class="result-card-image">
                        <img src={props.outcome.image_url.clone()} alt={props.outcome.name.clone()} />
                        if let Some(rarity) = props.outcome.rarity {
                            <span class="rarity-badge">{ rarity.label() }</span>
                        }
                    </div>
                    <div class="result-card-body">
                        <h2 class="result-card-name">{ &props.outcome.name }</h2>
                        <p class="result-card-note">
                            { "It will arrive in your wallet within a minute or two." }
                        </p>
                    </div>
                </div>
            </div>

            <div class="action-bar">
                if props.config.flags.show_share_button {
                    <button class="share-button" onclick={on_share}>
                        { "Share your pull" }
                    </button>
                }
                if let Some(link) = &props.config.external_link_url {
                    <a
                        class="collection-link"
                        href={link.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "View the collection" }
                    </a>
                }
                if props.can_reset {
                    <button class="replay-button" onclick={on_reset}>
                        { "Draw again" }
                    </button>
                }
            </div>
        </div>
    }
}
