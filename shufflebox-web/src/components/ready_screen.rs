use shufflebox_core::{CampaignConfig, Quota};
use yew::prelude::*;

use super::prize_card::PrizeCard;
use super::terms_notice::TermsNotice;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub config: CampaignConfig,
    pub quota: Quota,
    pub can_start: bool,
    pub terms_accepted: bool,
    pub on_start: Callback<()>,
    pub on_terms_toggle: Callback<bool>,
}

/// Render an ISO-ish timestamp as `YYYY/M/D`, dropping leading zeros the
/// way the campaign banner displays dates.
fn format_date(timestamp: &str) -> String {
    let date_part = timestamp.split('T').next().unwrap_or(timestamp);
    let mut fields = date_part.splitn(3, '-');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(year), Some(month), Some(day)) => {
            let month = month.trim_start_matches('0');
            let day = day.trim_start_matches('0');
            format!("{year}/{month}/{day}")
        }
        _ => timestamp.to_string(),
    }
}

/// Main screen before the draw: hero banner, campaign info, optional
/// lineup grid, and the gated shuffle button.
#[function_component(ReadyScreen)]
pub fn ready_screen(props: &Props) -> Html {
    let config = &props.config;
    let onclick = {
        let on_start = props.on_start.clone();
        let can_start = props.can_start;
        Callback::from(move |_: MouseEvent| {
            if can_start {
                on_start.emit(());
            }
        })
    };

    let button_label = if props.quota.has_remaining() {
        "Shuffle"
    } else {
        "No draws remaining"
    };

    html! {
        <div class="ready-screen">
            <div class="hero">
                <img src={config.image_url.clone()} alt={config.title.clone()} />
            </div>

            <section class="campaign-card">
                <h1 class="campaign-title">{ &config.title }</h1>
                <p class="campaign-description">{ &config.description }</p>
                <div class="campaign-info-row">
                    <div class="info-cell">
                        <p class="info-label">{ "Campaign period" }</p>
                        <p class="info-value">
                            { format!(
                                "{} - {}",
                                format_date(&config.active_window.start),
                                format_date(&config.active_window.end),
                            ) }
                        </p>
                    </div>
                    <div class="info-cell">
                        <p class="info-label">{ "Draws left" }</p>
                        <p class="info-value">
                            <span class="quota-remaining">{ props.quota.remaining }</span>
                            <span class="quota-max">{ format!(" / {}", props.quota.max) }</span>
                        </p>
                    </div>
                </div>
            </section>

            if config.flags.show_lineup {
                <section class="lineup-section">
                    <h2 class="lineup-heading">{ "Lineup" }</h2>
                    <div class="lineup-grid">
                        { for config.lineup.iter().map(|entry| html! {
                            <PrizeCard
                                key={entry.id}
                                entry={entry.clone()}
                                show_probability={config.flags.show_probability}
                            />
                        }) }
                    </div>
                </section>
            }

            <div class="action-bar">
                if config.flags.require_terms_agreement {
                    <TermsNotice
                        accepted={props.terms_accepted}
                        terms_url={config.terms_url.clone().map(AttrValue::from)}
                        on_toggle={props.on_terms_toggle.clone()}
                    />
                }
                <button
                    class="shuffle-button"
                    disabled={!props.can_start}
                    {onclick}
                >
                    { button_label }
                </button>
            </div>
        </div>
    }
}
