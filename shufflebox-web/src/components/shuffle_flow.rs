use rand::SeedableRng;
use rand::rngs::SmallRng;
use shufflebox_core::{CampaignError, DemoCampaign, Screen, ShuffleSession};
use yew::prelude::*;

use super::ready_screen::ReadyScreen;
use super::result_screen::ResultScreen;
use super::reveal_screen::RevealScreen;
use crate::dom;

/// Visual skin applied to a demo flow; the sequencing logic is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTheme {
    Sunset,
    Midnight,
    Meadow,
}

impl FlowTheme {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sunset => "theme-sunset",
            Self::Midnight => "theme-midnight",
            Self::Meadow => "theme-meadow",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub demo: DemoCampaign,
    #[prop_or(FlowTheme::Sunset)]
    pub theme: FlowTheme,
}

pub enum Msg {
    TermsToggled(bool),
    StartRequested,
    RevealFinished,
    ResetRequested,
}

/// One configurable Ready → Animating → Result flow. Every demo page is
/// this component with a different campaign preset and theme; the session
/// is the single owner of all mutable flow state.
pub struct ShuffleFlow {
    session: Result<ShuffleSession, CampaignError>,
}

impl Component for ShuffleFlow {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: ctx.props().demo.config().map(ShuffleSession::new),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Ok(session) = self.session.as_mut() else {
            return false;
        };
        match msg {
            Msg::TermsToggled(accepted) => {
                session.set_terms_accepted(accepted);
                true
            }
            Msg::StartRequested => {
                let mut rng = SmallRng::seed_from_u64(dom::entropy_seed());
                session.start(&mut rng).is_some()
            }
            Msg::RevealFinished => session.finish_reveal(),
            Msg::ResetRequested => session.reset(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = match &self.session {
            Ok(session) => session,
            Err(err) => {
                return html! {
                    <main role="main" class="flow-error">
                        <h1>{ "This demo failed to load" }</h1>
                        <p>{ err.to_string() }</p>
                    </main>
                };
            }
        };

        let link = ctx.link();
        let screen = match session.screen() {
            Screen::Ready => html! {
                <ReadyScreen
                    config={session.config().clone()}
                    quota={session.quota()}
                    can_start={session.can_start()}
                    terms_accepted={session.terms_accepted()}
                    on_start={link.callback(|()| Msg::StartRequested)}
                    on_terms_toggle={link.callback(Msg::TermsToggled)}
                />
            },
            Screen::Animating => html! {
                <RevealScreen
                    lineup={session.config().lineup.clone()}
                    outcome_index={session.outcome_position().unwrap_or(0)}
                    on_complete={link.callback(|()| Msg::RevealFinished)}
                />
            },
            Screen::Result => match session.outcome() {
                Some(outcome) => html! {
                    <ResultScreen
                        config={session.config().clone()}
                        outcome={outcome.clone()}
                        can_reset={session.quota().has_remaining()}
                        on_reset={link.callback(|()| Msg::ResetRequested)}
                    />
                },
                // Unreachable: Result is only entered through a draw.
                None => Html::default(),
            },
        };

        html! {
            <div class={classes!("shuffle-flow", ctx.props().theme.class())}>
                { screen }
            </div>
        }
    }
}
