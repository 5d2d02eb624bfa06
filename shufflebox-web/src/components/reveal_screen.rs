use shufflebox_core::{
    LineupEntry, RevealAnimator, RevealDriver, RevealFrame, RevealPhase, RevealTiming,
};
use yew::prelude::*;

use crate::timer::BrowserTimerHost;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub lineup: Vec<LineupEntry>,
    pub outcome_index: usize,
    pub on_complete: Callback<()>,
}

pub enum Msg {
    Frame(RevealFrame),
    Finished,
}

/// Timer-driven reveal: cycles the lineup card until the animator settles
/// on the outcome, then reports completion upward exactly once.
///
/// The driver starts in `rendered` (client only) and is cancelled on
/// destroy, so navigating away mid-reveal never fires a stale completion.
pub struct RevealScreen {
    driver: Option<RevealDriver<BrowserTimerHost>>,
    display_index: usize,
    settling: bool,
}

impl Component for RevealScreen {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            driver: None,
            display_index: 0,
            settling: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Frame(frame) => {
                self.display_index = frame.display_index;
                self.settling = frame.phase != RevealPhase::Cycling;
                true
            }
            Msg::Finished => {
                ctx.props().on_complete.emit(());
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let props = ctx.props();
        let animator = match RevealAnimator::new(
            props.lineup.len(),
            props.outcome_index,
            RevealTiming::default(),
        ) {
            Ok(animator) => animator,
            Err(err) => {
                // Bad props are a configuration bug; skip straight to the
                // result rather than wedge the flow on this screen.
                log::error!("reveal could not start: {err}");
                props.on_complete.emit(());
                return;
            }
        };

        let frame_link = ctx.link().clone();
        let done_link = ctx.link().clone();
        self.driver = Some(RevealDriver::start(
            BrowserTimerHost,
            animator,
            move |frame| frame_link.send_message(Msg::Frame(frame)),
            move || done_link.send_message(Msg::Finished),
        ));
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(driver) = self.driver.take() {
            driver.cancel();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.props().lineup.get(self.display_index);
        html! {
            <div class="reveal-screen">
                <h2 class="reveal-heading">{ "Shuffling..." }</h2>
                <div class="reveal-stage">
                    <div class={classes!("reveal-card", self.settling.then_some("reveal-card-settling"))}>
                        if let Some(entry) = current {
                            <div class="reveal-card-image">
                                <img src={entry.image_url.clone()} alt={entry.name.clone()} />
                            </div>
                            <p class="reveal-card-name">{ &entry.name }</p>
                        }
                    </div>
                </div>
            </div>
        }
    }
}
