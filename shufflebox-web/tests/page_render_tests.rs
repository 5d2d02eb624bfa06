use futures::executor::block_on;
use shufflebox_core::{DemoCampaign, Quota};
use shufflebox_web::components::ready_screen::{Props as ReadyProps, ReadyScreen};
use shufflebox_web::components::result_screen::{Props as ResultProps, ResultScreen};
use shufflebox_web::components::reveal_screen::{Props as RevealProps, RevealScreen};
use shufflebox_web::components::shuffle_flow::{FlowTheme, Props as FlowProps, ShuffleFlow};
use yew::{Callback, LocalServerRenderer};

fn ready_props(demo: DemoCampaign) -> ReadyProps {
    let config = demo.config().unwrap();
    let quota = config.quota;
    ReadyProps {
        config,
        quota,
        can_start: true,
        terms_accepted: false,
        on_start: Callback::noop(),
        on_terms_toggle: Callback::noop(),
    }
}

#[test]
fn classic_ready_screen_shows_lineup_and_odds() {
    let html = block_on(
        LocalServerRenderer::<ReadyScreen>::with_props(ready_props(DemoCampaign::Classic))
            .render(),
    );
    assert!(html.contains("Summer Collection 2025"));
    assert!(html.contains("Lineup"));
    assert!(html.contains("Legendary Dragon"));
    assert!(html.contains("40%"));
    assert!(html.contains("2025/1/1"));
    assert!(html.contains("Shuffle"));
}

#[test]
fn mystery_ready_screen_hides_the_lineup() {
    let html = block_on(
        LocalServerRenderer::<ReadyScreen>::with_props(ready_props(DemoCampaign::Mystery))
            .render(),
    );
    assert!(!html.contains("Legendary Dragon"));
    assert!(!html.contains("lineup-grid"));
}

#[test]
fn terms_ready_screen_renders_the_agreement_row() {
    let html = block_on(
        LocalServerRenderer::<ReadyScreen>::with_props(ready_props(DemoCampaign::Terms)).render(),
    );
    assert!(html.contains("terms-notice"));
    assert!(html.contains("https://example.com/terms"));
}

#[test]
fn exhausted_quota_disables_the_shuffle_button() {
    let mut props = ready_props(DemoCampaign::Classic);
    props.quota = Quota { remaining: 0, max: 3 };
    props.can_start = false;
    let html = block_on(LocalServerRenderer::<ReadyScreen>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("No draws remaining"));
}

#[test]
fn reveal_screen_shows_the_first_entry_before_any_tick() {
    let config = DemoCampaign::Classic.config().unwrap();
    let props = RevealProps {
        lineup: config.lineup.clone(),
        outcome_index: 1,
        on_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RevealScreen>::with_props(props).render());
    assert!(html.contains("Shuffling..."));
    assert!(html.contains(&config.lineup[0].name));
}

#[test]
fn result_screen_renders_outcome_share_and_replay() {
    let config = DemoCampaign::Classic.config().unwrap();
    let outcome = (&config.lineup[1]).into();
    let props = ResultProps {
        config,
        outcome,
        can_reset: true,
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultScreen>::with_props(props).render());
    assert!(html.contains("Congratulations!"));
    assert!(html.contains("Golden Phoenix"));
    assert!(html.contains("Share your pull"));
    assert!(html.contains("https://example.com/collection"));
    assert!(html.contains("Draw again"));
}

#[test]
fn result_screen_share_and_replay_can_be_absent() {
    let mut config = DemoCampaign::Classic.config().unwrap();
    config.flags.show_share_button = false;
    config.external_link_url = None;
    let outcome = (&config.lineup[0]).into();
    let props = ResultProps {
        config,
        outcome,
        can_reset: false,
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultScreen>::with_props(props).render());
    assert!(!html.contains("Share your pull"));
    assert!(!html.contains("View the collection"));
    assert!(!html.contains("Draw again"));
}

#[test]
fn flow_opens_on_the_ready_screen_with_its_theme() {
    for (demo, theme, class) in [
        (DemoCampaign::Classic, FlowTheme::Sunset, "theme-sunset"),
        (DemoCampaign::Mystery, FlowTheme::Midnight, "theme-midnight"),
        (DemoCampaign::Terms, FlowTheme::Meadow, "theme-meadow"),
    ] {
        let props = FlowProps { demo, theme };
        let html = block_on(LocalServerRenderer::<ShuffleFlow>::with_props(props).render());
        assert!(html.contains(class));
        assert!(html.contains("ready-screen"));
    }
}
