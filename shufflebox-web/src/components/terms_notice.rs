use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub accepted: bool,
    #[prop_or_default]
    pub terms_url: Option<AttrValue>,
    pub on_toggle: Callback<bool>,
}

/// Terms agreement row: checkbox plus an outbound link to the full terms.
#[function_component(TermsNotice)]
pub fn terms_notice(props: &Props) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_toggle.emit(input.checked());
            }
        })
    };

    html! {
        <label class="terms-notice">
            <input
                type="checkbox"
                checked={props.accepted}
                {onchange}
            />
            <span class="terms-notice-text">
                { "I have read and agree to the " }
                if let Some(url) = &props.terms_url {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                        { "campaign terms" }
                    </a>
                } else {
                    { "campaign terms" }
                }
            </span>
        </label>
    }
}
