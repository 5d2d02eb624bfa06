use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "There is no demo at this address." }</p>
            <Link<Route> to={Route::Home} classes="back-home">
                { "Back to the demo index" }
            </Link<Route>>
        </section>
    }
}
