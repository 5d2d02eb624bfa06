use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::classic::ClassicDemoPage;
use crate::pages::home::HomePage;
use crate::pages::mystery::MysteryDemoPage;
use crate::pages::not_found::NotFound;
use crate::pages::terms::TermsDemoPage;
use crate::router::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Classic => html! { <ClassicDemoPage /> },
        Route::Mystery => html! { <MysteryDemoPage /> },
        Route::Terms => html! { <TermsDemoPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Main application component providing browser routing
///
/// Sets up the router context for the whole app and dispatches each route
/// to its demo page. This is the component mounted to the DOM at startup.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
