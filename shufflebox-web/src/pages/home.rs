use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

struct DemoIndexEntry {
    route: Route,
    description: &'static str,
    thumbnail: &'static str,
}

const HERO_THUMBNAIL: &str = "https://arweave.net/ul3PS95k8Uw3KiRegdwsinAPp-pq65GAK1NyMi9WSN8";

fn demo_index() -> Vec<DemoIndexEntry> {
    vec![
        DemoIndexEntry {
            route: Route::Classic,
            description: "Full lineup on display with rarity tiers and draw odds.",
            thumbnail: HERO_THUMBNAIL,
        },
        DemoIndexEntry {
            route: Route::Mystery,
            description: "The lineup stays hidden; everything rides on the reveal.",
            thumbnail: HERO_THUMBNAIL,
        },
        DemoIndexEntry {
            route: Route::Terms,
            description: "Same draw, but gated on accepting the campaign terms.",
            thumbnail: HERO_THUMBNAIL,
        },
    ]
}

/// Index of the shipped demo flows.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="home-page">
            <h1 class="home-title">{ "Shufflebox Demos" }</h1>
            <p class="home-subtitle">{ "Shuffle reveal demo screens" }</p>
            <div class="demo-list">
                { for demo_index().into_iter().map(|demo| {
                    let title = demo.route.title();
                    html! {
                        <Link<Route> to={demo.route} classes="demo-card">
                            <img class="demo-card-thumb" src={demo.thumbnail} alt={title} />
                            <div class="demo-card-body">
                                <h2 class="demo-card-title">{ title }</h2>
                                <p class="demo-card-description">{ demo.description }</p>
                            </div>
                        </Link<Route>>
                    }
                }) }
            </div>
        </div>
    }
}
