use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[at("/mystery")]
    Mystery,
    #[at("/terms")]
    Terms,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Label shown for this route on the home index
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Shufflebox Demos",
            Self::Classic => "NFT Shuffle Distribution",
            Self::Mystery => "Mystery Shuffle",
            Self::Terms => "Shuffle with Terms Gate",
            Self::NotFound => "Not Found",
        }
    }
}
