use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game")]
    Game,
    /// Replay the round a share code names.
    #[at("/game/:code")]
    Replay { code: String },
    #[at("/deck")]
    Deck,
    #[at("/rules")]
    Rules,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Short label for the header navigation.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Game | Self::Replay { .. } => "Jugar",
            Self::Deck => "Baraja",
            Self::Rules => "Reglas",
            Self::NotFound => "No encontrado",
        }
    }

    /// Routes shown in the header, in order.
    #[must_use]
    pub fn nav() -> [Self; 4] {
        [Self::Home, Self::Game, Self::Deck, Self::Rules]
    }
}
