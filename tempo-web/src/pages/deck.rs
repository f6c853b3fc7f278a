use crate::components::button::Button;
use crate::components::playing_card::PlayingCard;
use tempo_game::Catalog;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DeckPageProps {
    /// Catalog position to open on.
    #[prop_or_default]
    pub start: isize,
    pub on_home: Callback<()>,
}

/// Card browser; previous and next wrap around the deck.
#[function_component(DeckPage)]
pub fn deck_page(props: &DeckPageProps) -> Html {
    let start = props.start;
    let position = use_state(move || start);
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("deck unavailable: {err}");
            return html! { <p class="alert alert-error">{ "No se pudo cargar la baraja." }</p> };
        }
    };
    let card = catalog.wrapping_at(*position).clone();
    let shown = usize::try_from(position.rem_euclid(catalog.len().cast_signed())).unwrap_or(0) + 1;

    let step = |delta: isize| {
        let position = position.clone();
        Callback::from(move |_: MouseEvent| position.set(*position + delta))
    };
    let home = {
        let cb = props.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="deck-page" data-testid="deck-screen">
            <h1>{ "La baraja" }</h1>
            <p class="muted">{ format!("{} / {} · {}", shown, catalog.len(), card.category) }</p>
            <PlayingCard card={card} class={classes!("large")} />
            <div class="controls">
                <Button label="◀ ANTERIOR" onclick={step(-1)} />
                <Button label="SIGUIENTE ▶" onclick={step(1)} />
            </div>
            <Button label="INICIO" class={classes!("btn-ghost")} onclick={home} />
        </section>
    }
}
