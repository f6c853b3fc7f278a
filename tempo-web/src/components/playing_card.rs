use crate::paths::card_image;
use tempo_game::Card;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Card,
    #[prop_or_default]
    pub class: Classes,
}

/// Card face: image with the title underneath, Lotería style.
#[function_component(PlayingCard)]
pub fn playing_card(p: &Props) -> Html {
    let src = card_image(&p.card);
    let alt = p.card.title.clone();
    html! {
        <figure class={classes!("playing-card", p.class.clone())} data-card-id={p.card.id.to_string()}>
            <img {src} {alt} loading="lazy" draggable="false" />
            <figcaption>
                <span class="card-number">{ p.card.id }</span>
                <span class="card-title">{ p.card.title.clone() }</span>
            </figcaption>
        </figure>
    }
}
