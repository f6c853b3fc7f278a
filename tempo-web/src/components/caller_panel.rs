use crate::components::button::Button;
use crate::components::playing_card::PlayingCard;
use tempo_game::Card;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: Option<Card>,
    /// Length of the running caller timer, drives the countdown bar.
    pub duration_ms: u32,
    /// Deck position, changes every time the timer restarts.
    pub position: Option<usize>,
    pub remaining: usize,
    pub enabled: bool,
    pub on_next: Callback<()>,
}

#[function_component(CallerPanel)]
pub fn caller_panel(p: &Props) -> Html {
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_card = on_next.clone();
    let bar_style = format!("animation-duration: {}ms", p.duration_ms);
    let bar_key = p.position.map_or_else(|| "pre".to_string(), |i| i.to_string());

    html! {
        <section class="caller-panel" aria-live="polite">
            <div class="timer-track" aria-hidden="true">
                <div key={bar_key} class="timer-fill" style={bar_style}></div>
            </div>
            {
                match &p.card {
                    Some(card) => html! {
                        <button type="button" class="caller-card" onclick={on_card} disabled={!p.enabled}
                            aria-label={format!("Carta cantada: {}", card.title)}>
                            <PlayingCard card={card.clone()} class={classes!("large")} />
                        </button>
                    },
                    None => html! {
                        <div class="caller-card placeholder">
                            <p>{ "¡Prepárate! La primera carta está por salir…" }</p>
                        </div>
                    },
                }
            }
            <p class="muted">{ format!("Quedan {} cartas", p.remaining) }</p>
            <Button label="SIGUIENTE" class={classes!("btn-primary")} onclick={on_next} disabled={!p.enabled} />
        </section>
    }
}
