use crate::components::button::Button;
use tempo_game::{decode_to_seed, encode_friendly};
use yew::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum HomeAction {
    Play,
    /// Replay the round behind a share code (already normalized).
    Replay(String),
    Deck,
    Rules,
}

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_action: Callback<HomeAction>,
}

/// Canonical spelling of a share code, if it decodes to a round.
#[must_use]
pub fn normalize_code(raw: &str) -> Option<String> {
    decode_to_seed(raw).map(encode_friendly)
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let code = use_state(String::new);
    let normalized = normalize_code(&code);

    let emit = |action: HomeAction| {
        let cb = props.on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(action.clone()))
    };
    let oninput = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                code.set(input.value());
            }
        })
    };
    let replay = {
        let cb = props.on_action.clone();
        let normalized = normalized.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(code) = normalized.clone() {
                cb.emit(HomeAction::Replay(code));
            }
        })
    };
    let invalid = !code.trim().is_empty() && normalized.is_none();

    html! {
        <section class="home-page hero" data-testid="home-screen">
            <div class="hero-content text-center flex-col gap-6">
                <h1 class="title">{ "TEMPO" }</h1>
                <p class="subtitle">{ "La lotería de Road & Trail" }</p>
                <p>{ "Escucha al gritón, encuentra la carta en tu tablero y llénalo antes de quedarte sin vidas." }</p>
                <Button label="JUGAR" class={classes!("btn-primary", "btn-lg")} onclick={emit(HomeAction::Play)} />
                <div class="share-code-bar">
                    <label for="code"><strong>{ "Código de ronda" }</strong></label>
                    <div class="controls">
                        <input
                            id="code"
                            type="text"
                            class="share-code-input"
                            value={(*code).clone()}
                            {oninput}
                            aria-invalid={invalid.then(|| AttrValue::from("true"))}
                            aria-describedby="code-help"
                            placeholder="TP-ZAPATILLA07"
                        />
                        <Button label="REPETIR" onclick={replay} disabled={normalized.is_none()} />
                    </div>
                    <p id="code-help" class="muted">{ "Pega el código de una ronda para volver a jugarla." }</p>
                </div>
                <nav class="home-links">
                    <Button label="BARAJA" class={classes!("btn-ghost")} onclick={emit(HomeAction::Deck)} />
                    <Button label="REGLAS" class={classes!("btn-ghost")} onclick={emit(HomeAction::Rules)} />
                </nav>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalized_before_replay() {
        assert_eq!(
            normalize_code("  tp-zapatilla07 "),
            Some("TP-ZAPATILLA07".to_string())
        );
        assert_eq!(normalize_code("TP-ZAPATILLA"), None);
        assert_eq!(normalize_code(""), None);
        assert_eq!(
            normalize_code("tp-sol12-lo"),
            Some("TP-SOL12-10".to_string())
        );
    }
}
