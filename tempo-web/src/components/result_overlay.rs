use crate::components::button::Button;
use tempo_game::{Outcome, Snapshot};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub snapshot: Snapshot,
    pub on_restart: Callback<()>,
    pub on_home: Callback<()>,
}

/// End-of-round dialog; renders nothing while the round is in progress.
#[function_component(ResultOverlay)]
pub fn result_overlay(p: &Props) -> Html {
    let (title, body) = match p.snapshot.outcome {
        Outcome::InProgress => return Html::default(),
        Outcome::Victory => ("¡LOTERÍA!", "Llenaste el tablero. ¡Eres un crack!"),
        Outcome::GameOver => ("¡Se acabaron las vidas!", "Inténtalo otra vez."),
        Outcome::Stalled => (
            "Se acabó la baraja",
            "No quedan cartas por cantar. Empieza otra ronda.",
        ),
    };
    let tally = p.snapshot.tally;
    let restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let home = {
        let cb = p.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true" aria-labelledby="result-title">
            <div class={classes!("modal-box", format!("result-{}", p.snapshot.outcome))}>
                <h2 id="result-title">{ title }</h2>
                <p>{ body }</p>
                <ul class="result-tally">
                    <li>{ format!("Aciertos: {}", tally.matches) }</li>
                    <li>{ format!("Perdidas: {}", tally.misses) }</li>
                    <li>{ format!("Errores: {}", tally.wrong_taps) }</li>
                    <li>{ format!("Líneas: {}", p.snapshot.completed_lines.len()) }</li>
                </ul>
                if let Some(code) = p.snapshot.share_code.clone() {
                    <p class="share-code">{ "Código de la ronda: " }<code>{ code }</code></p>
                }
                <div class="modal-action">
                    <Button label="JUGAR DE NUEVO" class={classes!("btn-primary")} onclick={restart} />
                    <Button label="INICIO" onclick={home} />
                </div>
            </div>
        </div>
    }
}
