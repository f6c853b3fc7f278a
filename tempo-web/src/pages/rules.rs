use crate::components::button::Button;
use tempo_game::caller_duration;
use tempo_game::constants::STARTING_LIVES;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RulesPageProps {
    pub on_play: Callback<()>,
}

#[function_component(RulesPage)]
pub fn rules_page(props: &RulesPageProps) -> Html {
    let play = {
        let cb = props.on_play.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let first = caller_duration(0).as_secs();
    let fastest = caller_duration(usize::MAX).as_secs_f32();

    html! {
        <section class="rules-page prose" data-testid="rules-screen">
            <h1>{ "Cómo se juega" }</h1>
            <ol>
                <li>{ "El gritón canta una carta de la baraja." }</li>
                <li>{ "Si la tienes en tu tablero, tócala para marcarla con un frijol." }</li>
                <li>{ "Si no la tienes, toca la carta cantada o pulsa SIGUIENTE." }</li>
                <li>{ "Si dejas pasar una carta de tu tablero, te la marcamos pero pierdes una vida." }</li>
                <li>{ "Tocar una carta equivocada también cuesta una vida." }</li>
                <li>{ "Completar una fila o columna se celebra; llenar las nueve casillas es ¡LOTERÍA!" }</li>
            </ol>
            <p>{ format!(
                "Empiezas con {STARTING_LIVES} vidas. Cada carta dura {first} segundos al principio y se acelera hasta {fastest:.1} segundos."
            ) }</p>
            <Button label="JUGAR" class={classes!("btn-primary")} onclick={play} />
        </section>
    }
}
