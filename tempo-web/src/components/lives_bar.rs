use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub lives: u8,
    pub max: u8,
}

#[function_component(LivesBar)]
pub fn lives_bar(p: &Props) -> Html {
    let label = format!("Vidas: {} de {}", p.lives, p.max);
    html! {
        <div class="lives-bar" role="meter" aria-label={label}
            aria-valuemin="0" aria-valuemax={p.max.to_string()} aria-valuenow={p.lives.to_string()}>
            { for (0..p.max).map(|slot| {
                let class = if slot < p.lives { "life" } else { "life lost" };
                html! { <span {class} aria-hidden="true">{ "❤" }</span> }
            }) }
        </div>
    }
}
