use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="navbar">
            <a href="#main" class="sr-only">{ "Saltar al contenido" }</a>
            <span class="brand">{ "TEMPO" }</span>
            <nav aria-label="Principal">
                { for Route::nav().into_iter().map(|route| {
                    let active = route == p.current
                        || matches!((&route, &p.current), (Route::Game, Route::Replay { .. }));
                    let label = route.label();
                    let onclick = {
                        let cb = p.on_navigate.clone();
                        Callback::from(move |_| cb.emit(route.clone()))
                    };
                    html! {
                        <button type="button" class={classes!("btn", "btn-ghost", active.then_some("active"))}
                            aria-current={active.then(|| AttrValue::from("page"))} {onclick}>
                            { label }
                        </button>
                    }
                }) }
            </nav>
        </header>
    }
}
