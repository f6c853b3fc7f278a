use crate::components::header::Header;
use crate::pages::deck::DeckPage;
use crate::pages::game::GamePage;
use crate::pages::home::{HomeAction, HomePage};
use crate::pages::not_found::NotFound;
use crate::pages::rules::RulesPage;
use crate::router::Route;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
    });
    render_route(&route, crate::dom::entropy_seed(), &navigate)
}

/// Where a home-screen action leads.
#[must_use]
pub fn home_action_route(action: HomeAction) -> Route {
    match action {
        HomeAction::Play => Route::Game,
        HomeAction::Replay(code) => Route::Replay { code },
        HomeAction::Deck => Route::Deck,
        HomeAction::Rules => Route::Rules,
    }
}

/// Header plus the page for `route`. `seed` is only read when a game page mounts.
#[must_use]
pub fn render_route(route: &Route, seed: u64, navigate: &Callback<Route>) -> Html {
    let go = |target: Route| {
        let navigate = navigate.clone();
        Callback::from(move |()| navigate.emit(target.clone()))
    };
    let on_action = {
        let navigate = navigate.clone();
        Callback::from(move |action: HomeAction| navigate.emit(home_action_route(action)))
    };

    let page = match route {
        Route::Home => html! { <HomePage {on_action} /> },
        Route::Game => html! { <GamePage key="fresh" {seed} on_home={go(Route::Home)} /> },
        Route::Replay { code } => html! {
            <GamePage key={code.clone()} {seed} code={AttrValue::from(code.clone())} on_home={go(Route::Home)} />
        },
        Route::Deck => html! { <DeckPage on_home={go(Route::Home)} /> },
        Route::Rules => html! { <RulesPage on_play={go(Route::Game)} /> },
        Route::NotFound => html! { <NotFound on_go_home={go(Route::Home)} /> },
    };

    html! {
        <>
            <Header current={route.clone()} on_navigate={navigate.clone()} />
            <main id="main">{ page }</main>
        </>
    }
}
