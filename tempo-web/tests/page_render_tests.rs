use futures::executor::block_on;
use tempo_web::pages::{
    deck::{DeckPage, DeckPageProps},
    game::{GamePage, GamePageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
    rules::{RulesPage, RulesPageProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn home_page_offers_play_and_replay() {
    let props = HomePageProps {
        on_action: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("data-testid=\"home-screen\""));
    assert!(html.contains("JUGAR"));
    assert!(html.contains("share-code-input"));
}

#[test]
fn rules_page_states_lives_and_timing() {
    let props = RulesPageProps {
        on_play: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RulesPage>::with_props(props).render());
    assert!(html.contains("Cómo se juega"));
    assert!(html.contains("Empiezas con 3 vidas"));
    assert!(html.contains("10 segundos"));
}

#[test]
fn deck_page_wraps_backwards_to_the_last_card() {
    let props = DeckPageProps {
        start: -1,
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DeckPage>::with_props(props).render());
    assert!(html.contains("54 / 54"), "{html}");
}

#[test]
fn deck_page_opens_on_first_card() {
    let props = DeckPageProps {
        start: 0,
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DeckPage>::with_props(props).render());
    assert!(html.contains("1 / 54"));
    assert!(html.contains("data-card-id=\"1\""));
}

#[test]
fn not_found_page_links_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Volver al inicio"));
}

#[test]
fn game_page_renders_board_and_preroll() {
    let props = GamePageProps {
        seed: 42,
        code: None,
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("data-testid=\"game-screen\""));
    assert_eq!(html.matches("role=\"gridcell\"").count(), 9);
    assert!(html.contains("Líneas: 0"));
    assert!(html.contains("round-code"));
    assert!(!html.contains("modal-open"), "no result dialog before play");
}

#[test]
fn game_page_replays_share_code() {
    let props = GamePageProps {
        seed: 1,
        code: Some(AttrValue::from("tp-zapatilla07")),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("TP-ZAPATILLA07"));
}
