use futures::executor::block_on;
use tempo_game::{Catalog, GameSession, Outcome, Severity};
use tempo_web::components::{
    board_grid::{BoardGrid, Props as BoardProps},
    header::{Header, Props as HeaderProps},
    result_overlay::{Props as ResultProps, ResultOverlay},
    toast_stack::{Props as ToastProps, ToastStack},
};
use tempo_web::router::Route;
use tempo_web::toasts::Toast;
use yew::{Callback, LocalServerRenderer};

fn session() -> GameSession {
    GameSession::with_defaults(Catalog::builtin().expect("builtin deck"), 9)
}

#[test]
fn board_grid_marks_and_shakes_cells() {
    let mut cells = session().snapshot().cells;
    cells[0].marked = true;
    cells[4].shaken = true;
    let props = BoardProps {
        cells,
        interactive: true,
        on_tap: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BoardGrid>::with_props(props).render());
    assert_eq!(html.matches("role=\"gridcell\"").count(), 9);
    assert_eq!(html.matches("class=\"bean\"").count(), 1);
    assert!(html.contains("shake"));
    assert!(html.contains("(marcada)"));
}

#[test]
fn result_overlay_hidden_while_in_progress() {
    let props = ResultProps {
        snapshot: session().snapshot(),
        on_restart: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultOverlay>::with_props(props).render());
    assert!(!html.contains("modal-open"));
}

#[test]
fn result_overlay_shows_victory_tally_and_code() {
    let session = session();
    let mut snapshot = session.snapshot();
    snapshot.outcome = Outcome::Victory;
    snapshot.victory = true;
    snapshot.tally.matches = 9;
    let code = snapshot.share_code.clone().expect("seeded round has a code");
    let props = ResultProps {
        snapshot,
        on_restart: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultOverlay>::with_props(props).render());
    assert!(html.contains("¡LOTERÍA!"));
    assert!(html.contains("Aciertos: 9"));
    assert!(html.contains(&code));
}

#[test]
fn result_overlay_explains_game_over() {
    let mut snapshot = session().snapshot();
    snapshot.outcome = Outcome::GameOver;
    snapshot.game_over = true;
    let props = ResultProps {
        snapshot,
        on_restart: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultOverlay>::with_props(props).render());
    assert!(html.contains("Se acabaron las vidas"));
}

#[test]
fn header_marks_game_active_on_replay() {
    let props = HeaderProps {
        current: Route::Replay {
            code: "TP-SOL01".into(),
        },
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("href=\"#main\""));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert!(html.contains("Baraja"));
}

#[test]
fn toast_stack_renders_each_message() {
    let toasts = vec![
        Toast {
            id: 1,
            severity: Severity::Error,
            message: "uno".into(),
        },
        Toast {
            id: 2,
            severity: Severity::Success,
            message: "dos".into(),
        },
    ];
    let props = ToastProps {
        toasts,
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ToastStack>::with_props(props).render());
    assert!(html.contains("uno") && html.contains("dos"));
    assert!(html.contains("alert-error"));
}
