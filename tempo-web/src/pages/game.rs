use crate::components::board_grid::BoardGrid;
use crate::components::caller_panel::CallerPanel;
use crate::components::lives_bar::LivesBar;
use crate::components::result_overlay::ResultOverlay;
use crate::components::toast_stack::ToastStack;
use crate::dom;
use crate::driver::SessionDriver;
use crate::game::load_session;
use crate::toasts::{TOAST_MS, Toast, ToastAction, ToastQueue};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use tempo_game::{Notice, Snapshot};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct GamePageProps {
    pub seed: u64,
    /// Share code of a round to replay.
    #[prop_or_default]
    pub code: Option<AttrValue>,
    pub on_home: Callback<()>,
}

/// Rendered view plus a counter bumped on every publish, so the timer effect
/// re-arms even when a firing left the snapshot unchanged.
#[derive(Clone, PartialEq)]
struct Frame {
    snapshot: Snapshot,
    pulse: u64,
}

#[derive(Clone)]
struct Handles {
    driver: Rc<RefCell<SessionDriver>>,
    frame: UseStateHandle<Frame>,
    toasts: UseReducerHandle<ToastQueue>,
    next_toast: Rc<RefCell<u64>>,
}

impl Handles {
    fn publish(&self, notices: Vec<Notice>) {
        if !notices.is_empty() {
            let mut next_id = self.next_toast.borrow_mut();
            let toasts: Vec<_> = notices
                .into_iter()
                .map(|notice| {
                    let toast = Toast::from_notice(*next_id, notice);
                    *next_id += 1;
                    toast
                })
                .collect();
            for id in toasts.iter().map(|toast| toast.id) {
                let queue = self.toasts.clone();
                Timeout::new(TOAST_MS, move || queue.dispatch(ToastAction::Dismiss(id))).forget();
            }
            self.toasts.dispatch(ToastAction::Push(toasts));
        }
        self.frame.set(Frame {
            snapshot: self.driver.borrow().snapshot(),
            pulse: self.frame.pulse.wrapping_add(1),
        });
    }
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let driver = {
        let seed = props.seed;
        let code = props.code.clone();
        use_mut_ref(move || SessionDriver::new(load_session(seed, code.as_deref()), dom::now_ms()))
    };
    let frame = {
        let driver = driver.clone();
        use_state(move || Frame {
            snapshot: driver.borrow().snapshot(),
            pulse: 0,
        })
    };
    let toasts = use_reducer(ToastQueue::default);
    let next_toast = use_mut_ref(|| 0_u64);
    let handles = Handles {
        driver: driver.clone(),
        frame: frame.clone(),
        toasts: toasts.clone(),
        next_toast,
    };

    // One browser timeout, re-armed for the session's next deadline after every publish.
    {
        let handles = handles.clone();
        use_effect_with((*frame).clone(), move |_| {
            let delay = handles.driver.borrow().delay_ms(dom::now_ms());
            let timeout = delay.map(|ms| {
                Timeout::new(ms, move || {
                    let notices = handles.driver.borrow_mut().tick(dom::now_ms());
                    handles.publish(notices);
                })
            });
            move || drop(timeout)
        });
    }
    {
        let driver = driver.clone();
        use_effect_with((), move |_| move || driver.borrow_mut().teardown());
    }

    let on_tap = {
        let handles = handles.clone();
        Callback::from(move |index: usize| {
            let (_, notices) = handles.driver.borrow_mut().tap(dom::now_ms(), index);
            handles.publish(notices);
        })
    };
    let on_next = {
        let handles = handles.clone();
        Callback::from(move |()| {
            let notices = handles.driver.borrow_mut().next_card(dom::now_ms());
            handles.publish(notices);
        })
    };
    let on_restart = {
        let handles = handles.clone();
        Callback::from(move |()| {
            handles.driver.borrow_mut().restart(dom::now_ms());
            handles.toasts.dispatch(ToastAction::Clear);
            handles.publish(Vec::new());
        })
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let snapshot = &frame.snapshot;
    html! {
        <div class="game-page" data-testid="game-screen">
            <div class="game-status">
                <LivesBar lives={snapshot.lives} max={snapshot.starting_lives} />
                <span class="lines-count">{ format!("Líneas: {}", snapshot.completed_lines.len()) }</span>
                if let Some(code) = snapshot.share_code.clone() {
                    <code class="round-code" title="Código de la ronda">{ code }</code>
                }
            </div>
            <CallerPanel
                card={snapshot.caller_card.clone()}
                duration_ms={snapshot.duration_ms}
                position={snapshot.caller_index}
                remaining={snapshot.remaining_cards()}
                enabled={snapshot.is_playing}
                {on_next}
            />
            <BoardGrid cells={snapshot.cells.clone()} interactive={snapshot.is_playing} {on_tap} />
            <ToastStack toasts={toasts.items.clone()} {on_dismiss} />
            <ResultOverlay snapshot={snapshot.clone()} {on_restart} on_home={props.on_home.clone()} />
        </div>
    }
}
