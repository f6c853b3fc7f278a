use crate::toasts::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(p: &Props) -> Html {
    html! {
        <div class="toast toast-top toast-center" role="status" aria-live="polite">
            { for p.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = {
                    let cb = p.on_dismiss.clone();
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <div key={id} class={classes!("alert", toast.alert_class())}>
                        <span>{ toast.message.clone() }</span>
                        <button type="button" class="btn btn-ghost btn-xs" aria-label="Cerrar" {onclick}>{ "✕" }</button>
                    </div>
                }
            }) }
        </div>
    }
}
