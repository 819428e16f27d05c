use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="toast active" role="status" aria-live="polite">
                <span class="toast-text">{message.clone()}</span>
            </div>
        },
        None => html! {},
    }
}
