use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub heading: String,
}

/// Static degraded-mode panel. The only recovery is a full page reload.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let on_retry = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    });

    html! {
        <div class="error-state">
            <i class="fas fa-exclamation-triangle"></i>
            <h3>{&props.heading}</h3>
            <p>{"Please check your internet connection and try again."}</p>
            <button class="cta-button" onclick={on_retry}>{"Retry"}</button>
        </div>
    }
}
