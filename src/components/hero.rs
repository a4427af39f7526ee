use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::state::ContentKey;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_modal: Callback<ContentKey>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_download_click = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(button) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                let key = button.get_attribute("data-modal").unwrap_or_default();
                on_open_modal.emit(ContentKey::parse(&key));
            }
        })
    };

    html! {
        <section id="hero" class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <h1 class="hero-title">{"Edit Like a Studio. Ship Like a Creator."}</h1>
                <p class="hero-subtitle">
                    {"NovaCut Pro brings frame-accurate editing, assisted color grading and \
                      motion graphics together in one timeline."}
                </p>
                <div class="hero-cta-group">
                    <button
                        class="cta-button"
                        data-modal="download"
                        onclick={on_download_click}
                    >
                        <i class="fas fa-download"></i>
                        {"Download Now"}
                    </button>
                    <a href="#features" class="cta-secondary">{"Explore Features"}</a>
                </div>
                <div class="hero-stats">
                    <StatCounter target={250.0} suffix="+" label="Effects & Transitions" />
                    <StatCounter target={4.8} label="Average Rating" />
                    <StatCounter target={98.5} suffix="%" label="Render Reliability" />
                    <StatCounter target={42.0} label="Export Formats" />
                </div>
            </div>
        </section>
    }
}
