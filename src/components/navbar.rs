use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::state::ContentKey;

const NAV_SECTIONS: [(&str, &str); 3] = [
    ("Features", "features"),
    ("Preview", "preview"),
    ("Download", "download"),
];

/// Scrolls a section under the fixed header instead of jumping to it.
fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    let header_offset = document
        .get_element_by_id("header")
        .map(|header| header.client_height() as f64)
        .unwrap_or(0.0);
    let top =
        target.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0) - header_offset;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub on_open_modal: Callback<ContentKey>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    // Header picks up the `scrolled` class past 100px of scroll.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn Fn()>::new(move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(y) = window.scroll_y() {
                            scrolled.set(y > 100.0);
                        }
                    }
                });
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    // Anchor links scroll smoothly and close the mobile menu.
    let on_section_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(link) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                if let Some(section) = link.get_attribute("data-section") {
                    scroll_to_section(&section);
                }
            }
            menu_open.set(false);
        })
    };

    let on_modal_click = {
        let menu_open = menu_open.clone();
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(link) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                let key = link.get_attribute("data-modal").unwrap_or_default();
                on_open_modal.emit(ContentKey::parse(&key));
            }
            menu_open.set(false);
        })
    };

    html! {
        <header id="header" class={classes!("header", scrolled.then_some("scrolled"))}>
            <nav class="nav">
                <a href="/" class="nav-brand">
                    <i class="fas fa-film"></i>
                    <span>{"NovaCut Pro"}</span>
                </a>
                <div class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for NAV_SECTIONS.iter().map(|(label, id)| html! {
                        <a
                            href={format!("#{id}")}
                            class="nav-link"
                            data-section={*id}
                            onclick={on_section_click.clone()}
                        >
                            {*label}
                        </a>
                    }) }
                    <a
                        href="#"
                        class="nav-link"
                        data-modal="contact"
                        onclick={on_modal_click.clone()}
                    >
                        {"Contact"}
                    </a>
                </div>
                <button class="nav-toggle" onclick={toggle_menu} aria-label="Toggle navigation">
                    <i class={if *menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
            </nav>
        </header>
    }
}
