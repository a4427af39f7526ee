use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::data::product::Product;
use crate::state::ContentKey;
use crate::utils::format::with_thousands;
use crate::utils::observe::reveal_on_scroll;

#[derive(Properties, PartialEq)]
pub struct DownloadSectionProps {
    pub product: Product,
    pub downloads: u64,
    pub on_open_modal: Callback<ContentKey>,
}

/// The download card: product summary, live counter and the modal trigger.
/// Re-renders on every counter change, so the displayed figure is always
/// current.
#[function_component(DownloadSection)]
pub fn download_section(props: &DownloadSectionProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = card_ref.cast::<Element>() {
                    reveal_on_scroll(&element);
                }
                || ()
            },
            (),
        );
    }

    let on_trigger_click = {
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

    let product = &props.product;
    html! {
        <div id="download-card" ref={card_ref} class="download-card">
            <div
                class="download-image"
                style={format!("background-image: url('{}')", product.image_url)}
            ></div>
            <div class="download-info">
                <h3>{format!("{} {}", product.name, product.version)}</h3>
                <p class="download-description">{&product.description}</p>
                <div class="download-meta">
                    <span><i class="fas fa-hdd"></i>{format!(" {}", product.size_label)}</span>
                    <span>
                        <i class="fas fa-download"></i>
                        {format!(" {} downloads", with_thousands(props.downloads))}
                    </span>
                    <span><i class="fas fa-shield-alt"></i>{" Virus scanned & safe"}</span>
                </div>
                <button
                    class="download-button"
                    data-modal="download"
                    onclick={on_trigger_click}
                >
                    <i class="fas fa-download"></i>
                    {"Download Now"}
                </button>
                if config::SHOW_MONTHLY_DOWNLOADS {
                    <div class="download-counter">
                        {format!("Downloaded {} times this month", with_thousands(props.downloads))}
                    </div>
                }
            </div>
        </div>
    }
}
