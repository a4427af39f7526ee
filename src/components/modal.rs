//! The singleton overlay. Open/closed state lives in the app reducer; this
//! component only exists while the modal is open, so mounting and unmounting
//! map exactly onto the open and close transitions.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, KeyboardEvent};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::data::product::Product;
use crate::state::ContentKey;
use crate::utils::format::with_thousands;

/// A simulated download provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Drive,
    Mediafire,
}

impl Mirror {
    pub fn source(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Mediafire => "mediafire",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Drive => "Download via Google Drive",
            Self::Mediafire => "Download via Mediafire",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Self::Drive => "Fast & Reliable",
            Self::Mediafire => "Alternative Mirror",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Drive => "fab fa-google-drive",
            Self::Mediafire => "fas fa-cloud-download-alt",
        }
    }

    /// Redirect target carrying the mirror label as a query parameter.
    pub fn redirect_url(self) -> String {
        format!("{}?source={}", config::DOWNLOAD_PAGE, self.source())
    }
}

fn open_download_popup(mirror: Mirror) {
    if let Some(window) = web_sys::window() {
        // A blocked popup returns Ok(None); accepted as-is.
        if let Err(err) = window.open_with_url_and_target_and_features(
            &mirror.redirect_url(),
            "_blank",
            config::POPUP_FEATURES,
        ) {
            gloo_console::error!("failed to open download window", err);
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub content_key: ContentKey,
    pub product: Product,
    pub downloads: u64,
    pub on_close: Callback<()>,
    pub on_download_requested: Callback<()>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close_ref = use_node_ref();

    // Page scroll is suppressed for as long as the modal is mounted.
    use_effect_with_deps(
        move |_| {
            set_body_overflow("hidden");
            || set_body_overflow("")
        },
        (),
    );

    // Escape closes from anywhere on the page.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                });
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Focus lands on the close control on open and again on content swaps.
    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(button) = close_ref.cast::<HtmlElement>() {
                    let _ = button.focus();
                }
                || ()
            },
            props.content_key,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only clicks on the overlay background close; clicks inside the modal
    // body bubble up with a different target.
    let overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let hit_backdrop = match (e.target(), e.current_target()) {
                (Some(target), Some(current)) => target == current,
                _ => false,
            };
            if hit_backdrop {
                on_close.emit(());
            }
        })
    };

    let title = props.content_key.title(&props.product);
    html! {
        <div id="modal-overlay" class="modal-overlay active" onclick={overlay_click}>
            <div id="modal" class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h3 id="modal-title" class="modal-title">{title}</h3>
                    <button id="modal-close" class="modal-close" ref={close_ref} onclick={close}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div id="modal-body" class="modal-body">
                    { match props.content_key {
                        ContentKey::Download => html! {
                            <DownloadBody
                                product={props.product.clone()}
                                downloads={props.downloads}
                                on_close={props.on_close.clone()}
                                on_download_requested={props.on_download_requested.clone()}
                            />
                        },
                        ContentKey::Contact => contact_body(),
                        ContentKey::Unknown => html! { <p>{"Content not found."}</p> },
                    } }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DownloadBodyProps {
    product: Product,
    downloads: u64,
    on_close: Callback<()>,
    on_download_requested: Callback<()>,
}

#[function_component(DownloadBody)]
fn download_body(props: &DownloadBodyProps) -> Html {
    // Which mirror button is mid-redirect, if any.
    let redirecting = use_state_eq(|| None::<Mirror>);

    let on_mirror = {
        let redirecting = redirecting.clone();
        let on_close = props.on_close.clone();
        let on_download_requested = props.on_download_requested.clone();
        let product_name = props.product.name.clone();
        Callback::from(move |mirror: Mirror| {
            // The counter moves first, before any delay runs.
            on_download_requested.emit(());
            redirecting.set(Some(mirror));
            gloo_console::log!(format!(
                "download initiated for {product_name} via {}",
                mirror.source()
            ));

            let redirecting = redirecting.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::REDIRECT_DELAY_MS).await;
                open_download_popup(mirror);
                TimeoutFuture::new(config::BUTTON_RESET_DELAY_MS).await;
                redirecting.set(None);
                on_close.emit(());
            });
        })
    };

    let mirror_button = |mirror: Mirror| -> Html {
        let busy = *redirecting == Some(mirror);
        let onclick = {
            let on_mirror = on_mirror.clone();
            Callback::from(move |_: MouseEvent| on_mirror.emit(mirror))
        };
        html! {
            <button class="download-option-button" disabled={busy} {onclick}>
                if busy {
                    <i class="fas fa-spinner fa-spin"></i>
                    <span>{"Redirecting..."}</span>
                } else {
                    <i class={mirror.icon()}></i>
                    <span>{mirror.label()}</span>
                    <small>{mirror.tagline()}</small>
                }
            </button>
        }
    };

    let product = &props.product;
    html! {
        <div class="download-modal-content">
            <div
                class="download-modal-image"
                style={format!("background: url('{}') center/cover", product.image_url)}
            ></div>
            <h4>{format!("{} {}", product.name, product.version)}</h4>
            <div class="download-details">
                <div class="detail-item">
                    <i class="fas fa-hdd"></i>
                    <span>{format!("Size: {}", product.size_label)}</span>
                </div>
                <div class="detail-item">
                    <i class="fas fa-download"></i>
                    <span>{format!("Downloads: {}", with_thousands(props.downloads))}</span>
                </div>
                <div class="detail-item">
                    <i class="fas fa-shield-alt"></i>
                    <span>{"Virus scanned & safe"}</span>
                </div>
            </div>
            <div class="download-options">
                <h5>{"Choose Download Option:"}</h5>
                <div class="download-buttons">
                    { mirror_button(Mirror::Drive) }
                    { mirror_button(Mirror::Mediafire) }
                </div>
            </div>
        </div>
    }
}

fn contact_body() -> Html {
    html! {
        <div class="contact-content">
            <p>{"Get in touch with our support team for any questions or assistance."}</p>
            <div class="contact-methods">
                <div class="contact-method">
                    <i class="fas fa-envelope"></i>
                    <div>
                        <h5>{"Email Support"}</h5>
                        <p>{"support@novacut.example"}</p>
                    </div>
                </div>
                <div class="contact-method">
                    <i class="fas fa-clock"></i>
                    <div>
                        <h5>{"Support Hours"}</h5>
                        <p>{"Monday - Friday: 9 AM - 6 PM CET"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_urls_carry_the_source_label() {
        assert_eq!(Mirror::Drive.redirect_url(), "download.html?source=drive");
        assert_eq!(
            Mirror::Mediafire.redirect_url(),
            "download.html?source=mediafire"
        );
    }

    #[test]
    fn mirror_labels_are_distinct() {
        assert_ne!(Mirror::Drive.label(), Mirror::Mediafire.label());
        assert_ne!(Mirror::Drive.source(), Mirror::Mediafire.source());
    }
}
