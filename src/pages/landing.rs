use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::download::DownloadSection;
use crate::components::error_state::ErrorPanel;
use crate::components::features::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::modal::Modal;
use crate::components::navbar::NavBar;
use crate::components::preview::PreviewSection;
use crate::data::fetch::load_product;
use crate::state::{Action, AppState, ContentKey, LoadPhase};

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(AppState::default);

    // Startup: single fetch, no retry. Failure degrades to the fallback
    // record and the error panels.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match load_product().await {
                        Ok(product) => {
                            state.dispatch(Action::ProductLoaded(product));
                            gloo_console::log!("product data loaded");
                        }
                        Err(err) => {
                            gloo_console::error!(format!("error loading product data: {err}"));
                            state.dispatch(Action::LoadFailed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_open_modal = {
        let state = state.clone();
        Callback::from(move |key: ContentKey| state.dispatch(Action::OpenModal(key)))
    };
    let on_close_modal = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Action::CloseModal))
    };
    let on_download_requested = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Action::DownloadRequested))
    };

    // Footer contact link reuses the data-modal trigger convention.
    let on_footer_modal = {
        let on_open_modal = on_open_modal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(link) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                let key = link.get_attribute("data-modal").unwrap_or_default();
                on_open_modal.emit(ContentKey::parse(&key));
            }
        })
    };

    let failed = state.phase == LoadPhase::Failed;

    html! {
        <div class="landing-page">
            <NavBar on_open_modal={on_open_modal.clone()} />
            <main>
                <Hero on_open_modal={on_open_modal.clone()} />
                <section id="features" class="features">
                    <h2 class="section-title">{"Built for Serious Editing"}</h2>
                    if failed {
                        <ErrorPanel heading="Unable to load features" />
                    } else {
                        <FeatureGrid features={state.product.features.clone()} />
                    }
                </section>
                <PreviewSection />
                <section id="download" class="download">
                    <h2 class="section-title">{"Get NovaCut Pro"}</h2>
                    if failed {
                        <ErrorPanel heading="Unable to load download information" />
                    } else {
                        <DownloadSection
                            product={state.product.clone()}
                            downloads={state.downloads}
                            on_open_modal={on_open_modal.clone()}
                        />
                    }
                </section>
            </main>
            <footer class="footer">
                <div class="footer-content">
                    <span class="footer-brand">{"NovaCut Labs"}</span>
                    <a href="#" data-modal="contact" onclick={on_footer_modal}>{"Contact"}</a>
                </div>
                <p class="footer-note">
                    {"Demonstration site. Downloads are simulated; no software is delivered."}
                </p>
            </footer>
            if let Some(key) = state.modal {
                <Modal
                    content_key={key}
                    product={state.product.clone()}
                    downloads={state.downloads}
                    on_close={on_close_modal}
                    on_download_requested={on_download_requested}
                />
            }
        </div>
    }
}
