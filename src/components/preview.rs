use web_sys::Element;
use yew::prelude::*;

use crate::utils::observe::reveal_on_scroll;

/// Product preview clip with a placeholder that covers the video until its
/// data loads, and again if loading errors out.
#[function_component(PreviewSection)]
pub fn preview_section() -> Html {
    let video_ready = use_state_eq(|| false);
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = container_ref.cast::<Element>() {
                    reveal_on_scroll(&element);
                }
                || ()
            },
            (),
        );
    }

    let on_loaded = {
        let video_ready = video_ready.clone();
        Callback::from(move |_: Event| video_ready.set(true))
    };
    let on_error = {
        let video_ready = video_ready.clone();
        Callback::from(move |_: Event| video_ready.set(false))
    };

    html! {
        <section id="preview" class="preview">
            <h2 class="section-title">{"See It in Action"}</h2>
            <div ref={container_ref} class="preview-container">
                <div class="preview-video">
                    if !*video_ready {
                        <div class="video-placeholder">
                            <i class="fas fa-film"></i>
                            <p>{"Preview unavailable"}</p>
                        </div>
                    }
                    <video
                        src="assets/preview.mp4"
                        controls={true}
                        muted={true}
                        style={if *video_ready { "display: block" } else { "display: none" }}
                        onloadeddata={on_loaded}
                        onerror={on_error}
                    />
                </div>
            </div>
        </section>
    }
}
