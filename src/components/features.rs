use web_sys::Element;
use yew::prelude::*;

use crate::data::product::Feature;
use crate::utils::observe::reveal_on_scroll;

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub features: Vec<Feature>,
}

/// One card per feature, in document order, with a reveal delay
/// proportional to the card's index.
#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <div id="features-grid" class="features-grid">
            { for props.features.iter().enumerate().map(|(index, feature)| html! {
                <FeatureCard
                    key={feature.title.clone()}
                    feature={feature.clone()}
                    delay_s={index as f64 * 0.1}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    delay_s: f64,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
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

    html! {
        <div
            ref={card_ref}
            class="feature-card"
            style={format!("animation-delay: {:.1}s", props.delay_s)}
        >
            <div
                class="feature-image"
                style={format!("background-image: url('{}')", props.feature.image_url)}
            ></div>
            <h3>{&props.feature.title}</h3>
            <p>{&props.feature.description}</p>
        </div>
    }
}
