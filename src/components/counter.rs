//! Animated stat counters. Each element counts from 0 to its target the
//! first time it scrolls into view, driven by animation-frame callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::utils::observe::observe_once;

/// Cubic ease-out over a 0..=1 progress value.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Text shown for `target` at `progress` through the animation. Integer
/// targets floor while in flight and snap exactly to the target at the end;
/// decimal targets keep one decimal place throughout.
pub fn display_value(target: f64, progress: f64) -> String {
    let p = progress.clamp(0.0, 1.0);
    let is_decimal = target.fract() != 0.0;
    if p >= 1.0 {
        return if is_decimal {
            format!("{target:.1}")
        } else {
            format!("{}", target as i64)
        };
    }
    let current = target * ease_out_cubic(p);
    if is_decimal {
        format!("{current:.1}")
    } else {
        format!("{}", current.floor() as i64)
    }
}

/// Drives the frame loop for one element. No cancellation path: the element
/// animates exactly once and the closure drops itself on the final frame.
fn animate_count(element: Element, target: f64) {
    let start: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

    let frame_handle = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let begun = match start.get() {
            Some(t) => t,
            None => {
                start.set(Some(timestamp));
                timestamp
            }
        };
        let progress = ((timestamp - begun) / config::COUNTER_DURATION_MS).clamp(0.0, 1.0);
        element.set_text_content(Some(&display_value(target, progress)));
        if progress < 1.0 {
            schedule(&frame_handle);
        } else {
            // Terminal value rendered; drop the closure.
            let _ = frame_handle.borrow_mut().take();
        }
    }));
    schedule(&frame);
}

fn schedule(frame: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(window), Some(closure)) = (web_sys::window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: f64,
    pub label: String,
    #[prop_or_default]
    pub suffix: String,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value_ref = use_node_ref();

    {
        let value_ref = value_ref.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                if let Some(element) = value_ref.cast::<Element>() {
                    observe_once(&element, 0.5, None, move |el| animate_count(el, target));
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-value">
                <span ref={value_ref}>{"0"}</span>
                if !props.suffix.is_empty() {
                    <span class="stat-suffix">{&props.suffix}</span>
                }
            </span>
            <span class="stat-label">{&props.label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_target_terminates_exactly() {
        assert_eq!(display_value(42.0, 1.0), "42");
        // Progress past the end clamps rather than overshooting.
        assert_eq!(display_value(42.0, 1.5), "42");
    }

    #[test]
    fn decimal_target_terminates_with_one_decimal_place() {
        assert_eq!(display_value(98.5, 1.0), "98.5");
        assert_eq!(display_value(4.8, 1.0), "4.8");
    }

    #[test]
    fn integer_targets_floor_in_flight() {
        // At half progress the eased value is 42 * 0.875 = 36.75.
        assert_eq!(display_value(42.0, 0.5), "36");
        assert_eq!(display_value(42.0, 0.0), "0");
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=10 {
            let eased = ease_out_cubic(step as f64 / 10.0);
            assert!(eased >= last);
            assert!(eased <= 1.0);
            last = eased;
        }
        // Clamped outside the animation window.
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }
}
