//! Application state and the actions that drive it.
//!
//! Every user gesture maps to one [`Action`] consumed by the reducer, so the
//! whole interaction layer can be exercised without a DOM. Components hold a
//! `UseReducerHandle<AppState>` and dispatch; rendering follows the state.

use std::rc::Rc;

use yew::Reducible;

use crate::config;
use crate::data::product::Product;

/// Outcome of the startup fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// Selects which static content the modal displays. Parsed from the
/// `data-modal` attribute on trigger elements; anything unrecognized
/// resolves to a placeholder instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKey {
    Download,
    Contact,
    Unknown,
}

impl ContentKey {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "download" => Self::Download,
            "contact" => Self::Contact,
            _ => Self::Unknown,
        }
    }

    /// Modal title for this content. Recomputed on every open.
    pub fn title(self, product: &Product) -> String {
        match self {
            Self::Download => format!("Download {}", product.name),
            Self::Contact => "Contact Us".to_string(),
            Self::Unknown => "Information".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub product: Product,
    pub phase: LoadPhase,
    pub downloads: u64,
    /// `Some` while the modal is open, keyed by what it shows.
    pub modal: Option<ContentKey>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            product: Product::fallback(),
            phase: LoadPhase::Loading,
            downloads: config::DOWNLOAD_COUNT_SEED,
            modal: None,
        }
    }
}

impl AppState {
    /// Page scroll is suppressed exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.modal.is_some()
    }
}

pub enum Action {
    /// Startup fetch succeeded. An empty feature list is replaced by the
    /// built-in defaults here, at the store level.
    ProductLoaded(Product),
    /// Startup fetch failed; install the fallback record and degrade.
    LoadFailed,
    /// A mirror button was activated. Counts immediately, before any of the
    /// redirect delays run.
    DownloadRequested,
    OpenModal(ContentKey),
    CloseModal,
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::ProductLoaded(mut product) => {
                product.ensure_features();
                next.product = product;
                next.phase = LoadPhase::Ready;
            }
            Action::LoadFailed => {
                next.product = Product::fallback();
                next.phase = LoadPhase::Failed;
            }
            Action::DownloadRequested => {
                next.downloads += 1;
            }
            Action::OpenModal(key) => {
                next.modal = Some(key);
            }
            Action::CloseModal => {
                next.modal = None;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::product::{Feature, Product};
    use crate::utils::format::with_thousands;

    fn dispatch(state: Rc<AppState>, action: Action) -> Rc<AppState> {
        state.reduce(action)
    }

    fn product_with_features(count: usize) -> Product {
        let mut product = Product::fallback();
        product.features = (0..count)
            .map(|i| Feature {
                title: format!("feature {i}"),
                description: String::new(),
                image_url: String::new(),
            })
            .collect();
        product
    }

    #[test]
    fn loaded_document_keeps_features_in_order() {
        let state = dispatch(
            Rc::new(AppState::default()),
            Action::ProductLoaded(product_with_features(3)),
        );
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.product.features.len(), 3);
        let titles: Vec<_> = state
            .product
            .features
            .iter()
            .map(|f| f.title.as_str())
            .collect();
        assert_eq!(titles, ["feature 0", "feature 1", "feature 2"]);
    }

    #[test]
    fn empty_feature_list_is_replaced_by_the_four_defaults() {
        let state = dispatch(
            Rc::new(AppState::default()),
            Action::ProductLoaded(product_with_features(0)),
        );
        // The substitution lands in the store itself.
        assert_eq!(state.product.features.len(), 4);
    }

    #[test]
    fn fetch_failure_installs_fallback_and_degrades() {
        let state = dispatch(Rc::new(AppState::default()), Action::LoadFailed);
        assert_eq!(state.phase, LoadPhase::Failed);
        assert_eq!(state.product, Product::fallback());
    }

    #[test]
    fn open_then_close_returns_to_closed_with_scroll_unlocked() {
        let state = Rc::new(AppState::default());
        assert!(!state.scroll_locked());
        let open = dispatch(state, Action::OpenModal(ContentKey::Download));
        assert_eq!(open.modal, Some(ContentKey::Download));
        assert!(open.scroll_locked());
        let closed = dispatch(open, Action::CloseModal);
        assert_eq!(closed.modal, None);
        assert!(!closed.scroll_locked());
    }

    #[test]
    fn reopen_swaps_content_in_place() {
        let state = dispatch(
            Rc::new(AppState::default()),
            Action::OpenModal(ContentKey::Download),
        );
        let swapped = dispatch(state, Action::OpenModal(ContentKey::Contact));
        assert_eq!(swapped.modal, Some(ContentKey::Contact));
    }

    #[test]
    fn three_download_requests_increment_by_exactly_three() {
        let mut state = Rc::new(AppState::default());
        for _ in 0..3 {
            state = dispatch(state, Action::DownloadRequested);
        }
        assert_eq!(state.downloads, config::DOWNLOAD_COUNT_SEED + 3);
        assert_eq!(with_thousands(state.downloads), "125,745");
    }

    #[test]
    fn unknown_content_key_resolves_to_placeholder_title() {
        let product = Product::fallback();
        assert_eq!(ContentKey::parse("bogus"), ContentKey::Unknown);
        assert_eq!(ContentKey::parse("bogus").title(&product), "Information");
        assert_eq!(
            ContentKey::parse("download").title(&product),
            "Download NovaCut Pro"
        );
        assert_eq!(ContentKey::parse("contact").title(&product), "Contact Us");
    }
}
