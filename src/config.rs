//! Site-wide constants. Everything here is static for the page's lifetime;
//! there is no environment-dependent configuration.

/// Relative path of the product description document.
pub const SOFTWARE_DATA_PATH: &str = "./data/software.json";

/// Seed for the volatile download counter shown in the marketing copy.
/// Resets on every page load.
pub const DOWNLOAD_COUNT_SEED: u64 = 125_742;

/// Delay between choosing a mirror and the popup opening.
pub const REDIRECT_DELAY_MS: u32 = 500;

/// Further delay before the mirror button resets and the modal closes.
pub const BUTTON_RESET_DELAY_MS: u32 = 1_000;

/// Duration of the stat counter animation.
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

/// The redirect page the mirror buttons open. Served next to the app.
pub const DOWNLOAD_PAGE: &str = "download.html";

/// Window features for the redirect popup.
pub const POPUP_FEATURES: &str = "width=600,height=400,scrollbars=no,resizable=no";

/// Gates the "Downloaded N times this month" line under the download button.
/// The update path stays live either way; disabled until marketing signs off
/// on the copy.
pub const SHOW_MONTHLY_DOWNLOADS: bool = false;
