use serde::Deserialize;

/// The advertised software, as described by `data/software.json`.
/// Loaded once at startup and trusted verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub version: String,
    #[serde(rename = "size")]
    pub size_label: String,
    pub description: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One marketed capability. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Product {
    /// Hardcoded record used when the startup fetch fails. The feature list
    /// is intentionally empty; the error panel replaces the grid in that
    /// state.
    pub fn fallback() -> Self {
        Self {
            name: "NovaCut Pro".to_string(),
            version: "2025".to_string(),
            size_label: "3.2 GB".to_string(),
            description: "Professional video editing software".to_string(),
            image_url: "https://picsum.photos/seed/novacut-hero/1280/720".to_string(),
            features: Vec::new(),
        }
    }

    /// An empty feature list after a successful load is replaced by the
    /// built-in defaults. This mutates the stored product, not just what
    /// gets rendered.
    pub fn ensure_features(&mut self) {
        if self.features.is_empty() {
            self.features = Feature::defaults();
        }
    }
}

impl Feature {
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                title: "Multi-Track Timeline Editing".to_string(),
                description: "Layered timeline with frame-accurate trimming tools and \
                              real-time preview on every track."
                    .to_string(),
                image_url: "https://picsum.photos/seed/novacut-timeline/1280/720".to_string(),
            },
            Self {
                title: "Assisted Color Grading".to_string(),
                description: "Scene-aware color matching that balances shots across a \
                              sequence in one pass."
                    .to_string(),
                image_url: "https://picsum.photos/seed/novacut-color/1280/720".to_string(),
            },
            Self {
                title: "Motion Graphics Toolkit".to_string(),
                description: "Animated titles, lower thirds and keyframed effects without \
                              leaving the editor."
                    .to_string(),
                image_url: "https://picsum.photos/seed/novacut-motion/1280/720".to_string(),
            },
            Self {
                title: "Multi-Camera Sync".to_string(),
                description: "Cut between synchronized camera angles with audio-based \
                              alignment and seamless switching."
                    .to_string(),
                image_url: "https://picsum.photos/seed/novacut-multicam/1280/720".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_document() {
        let doc = r#"{
            "name": "NovaCut Pro",
            "version": "2025",
            "size": "3.2 GB",
            "description": "Professional video editing software",
            "image": "https://example.com/hero.jpg",
            "features": [
                {"title": "A", "description": "first", "image": "https://example.com/a.jpg"},
                {"title": "B", "description": "second", "image": "https://example.com/b.jpg"}
            ]
        }"#;
        let product: Product = serde_json::from_str(doc).unwrap();
        assert_eq!(product.name, "NovaCut Pro");
        assert_eq!(product.size_label, "3.2 GB");
        assert_eq!(product.features.len(), 2);
        assert_eq!(product.features[0].title, "A");
        assert_eq!(product.features[1].title, "B");
    }

    #[test]
    fn absent_features_parse_as_empty() {
        let doc = r#"{
            "name": "NovaCut Pro",
            "version": "2025",
            "size": "3.2 GB",
            "description": "d",
            "image": "i"
        }"#;
        let product: Product = serde_json::from_str(doc).unwrap();
        assert!(product.features.is_empty());
    }

    #[test]
    fn empty_features_are_replaced_by_defaults() {
        let mut product = Product::fallback();
        product.ensure_features();
        assert_eq!(product.features.len(), 4);
        // Order is part of the contract.
        assert_eq!(product.features[0].title, "Multi-Track Timeline Editing");
        assert_eq!(product.features[3].title, "Multi-Camera Sync");
    }

    #[test]
    fn populated_features_are_left_alone() {
        let mut product = Product::fallback();
        product.features = vec![Feature {
            title: "Custom".to_string(),
            description: "kept".to_string(),
            image_url: String::new(),
        }];
        product.ensure_features();
        assert_eq!(product.features.len(), 1);
        assert_eq!(product.features[0].title, "Custom");
    }

    #[test]
    fn fallback_has_no_features() {
        assert!(Product::fallback().features.is_empty());
    }
}
