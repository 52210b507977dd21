pub mod types;

pub use types::*;

use serde::Deserialize;
use std::path::Path;

/// Built-in site content, used unless `CONTENT_PATH` points elsewhere.
pub const DEFAULT_CONTENT: &str = include_str!("../../../data/seed/content.json");

/// The fixed, read-only site content. Loaded once at startup and shared by
/// all workers; there is no reload.
#[derive(Deserialize, Debug, Clone)]
pub struct Catalog {
    slides: Vec<Slide>,
    features: Vec<Feature>,
    pricing: Vec<PricingTier>,
}

impl Catalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load the catalog from `path`, or the built-in content when `None`.
    pub fn load(path: Option<&Path>) -> std::io::Result<Self> {
        let catalog = match path {
            Some(p) => {
                let json = std::fs::read_to_string(p)?;
                let catalog = Self::from_json(&json)?;
                log::info!("Loaded site content from {}", p.display());
                catalog
            }
            None => Self::from_json(DEFAULT_CONTENT)?,
        };
        log::info!(
            "Content catalog: slides={}, features={}, pricing={}",
            catalog.slides.len(),
            catalog.features.len(),
            catalog.pricing.len()
        );
        Ok(catalog)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, id: i64) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn pricing(&self) -> &[PricingTier] {
        &self.pricing
    }
}
