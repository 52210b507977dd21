use serde::{Deserialize, Serialize};

/// A hero carousel slide.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub background_image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// A pricing plan. `price` is display text ("$9/month", "Contact us").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PricingTier {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}
