use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::WHEEL_SLOTS;
use crate::lot::Lot;
use crate::validation::{validate_hex_color, validate_lots};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct MainColors {
    #[validate(custom = "validate_hex_color")]
    pub color1: String,
    #[validate(custom = "validate_hex_color")]
    pub color2: String,
    #[validate(custom = "validate_hex_color")]
    pub color3: String,
}

impl Default for MainColors {
    fn default() -> Self {
        Self {
            color1: "#f97316".to_string(),
            color2: "#06b6d4".to_string(),
            color3: "#8b5cf6".to_string(),
        }
    }
}

impl MainColors {
    /// Sectors cycle through the three brand colors.
    pub fn sector_color(&self, index: usize) -> &str {
        match index % 3 {
            0 => &self.color1,
            1 => &self.color2,
            _ => &self.color3,
        }
    }
}

/// A business owner's wheel as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Wheel {
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "_id")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub business_name: String,
    #[validate(url)]
    #[serde(default)]
    pub google_review_link: String,
    #[validate]
    #[serde(default)]
    pub main_colors: MainColors,
    #[validate(custom = "validate_lots")]
    #[serde(default)]
    pub lots: Vec<Lot>,
    #[validate(url)]
    #[serde(default)]
    pub logo_url: Option<String>,
    #[validate(length(max = 280))]
    #[serde(default)]
    pub customer_instruction: String,
}

impl Wheel {
    /// Starter wheel handed to a freshly signed-up owner.
    pub fn starter(business_name: impl Into<String>) -> Self {
        let names = [
            "10% off",
            "Free coffee",
            "Try again",
            "Free dessert",
            "5% off",
            "Try again",
            "Free drink",
            "20% off",
        ];
        let odds = [3, 2, 4, 1, 3, 4, 2, 1];
        Self {
            id: None,
            owner_id: None,
            business_name: business_name.into(),
            google_review_link: String::new(),
            main_colors: MainColors::default(),
            lots: names
                .iter()
                .zip(odds)
                .map(|(name, odds)| Lot::new(*name, odds))
                .collect(),
            logo_url: None,
            customer_instruction: "Leave us a review, then spin the wheel!".to_string(),
        }
    }

    /// Lots padded with empty slots or truncated so the wheel always has
    /// `WHEEL_SLOTS` sectors.
    pub fn normalized_lots(&self) -> Vec<Lot> {
        normalize_lots(&self.lots)
    }

    pub fn has_review_link(&self) -> bool {
        !self.google_review_link.trim().is_empty()
    }
}

pub fn normalize_lots(lots: &[Lot]) -> Vec<Lot> {
    let mut normalized: Vec<Lot> = lots.iter().take(WHEEL_SLOTS).cloned().collect();
    normalized.resize_with(WHEEL_SLOTS, Lot::empty);
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_lots_pads_and_truncates() {
        let mut wheel = Wheel::starter("Cafe");
        wheel.lots.truncate(3);
        let padded = wheel.normalized_lots();
        assert_eq!(padded.len(), WHEEL_SLOTS);
        assert_eq!(padded[2].name, wheel.lots[2].name);
        assert!(padded[3..].iter().all(|lot| !lot.is_eligible()));

        wheel.lots = (0..11).map(|i| Lot::new(format!("Prize {}", i), 1)).collect();
        let truncated = wheel.normalized_lots();
        assert_eq!(truncated.len(), WHEEL_SLOTS);
        assert_eq!(truncated[7].name, "Prize 7");
    }

    #[test]
    fn test_wheel_json_is_camel_case() {
        let json = r##"{
            "_id": "abc123",
            "businessName": "Chez Paul",
            "googleReviewLink": "https://g.page/r/chezpaul/review",
            "mainColors": {"color1": "#111111", "color2": "#222", "color3": "#333333"},
            "lots": [{"name": "Croissant", "odds": "4"}],
            "logoUrl": null,
            "customerInstruction": "Scan and spin"
        }"##;
        let wheel: Wheel = serde_json::from_str(json).unwrap();
        assert_eq!(wheel.id.as_deref(), Some("abc123"));
        assert_eq!(wheel.business_name, "Chez Paul");
        assert_eq!(wheel.lots[0].weight(), 4);

        let out = serde_json::to_value(&wheel).unwrap();
        assert!(out.get("businessName").is_some());
        assert!(out.get("business_name").is_none());
    }

    #[test]
    fn test_sector_color_cycles() {
        let colors = MainColors::default();
        assert_eq!(colors.sector_color(0), colors.sector_color(3));
        assert_eq!(colors.sector_color(4), colors.color2);
    }

    #[test]
    fn test_starter_wheel_validates_once_review_link_set() {
        let mut wheel = Wheel::starter("Cafe");
        assert!(wheel.validate().is_err());
        wheel.google_review_link = "https://g.page/r/cafe/review".to_string();
        assert!(wheel.validate().is_ok());
    }
}
