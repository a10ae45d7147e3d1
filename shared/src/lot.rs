use serde::{Deserialize, Deserializer, Serialize};

/// One prize slot on the wheel.
///
/// `odds` is kept as the text the owner typed in the settings form; the
/// backend may hand it back as a JSON number, so both are accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "odds_from_any")]
    pub odds: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl Lot {
    pub fn new(name: impl Into<String>, odds: u32) -> Self {
        Self {
            name: name.into(),
            odds: odds.to_string(),
            promo_code: None,
        }
    }

    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    /// Selection weight. Unparsable or empty odds count as 1, negatives as 0.
    pub fn weight(&self) -> u32 {
        parse_odds(&self.odds)
    }

    pub fn is_eligible(&self) -> bool {
        self.weight() > 0
    }

    /// An unused padding slot: no name and no chance of winning.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            odds: "0".to_string(),
            promo_code: None,
        }
    }
}

pub fn parse_odds(raw: &str) -> u32 {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value <= 0 => 0,
        Ok(value) => u32::try_from(value).unwrap_or(u32::MAX),
        Err(_) => match trimmed.parse::<f64>() {
            // "2.5" style input keeps its integer part
            Ok(value) if value.is_finite() => {
                if value <= 0.0 {
                    0
                } else {
                    value.trunc().min(u32::MAX as f64) as u32
                }
            }
            _ => 1,
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOdds {
    Text(String),
    Number(f64),
    Other(serde_json::Value),
}

fn odds_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawOdds::deserialize(deserializer)? {
        RawOdds::Text(text) => text,
        RawOdds::Number(number) if number.fract() == 0.0 => format!("{}", number as i64),
        RawOdds::Number(number) => number.to_string(),
        // null, bool and friends fall through to the permissive default
        RawOdds::Other(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_odds_defaults() {
        assert_eq!(parse_odds("3"), 3);
        assert_eq!(parse_odds(" 7 "), 7);
        assert_eq!(parse_odds("0"), 0);
        assert_eq!(parse_odds("-4"), 0);
        assert_eq!(parse_odds("2.9"), 2);
        assert_eq!(parse_odds("abc"), 1);
        assert_eq!(parse_odds(""), 1);
    }

    #[test]
    fn test_lot_accepts_numeric_and_text_odds() {
        let lots: Vec<Lot> = serde_json::from_str(
            r#"[
                {"name": "Coffee", "odds": 5, "promoCode": "CAFE5"},
                {"name": "Cookie", "odds": "2"},
                {"name": "Nothing", "odds": null},
                {"name": "Missing"}
            ]"#,
        )
        .unwrap();

        assert_eq!(lots[0].weight(), 5);
        assert_eq!(lots[0].promo_code.as_deref(), Some("CAFE5"));
        assert_eq!(lots[1].weight(), 2);
        assert_eq!(lots[2].weight(), 1);
        assert_eq!(lots[3].weight(), 1);
    }

    #[test]
    fn test_empty_lot_is_not_eligible() {
        assert!(!Lot::empty().is_eligible());
        assert!(Lot::new("Free dessert", 1).is_eligible());
    }
}
