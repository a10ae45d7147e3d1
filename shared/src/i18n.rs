use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Accepts browser tags such as `fr-FR`. Anything unknown is English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Self::Fr,
            _ => Self::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    LeaveReview,
    ReviewDone,
    Spin,
    Spinning,
    YouWon,
    PromoCode,
    NoPrize,
    AlreadyPlayed,
    YourName,
    YourEmail,
    YourPhone,
    Submit,
    ThankYou,
}

pub fn translate(key: TextKey, lang: Language) -> &'static str {
    use TextKey::*;
    match (lang, key) {
        (Language::En, LeaveReview) => "Leave us a Google review",
        (Language::En, ReviewDone) => "I left my review",
        (Language::En, Spin) => "Spin the wheel",
        (Language::En, Spinning) => "Spinning...",
        (Language::En, YouWon) => "You won",
        (Language::En, PromoCode) => "Your code",
        (Language::En, NoPrize) => "This wheel has no prizes yet",
        (Language::En, AlreadyPlayed) => "You already played",
        (Language::En, YourName) => "Name",
        (Language::En, YourEmail) => "Email",
        (Language::En, YourPhone) => "Phone (optional)",
        (Language::En, Submit) => "Claim my prize",
        (Language::En, ThankYou) => "Thanks! Show this screen at the counter.",

        (Language::Fr, LeaveReview) => "Laissez-nous un avis Google",
        (Language::Fr, ReviewDone) => "J'ai laissé mon avis",
        (Language::Fr, Spin) => "Tourner la roue",
        (Language::Fr, Spinning) => "La roue tourne...",
        (Language::Fr, YouWon) => "Vous avez gagné",
        (Language::Fr, PromoCode) => "Votre code",
        (Language::Fr, NoPrize) => "Cette roue n'a pas encore de lots",
        (Language::Fr, AlreadyPlayed) => "Vous avez déjà joué",
        (Language::Fr, YourName) => "Nom",
        (Language::Fr, YourEmail) => "E-mail",
        (Language::Fr, YourPhone) => "Téléphone (facultatif)",
        (Language::Fr, Submit) => "Récupérer mon lot",
        (Language::Fr, ThankYou) => "Merci ! Montrez cet écran au comptoir.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("fr-FR"), Language::Fr);
        assert_eq!(Language::from_tag("FR"), Language::Fr);
        assert_eq!(Language::from_tag("en_GB"), Language::En);
        assert_eq!(Language::from_tag("de"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(TextKey::Spin, Language::Fr), "Tourner la roue");
        assert_eq!(translate(TextKey::Spin, Language::En), "Spin the wheel");
    }
}
