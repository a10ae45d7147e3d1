use shared::constants::API_PREFIX;
use web_sys::window;

const PRODUCTION_HOST: &str = "spinwheel.app";
const LOCAL_API_ORIGIN: &str = "http://127.0.0.1:3000";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if host.ends_with(PRODUCTION_HOST) {
                // Same-origin API on the production domain
                return API_PREFIX.to_string();
            }
        }
    }

    format!("{}{}", LOCAL_API_ORIGIN, API_PREFIX)
}

/// Public URL of a wheel's play page, encoded in the owner's QR code.
pub fn play_url(wheel_id: &str) -> String {
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| format!("https://{}", PRODUCTION_HOST));
    format!("{}/play/{}", origin, wheel_id)
}

pub fn browser_language() -> String {
    window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en".to_string())
}
