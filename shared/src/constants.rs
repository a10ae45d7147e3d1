pub const API_PREFIX: &str = "/api";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";
pub const WHEELS_ENDPOINT: &str = "/wheels";
pub const OWNER_WHEEL_ENDPOINT: &str = "/wheels/owner";
pub const CUSTOMERS_ENDPOINT: &str = "/customers";

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const USER_ID_STORAGE_KEY: &str = "user_id";

pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const INVALID_PASSWORD_ERROR: &str = "Password must be at least 8 characters long and contain uppercase, lowercase and a number";
pub const INVALID_PHONE_ERROR: &str = "Please enter a valid phone number";
pub const INVALID_COLOR_ERROR: &str = "Colors must be hex values like #ff8800";
pub const NO_ELIGIBLE_PRIZE_ERROR: &str = "At least one prize needs odds above zero";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_LOT_NAME_LENGTH: usize = 40;
pub const MAX_PROMO_CODE_LENGTH: usize = 32;

// Wheel tuning
pub const WHEEL_SLOTS: usize = 8;
pub const SPIN_DURATION_MS: u32 = 5000;
pub const MIN_EXTRA_ROTATIONS: u32 = 3;
pub const MAX_EXTRA_ROTATIONS: u32 = 4;
pub const JITTER_RATIO: f64 = 0.15;

pub const DEFAULT_PAGE_SIZE: usize = 10;
