pub mod analytics;
pub mod auth;
pub mod constants;
pub mod customers;
pub mod export;
pub mod geometry;
pub mod i18n;
pub mod lot;
pub mod prize_selector;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel;

pub use lot::Lot;
pub use prize_selector::{select_prize_and_rotation, SpinError, SpinOutcome};
pub use shared_wheel_game::{SpinPolicy, WheelSession};
pub use wheel::{MainColors, Wheel};
