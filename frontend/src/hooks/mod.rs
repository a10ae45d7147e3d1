pub mod auth_state;
pub mod form_state;
pub mod use_wheel_spin;

pub use auth_state::*;
pub use use_wheel_spin::*;
