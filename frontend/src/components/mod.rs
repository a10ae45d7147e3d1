pub mod game_preview_modal;
pub mod lot_editor;
pub mod spin_controls;
pub mod wheel_canvas;

pub use game_preview_modal::GamePreviewModal;
pub use lot_editor::LotEditor;
pub use spin_controls::{ResultDisplay, SpinButton};
pub use wheel_canvas::WheelCanvas;
