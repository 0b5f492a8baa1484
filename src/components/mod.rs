//! UI Components

pub mod gesture_gate;
pub mod grain;
pub mod scare_overlay;
pub mod skip_button;

pub use gesture_gate::GestureGate;
pub use grain::Grain;
pub use scare_overlay::ScareOverlay;
pub use skip_button::SkipButton;
