//! Application state

pub mod playback;
