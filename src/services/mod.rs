//! Browser service wrappers

pub mod media;
pub mod navigate;
