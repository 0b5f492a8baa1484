//! Page modules - a single entrance page, nothing else

pub mod entrance;

pub use entrance::EntrancePage;
