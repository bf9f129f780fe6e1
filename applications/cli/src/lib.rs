//! Keepsake command-line shell
//!
//! Terminal front end over the content library and playback coordinator:
//! lists and adds content, prints the section tabs, and simulates playback
//! with a logging audio backend.

pub mod config;
pub mod output;
pub mod session;
pub mod tabs;

pub use config::KeepsakeConfig;
pub use session::Session;
pub use tabs::Tab;
