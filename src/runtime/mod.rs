//! Runtime module - the line-driven front end
//!
//! This module contains the code that drives the engine from a command stream:
//! - `app` - command loop and side-effect execution
//! - `input` - line to command/message mapping
//! - `render` - plain-text table and footer rendering

pub mod app;
pub mod input;
pub mod render;

pub use app::App;
