//! Core types shared across the scan pipeline and the CLI

pub mod config;
pub mod model;
pub mod render;
pub mod session;
pub mod syntax;
pub mod util;
