//! Multilingual terminal checkout.
//!
//! Tagged checkout screens are translated from a static catalog, and the
//! chosen language and dark/light theme are remembered between runs.

pub mod app;
pub mod features;
pub mod shared;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod widgets_tests;
