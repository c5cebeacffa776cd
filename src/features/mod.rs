//! Features - the checkout page and the behaviour layered on top of it
//!
//! This module provides:
//! - `locale`: tagged UI tree and the locale switcher
//! - `theme_toggle`: dark/light switch
//! - `startup`: restore persisted preferences on page-ready
//! - `checkout`: the concrete checkout page

pub mod checkout;
pub mod locale;
pub mod startup;
pub mod theme_toggle;
