//! # UI Module
//!
//! User interface components for the demo application: shared styling,
//! status banners, and one view module per page group.

pub mod banner;
pub mod pages;
pub mod styles;
