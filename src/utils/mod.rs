//! Utility modules shared by rendering and generation.

pub mod date;
pub mod html;
