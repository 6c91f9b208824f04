//! Rendering of metadata records into markup.

pub mod head;

pub use head::{render_document, render_head};
