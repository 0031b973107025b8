pub mod document;
mod placeholder;

#[cfg(test)]
mod tests;

pub use document::{Container, Document, APP_ROOT_ID};
pub use placeholder::{link_label, render_placeholder, LINK_CLASS, PLACEHOLDER_LINK, PLACEHOLDER_MESSAGE};

pub use crate::types::MountOutcome;
