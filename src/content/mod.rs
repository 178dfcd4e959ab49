//! Static content and the line generators that stream it.
//!
//! Everything here is immutable after startup apart from generator cursors.

mod data;
mod generator;
mod types;

pub use data::{
    default_banner, default_boot_steps, default_content_store, default_message_pool,
    default_short_snippets,
};
pub use generator::{
    category_slug, display_label, LineClass, LineSource, MixedLine, RandomPick, SequentialCycle,
    SnippetMixer,
};
pub use types::{BootStep, ContentStore, LogDetail, MessagePool, Panel};
