pub mod engine;
pub mod forward_text;
pub mod repostable_message;

// Re-export public API
pub use engine::RepostEngine;
pub use repostable_message::{AttachmentSource, RepostableMessage};
