pub mod draft;
pub mod menu;
pub mod sessions;
pub mod workflow;

// Re-export public API
pub use draft::Draft;
pub use sessions::{SaveOutcome, SessionStore, SESSION_TIMEOUT};
