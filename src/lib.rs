//! mirrorbot mirrors every message a watched user posts in a source channel
//! into a destination channel. The watched user and both channels are picked
//! per guild through the `/settings` menu; nothing is persisted, so the
//! configuration lives only for the lifetime of the process.

pub mod adapters;
pub mod params;
pub mod repost;
pub mod settings;
pub mod store;
