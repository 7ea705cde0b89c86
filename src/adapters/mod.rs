// Trait definitions
pub mod attachment_fetcher;
pub mod discord_service;

// Implementations
pub mod http_attachment_fetcher;
pub mod serenity_discord_service;

// Re-exports for convenience
pub use attachment_fetcher::AttachmentFetcher;
pub use discord_service::DiscordService;
pub use http_attachment_fetcher::HttpAttachmentFetcher;
pub use serenity_discord_service::SerenityDiscordService;
