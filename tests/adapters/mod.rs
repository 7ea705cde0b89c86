// Mock implementations for adapter layer testing

pub mod mock_discord;
pub mod mock_fetcher;
pub mod mock_message;

pub use mock_discord::MockDiscordService;
pub use mock_fetcher::MockAttachmentFetcher;
pub use mock_message::MockMessage;
