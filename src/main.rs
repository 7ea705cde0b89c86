use anyhow::Context as _;
use mirrorbot::adapters::{HttpAttachmentFetcher, SerenityDiscordService};
use mirrorbot::params::Params;
use mirrorbot::repost::RepostEngine;
use mirrorbot::settings::{self, SessionStore};
use mirrorbot::store::RuleStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::application::{Command, Interaction};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::Permissions;
use serenity::prelude::*;

struct Handler {
    store: Arc<RuleStore>,
    sessions: Arc<SessionStore>,
    attachment_fetcher: Arc<HttpAttachmentFetcher>,
    // Engine is initialized in the ready event, once HTTP and cache handles exist
    engine: std::sync::OnceLock<RepostEngine<SerenityDiscordService, HttpAttachmentFetcher>>,
}

impl Handler {
    fn new(params: &Params) -> anyhow::Result<Handler> {
        let attachment_fetcher = Arc::new(HttpAttachmentFetcher::new(
            Duration::from_secs(params.http_timeout),
            Duration::from_secs(params.http_connect_timeout),
        )?);

        Ok(Handler {
            store: Arc::new(RuleStore::new()),
            sessions: Arc::new(SessionStore::new()),
            attachment_fetcher,
            engine: std::sync::OnceLock::new(),
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let discord_service = Arc::new(SerenityDiscordService::new(
            ctx.http.clone(),
            ctx.cache.clone(),
        ));
        let _ = self.engine.set(RepostEngine::new(
            self.store.clone(),
            discord_service,
            self.attachment_fetcher.clone(),
        ));

        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            "Bot is connected"
        );

        // Register the admin-only settings command; failure is logged but not fatal
        let command = CreateCommand::new("settings")
            .description("Configure the bot's repost settings")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .dm_permission(false);

        match Command::create_global_command(&ctx.http, command).await {
            Ok(registered) => {
                info!(command_id = %registered.id, "Registered settings command");
            }
            Err(err) => {
                error!(?err, "Failed to register settings command");
            }
        }
    }

    async fn message(&self, _ctx: Context, message: Message) {
        // Messages arriving before the ready event are not processed
        let Some(engine) = self.engine.get() else {
            return;
        };

        if let Err(err) = engine.handle_message(&message).await {
            error!(?err, message_id = %message.id, "Failed to handle message event");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) if command.data.name == "settings" => {
                if let Err(err) = settings::workflow::open(&ctx, &command, &self.sessions).await {
                    error!(?err, "Failed to open settings workflow");
                }
            }
            Interaction::Component(component)
                if settings::menu::is_settings_component(&component.data.custom_id) =>
            {
                if let Err(err) = settings::workflow::handle_component(
                    &ctx,
                    &component,
                    &self.sessions,
                    &self.store,
                )
                .await
                {
                    error!(
                        ?err,
                        custom_id = %component.data.custom_id,
                        "Failed to handle settings interaction"
                    );
                }
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    // Default: mirrorbot=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mirrorbot=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = Params::new()?;
    info!(?params, "Application parameters loaded");

    // GUILD_MEMBERS is needed to populate the watched-user list in /settings
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(Handler::new(&params)?)
        .await
        .context("Creating Discord Client")?;

    client.start().await.context("Running Discord Client")
}
