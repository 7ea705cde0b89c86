//! Interaction handling for the settings workflow
//!
//! `/settings` opens an ephemeral menu and registers a session keyed by the
//! menu message. Selections update one draft field each and are acknowledged
//! silently; the save button validates the draft and commits it to the rule
//! store. Validation errors and confirmations are only ever visible to the
//! invoking administrator.

use super::menu;
use super::sessions::{SaveOutcome, SessionStore};
use crate::store::RuleStore;
use anyhow::Context as _;
use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::id::{ChannelId, UserId};
use tracing::{debug, info};

/// Open the settings menu in response to the `/settings` command
///
/// Administrator-only invocation is declared on the command itself; by the
/// time this runs the platform has already enforced it.
pub async fn open(
    ctx: &Context,
    command: &CommandInteraction,
    sessions: &SessionStore,
) -> anyhow::Result<()> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(
            ctx,
            command,
            "⚠️ The settings menu is only available inside a server.",
        )
        .await;
    };

    let members = guild_id
        .members(&ctx.http, None, None)
        .await
        .context("Fetching guild members")?;
    let channels: Vec<_> = guild_id
        .channels(&ctx.http)
        .await
        .context("Fetching guild channels")?
        .into_values()
        .collect();

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("🛠 Configure the repost settings below:")
                    .components(menu::settings_components(&members, &channels))
                    .ephemeral(true),
            ),
        )
        .await
        .context("Sending settings menu")?;

    // Component interactions carry the menu message id, which keys the session
    let message = command
        .get_response(&ctx.http)
        .await
        .context("Fetching settings menu message")?;
    sessions.open(message.id, guild_id);

    info!(
        guild_id = %guild_id,
        message_id = %message.id,
        administrator = %command.user.id,
        "Opened settings session"
    );
    Ok(())
}

/// Handle a component interaction on the settings menu
pub async fn handle_component(
    ctx: &Context,
    component: &ComponentInteraction,
    sessions: &SessionStore,
    store: &RuleStore,
) -> anyhow::Result<()> {
    let message_id = component.message.id;
    let custom_id = component.data.custom_id.as_str();

    if custom_id == menu::SAVE_BUTTON_ID {
        return handle_save(ctx, component, sessions, store).await;
    }

    let Some(value) = selected_id(&component.data.kind) else {
        debug!(%custom_id, "Settings component without a usable selection");
        return acknowledge(ctx, component).await;
    };

    let updated = match custom_id {
        menu::USER_SELECT_ID => {
            sessions.update(message_id, |draft| draft.choose_watched_user(UserId::new(value)))
        }
        menu::SOURCE_SELECT_ID => sessions.update(message_id, |draft| {
            draft.choose_source_channel(ChannelId::new(value))
        }),
        menu::DEST_SELECT_ID => sessions.update(message_id, |draft| {
            draft.choose_destination_channel(ChannelId::new(value))
        }),
        _ => {
            debug!(%custom_id, "Unknown settings component");
            return Ok(());
        }
    };

    if updated {
        // Selections produce no visible reply until save
        acknowledge(ctx, component).await
    } else {
        expired_notice(ctx, component).await
    }
}

async fn handle_save(
    ctx: &Context,
    component: &ComponentInteraction,
    sessions: &SessionStore,
    store: &RuleStore,
) -> anyhow::Result<()> {
    match sessions.save(component.message.id) {
        SaveOutcome::Saved { guild_id, rule } => {
            store.insert(guild_id, rule);
            info!(
                guild_id = %guild_id,
                watched_user = %rule.watched_user,
                source_channel = %rule.source_channel,
                destination_channel = %rule.destination_channel,
                "Repost rule saved"
            );
            reply_ephemeral(ctx, component, "✅ Settings saved!").await
        }
        SaveOutcome::Incomplete => {
            reply_ephemeral(ctx, component, "⚠️ Please select all settings before saving.").await
        }
        SaveOutcome::Expired => expired_notice(ctx, component).await,
    }
}

/// Pull the selected id out of a select menu interaction
fn selected_id(kind: &ComponentInteractionDataKind) -> Option<u64> {
    match kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first()?.parse().ok(),
        _ => None,
    }
}

async fn acknowledge(ctx: &Context, component: &ComponentInteraction) -> anyhow::Result<()> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
        .context("Acknowledging settings selection")?;
    Ok(())
}

async fn reply_ephemeral(
    ctx: &Context,
    component: &ComponentInteraction,
    content: &str,
) -> anyhow::Result<()> {
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await
        .context("Replying to settings interaction")?;
    Ok(())
}

async fn expired_notice(ctx: &Context, component: &ComponentInteraction) -> anyhow::Result<()> {
    reply_ephemeral(
        ctx,
        component,
        "⌛ This settings session has expired. Run /settings to start over.",
    )
    .await
}

async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> anyhow::Result<()> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await
        .context("Replying to settings command")?;
    Ok(())
}
