//! Builders for the settings menu components
//!
//! The menu is three select lists (watched user, source channel, destination
//! channel) and a save button. Each list carries at most 25 options, the
//! display limit Discord enforces on select menus; guilds with more
//! candidates only get the first 25, with no pagination.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};
use serenity::model::channel::{ChannelType, GuildChannel};
use serenity::model::guild::Member;

pub const USER_SELECT_ID: &str = "repost_settings_user";
pub const SOURCE_SELECT_ID: &str = "repost_settings_source";
pub const DEST_SELECT_ID: &str = "repost_settings_dest";
pub const SAVE_BUTTON_ID: &str = "repost_settings_save";

const COMPONENT_ID_PREFIX: &str = "repost_settings_";

/// Discord renders at most 25 options per select menu
pub const MAX_SELECT_OPTIONS: usize = 25;

/// Check whether a component interaction belongs to the settings menu
pub fn is_settings_component(custom_id: &str) -> bool {
    custom_id.starts_with(COMPONENT_ID_PREFIX)
}

/// Build the component rows of the settings menu
pub fn settings_components(members: &[Member], channels: &[GuildChannel]) -> Vec<CreateActionRow> {
    let user_options = member_options(members);
    let channel_options = channel_options(channels);

    let user_select = CreateSelectMenu::new(
        USER_SELECT_ID,
        CreateSelectMenuKind::String {
            options: user_options,
        },
    )
    .placeholder("👤 Select user to watch")
    .min_values(1)
    .max_values(1);

    let source_select = CreateSelectMenu::new(
        SOURCE_SELECT_ID,
        CreateSelectMenuKind::String {
            options: channel_options.clone(),
        },
    )
    .placeholder("📥 Select source channel")
    .min_values(1)
    .max_values(1);

    let dest_select = CreateSelectMenu::new(
        DEST_SELECT_ID,
        CreateSelectMenuKind::String {
            options: channel_options,
        },
    )
    .placeholder("📤 Select destination channel")
    .min_values(1)
    .max_values(1);

    let save_button = CreateButton::new(SAVE_BUTTON_ID)
        .label("💾 Save Settings")
        .style(ButtonStyle::Success);

    vec![
        CreateActionRow::SelectMenu(user_select),
        CreateActionRow::SelectMenu(source_select),
        CreateActionRow::SelectMenu(dest_select),
        CreateActionRow::Buttons(vec![save_button]),
    ]
}

/// Options for the watched-user list: non-bot members, first 25
fn member_options(members: &[Member]) -> Vec<CreateSelectMenuOption> {
    members
        .iter()
        .filter(|member| !member.user.bot)
        .take(MAX_SELECT_OPTIONS)
        .map(|member| {
            CreateSelectMenuOption::new(member.display_name().to_string(), member.user.id.to_string())
        })
        .collect()
}

/// Options for the channel lists: text channels in sidebar order, first 25
fn channel_options(channels: &[GuildChannel]) -> Vec<CreateSelectMenuOption> {
    let mut text_channels: Vec<&GuildChannel> = channels
        .iter()
        .filter(|channel| channel.kind == ChannelType::Text)
        .collect();
    text_channels.sort_by_key(|channel| (channel.position, channel.id));

    text_channels
        .into_iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|channel| {
            CreateSelectMenuOption::new(format!("#{}", channel.name), channel.id.to_string())
        })
        .collect()
}
