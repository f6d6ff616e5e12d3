use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use teloxide::dispatching::HandlerExt;
use teloxide::prelude::*;
use teloxide::types::{Chat, MessageOrigin, ParseMode, ReplyParameters, User};
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::bot::{AppState, Command};
use crate::info::{ChannelKind, ChannelSummary, ForwardedEvent, PersonSummary};
use crate::platform::Inbound;

pub fn person_from_user(user: &User) -> PersonSummary {
    PersonSummary {
        id: user.id.0,
        is_bot: user.is_bot,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
        language_code: user.language_code.clone(),
    }
}

pub fn channel_from_chat(chat: &Chat) -> ChannelSummary {
    let kind = if chat.is_channel() {
        ChannelKind::Channel
    } else if chat.is_supergroup() {
        ChannelKind::Supergroup
    } else if chat.is_group() {
        ChannelKind::Group
    } else {
        ChannelKind::Private
    };

    ChannelSummary {
        id: chat.id.0,
        kind,
        title: chat.title().map(str::to_string),
        username: chat.username().map(str::to_string),
    }
}

/// Flatten Telegram's forward origin into the platform-neutral event.
pub fn forwarded_event(origin: &MessageOrigin) -> ForwardedEvent {
    match origin {
        MessageOrigin::User {
            date, sender_user, ..
        } => ForwardedEvent {
            source_user: Some(person_from_user(sender_user)),
            forwarded_at: Some(*date),
            ..Default::default()
        },
        MessageOrigin::HiddenUser {
            date,
            sender_user_name,
            ..
        } => ForwardedEvent {
            sender_name: Some(sender_user_name.clone()),
            forwarded_at: Some(*date),
            ..Default::default()
        },
        MessageOrigin::Chat {
            date, sender_chat, ..
        } => ForwardedEvent {
            source_channel: Some(channel_from_chat(sender_chat)),
            forwarded_at: Some(*date),
            ..Default::default()
        },
        MessageOrigin::Channel { date, chat, .. } => ForwardedEvent {
            source_channel: Some(channel_from_chat(chat)),
            forwarded_at: Some(*date),
            ..Default::default()
        },
    }
}

/// Run the Telegram bot platform
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let bot = Bot::new(&state.config.telegram.bot_token);

    info!("Starting Telegram platform...");

    match bot.get_me().await {
        Ok(me) => info!("Authorized as @{}", me.username()),
        Err(e) => warn!("Failed to fetch bot identity: {}", e),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            dptree::filter_map(|msg: Message| msg.forward_origin().cloned())
                .endpoint(handle_forwarded),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            debug!("Ignoring update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("telegram"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram platform stopped");
    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    command: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let requester = match msg.from.as_ref() {
        Some(user) => person_from_user(user),
        None => return Ok(()),
    };

    info!("Command {:?} from user {}", command, requester.id);

    let reply = state.respond(&Inbound::Command { command, requester }, Utc::now());
    send_reply(&bot, &msg, reply).await
}

async fn handle_forwarded(
    bot: Bot,
    msg: Message,
    origin: MessageOrigin,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    info!("Forwarded message in chat {}", msg.chat.id.0);

    let reply = state.respond(&Inbound::Forwarded(forwarded_event(&origin)), Utc::now());
    send_reply(&bot, &msg, reply).await
}

async fn send_reply(bot: &Bot, msg: &Message, text: String) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;
    Ok(())
}
