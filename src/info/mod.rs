pub mod age;
pub mod render;

use chrono::{DateTime, Utc};

/// A user as seen in a single inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSummary {
    pub id: u64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChannelKind {
    /// Capitalized label shown in the Type row.
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Private => "Private",
            ChannelKind::Group => "Group",
            ChannelKind::Supergroup => "Supergroup",
            ChannelKind::Channel => "Channel",
        }
    }
}

/// A chat or channel a message was forwarded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    /// Chat ids are negative for groups and channels.
    pub id: i64,
    pub kind: ChannelKind,
    pub title: Option<String>,
    pub username: Option<String>,
}

/// Forward metadata carried by an inbound message, independent of the platform types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedEvent {
    pub source_user: Option<PersonSummary>,
    pub source_channel: Option<ChannelSummary>,
    pub sender_name: Option<String>,
    pub forwarded_at: Option<DateTime<Utc>>,
}

/// How much the platform revealed about a forward's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardDisclosure {
    FullPerson(PersonSummary),
    FullChannel(ChannelSummary),
    PartialName {
        name: String,
        forwarded_at: Option<DateTime<Utc>>,
    },
    Unknown,
}

/// Pick the richest disclosure the event supports. First match wins.
pub fn classify(event: &ForwardedEvent) -> ForwardDisclosure {
    if let Some(user) = &event.source_user {
        return ForwardDisclosure::FullPerson(user.clone());
    }
    if let Some(channel) = &event.source_channel {
        return ForwardDisclosure::FullChannel(channel.clone());
    }
    match &event.sender_name {
        Some(name) if !name.trim().is_empty() => ForwardDisclosure::PartialName {
            name: name.clone(),
            forwarded_at: event.forwarded_at,
        },
        _ => ForwardDisclosure::Unknown,
    }
}
