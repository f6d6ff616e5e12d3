//! Telegram-HTML rendering of the disclosure tiers as `├`/`└` trees.

use chrono::{DateTime, Utc};

use super::age::AgeEstimator;
use super::{ChannelSummary, ForwardDisclosure, PersonSummary};
use crate::config::Voice;
use crate::texts;

/// Shown for any field the platform did not supply.
pub const PLACEHOLDER: &str = "N/A";

pub const FORWARDED_USER_HEADING: &str = "👤 <b>User Information</b>";
pub const SELF_HEADING: &str = "🆔 <b>Your Telegram ID</b>";
const CHANNEL_HEADING: &str = "📢 <b>Chat Information</b>";
const PARTIAL_HEADING: &str = "👤 <b>Partial Information</b>";
const PRIVACY_NOTE: &str = "ℹ️ User has forwarding privacy enabled";

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escaped value, or the placeholder when absent or blank.
fn field(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => PLACEHOLDER.to_string(),
    }
}

fn tree(heading: &str, rows: &[(&str, String)]) -> String {
    let mut out = String::from(heading);
    out.push('\n');
    for (i, (label, value)) in rows.iter().enumerate() {
        let glyph = if i + 1 == rows.len() { '└' } else { '├' };
        out.push_str(&format!("{} {}: {}\n", glyph, label, value));
    }
    out
}

pub fn render_person(heading: &str, person: &PersonSummary, age: &str) -> String {
    let is_bot = if person.is_bot { "✅ Yes" } else { "❌ No" };
    tree(
        heading,
        &[
            ("ID", format!("<code>{}</code>", person.id)),
            ("Is Bot", is_bot.to_string()),
            ("First Name", field(Some(person.first_name.as_str()))),
            ("Last Name", field(person.last_name.as_deref())),
            ("Username", format!("@{}", field(person.username.as_deref()))),
            ("Language", field(person.language_code.as_deref())),
            ("Account Age", field(Some(age))),
        ],
    )
}

pub fn render_channel(channel: &ChannelSummary) -> String {
    tree(
        CHANNEL_HEADING,
        &[
            ("ID", format!("<code>{}</code>", channel.id)),
            ("Type", channel.kind.label().to_string()),
            ("Title", field(channel.title.as_deref())),
            ("Username", format!("@{}", field(channel.username.as_deref()))),
        ],
    )
}

pub fn render_partial(name: &str, forwarded_at: Option<DateTime<Utc>>) -> String {
    let date = forwarded_at.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string());
    let mut out = tree(
        PARTIAL_HEADING,
        &[
            ("Name", field(Some(name))),
            ("Forward Date", field(date.as_deref())),
        ],
    );
    out.push('\n');
    out.push_str(PRIVACY_NOTE);
    out
}

/// Render whichever tier `classify` produced. Never fails.
pub fn render_disclosure(
    disclosure: &ForwardDisclosure,
    estimator: &dyn AgeEstimator,
    now: DateTime<Utc>,
    voice: Voice,
) -> String {
    match disclosure {
        ForwardDisclosure::FullPerson(person) => render_person(
            FORWARDED_USER_HEADING,
            person,
            &estimator.estimate(person.id, now),
        ),
        ForwardDisclosure::FullChannel(channel) => render_channel(channel),
        ForwardDisclosure::PartialName { name, forwarded_at } => {
            render_partial(name, *forwarded_at)
        }
        ForwardDisclosure::Unknown => texts::unknown_sender(voice).to_string(),
    }
}
