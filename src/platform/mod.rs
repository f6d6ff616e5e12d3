pub mod telegram;

use crate::bot::Command;
use crate::info::{ForwardedEvent, PersonSummary};

/// An event received from the platform, reduced to what the bot answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A recognized command and the user who sent it.
    Command {
        command: Command,
        requester: PersonSummary,
    },
    /// A forwarded message and whatever origin data came with it.
    Forwarded(ForwardedEvent),
}
