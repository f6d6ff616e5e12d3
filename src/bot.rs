use chrono::{DateTime, Utc};
use teloxide::utils::command::BotCommands;
use tracing::debug;

use crate::config::Config;
use crate::info::age::{AgeEstimator, IdTimestampEstimator};
use crate::info::render::{self, SELF_HEADING};
use crate::info::{self, PersonSummary};
use crate::platform::Inbound;
use crate::texts;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "welcome message")]
    Start,
    #[command(description = "show this help")]
    Help,
    #[command(description = "show your Telegram ID")]
    MyId,
}

/// Shared application state. Read-only once built.
pub struct AppState {
    pub config: Config,
    estimator: Box<dyn AgeEstimator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_estimator(config, Box::new(IdTimestampEstimator))
    }

    pub fn with_estimator(config: Config, estimator: Box<dyn AgeEstimator>) -> Self {
        Self { config, estimator }
    }

    /// Build the single HTML reply for an inbound event.
    pub fn respond(&self, inbound: &Inbound, now: DateTime<Utc>) -> String {
        let voice = self.config.bot.voice;
        match inbound {
            Inbound::Command { command, requester } => {
                debug!("Command {:?} from user {}", command, requester.id);
                match command {
                    Command::Start => texts::welcome(voice, &requester.first_name),
                    Command::Help => texts::help(voice).to_string(),
                    Command::MyId => self.render_self(requester, now),
                }
            }
            Inbound::Forwarded(event) => {
                let disclosure = info::classify(event);
                debug!("Forward classified as {:?}", disclosure);
                render::render_disclosure(&disclosure, self.estimator.as_ref(), now, voice)
            }
        }
    }

    fn render_self(&self, requester: &PersonSummary, now: DateTime<Utc>) -> String {
        // Whoever runs a command is a person, whatever the flag says.
        let person = PersonSummary {
            is_bot: false,
            ..requester.clone()
        };
        let age = self.estimator.estimate(person.id, now);
        render::render_person(SELF_HEADING, &person, &age)
    }
}
