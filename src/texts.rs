use crate::config::Voice;
use crate::info::render::escape_html;

/// Greeting for `/start`. `first_name` is escaped here.
pub fn welcome(voice: Voice, first_name: &str) -> String {
    let name = escape_html(first_name);
    match voice {
        Voice::Detailed => format!(
            "👋 Hello {}!\n\n\
             I can show information about forwarded messages and user IDs.\n\n\
             🔹 Use /myid to see your Telegram ID\n\
             🔹 Forward any message to see sender info\n\
             🔹 Use /help for assistance",
            name
        ),
        Voice::Brief => format!(
            "👋 Hello {}!\n\n\
             🔍 I can show information about forwarded messages.\n\
             Simply forward me any message and I'll display details about the original sender.\n\n\
             Type /help for more information.",
            name
        ),
    }
}

pub fn help(voice: Voice) -> &'static str {
    match voice {
        Voice::Detailed => {
            "ℹ️ <b>Bot Commands</b>\n\n\
             /start - Welcome message\n\
             /myid - Show your Telegram ID\n\
             /help - This message\n\n\
             <b>How to use:</b>\n\
             1. Forward any message to see sender info\n\
             2. Some info may be hidden due to privacy settings"
        }
        Voice::Brief => {
            "ℹ️ <b>User Info Bot Help</b>\n\n\
             • Forward any message to me to see information about the original sender\n\
             • Some information might be unavailable due to privacy settings\n\n\
             Commands:\n\
             /start - Welcome message\n\
             /myid - Show your Telegram ID\n\
             /help - This help message\n\n\
             The bot will display information in this format:\n\
             👤 User Information\n\
             ├ ID: 123456789\n\
             ├ Is Bot: ❌ No\n\
             ├ First Name: John\n\
             ├ Username: @johndoe\n\
             └ Account Age: 2 years"
        }
    }
}

/// Reply when a forward carries no recognizable origin.
pub fn unknown_sender(voice: Voice) -> &'static str {
    match voice {
        Voice::Detailed => {
            "❌ Couldn't retrieve sender information.\n\
             This might be because:\n\
             1. The message wasn't properly forwarded\n\
             2. The sender has strict privacy settings\n\
             3. It's from a secret chat"
        }
        Voice::Brief => {
            "⚠ Couldn't retrieve sender information. \
             This might be due to privacy settings that prevent forwarding."
        }
    }
}
