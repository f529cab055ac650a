//! Command dispatcher.
//!
//! Matches incoming chat messages against the bot's command grammar and
//! drives the API client and session store. The chat SDK's connection and
//! event loop live outside this crate: callers feed each incoming message
//! to [`Dispatcher::handle_message`] and post the returned reply (if any)
//! back to the originating channel.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::BotConfig;
use crate::honeypot::{self, RecruiterClient, TalentsPage};
use crate::session::SessionStore;

lazy_static! {
    static ref LOGIN_RE: Regex =
        Regex::new(r"(?i)^login (?P<email>\S+) (?P<password>\S+)\s*$").unwrap();
    static ref SEARCH_RE: Regex = Regex::new(r"(?i)^search (?P<keywords>.*)$").unwrap();
    static ref GREETING_RE: Regex =
        Regex::new(r"(?i)^(hi|hey|hello|hallo) bearbot\s*$").unwrap();
    static ref HELP_RE: Regex = Regex::new(r"(?i)^help\s*$").unwrap();
    static ref MAILTO_RE: Regex = Regex::new(r"<mailto:(?P<email>[^|>]+)(\|[^>]*)?>").unwrap();
}

/// Reply to a `search` from a user with no session.
pub const SIGN_IN_FIRST: &str = "I can't do this if you don't sign in as recruiter :(";

// ---------------------------------------------------------------------------
// Command grammar
// ---------------------------------------------------------------------------

/// A recognized chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `login <email> <password>` — sign in as recruiter.
    Login { email: String, password: String },
    /// `search <keywords>` — talent search with the stored session.
    Search { keywords: String },
    /// A greeting addressed to the bot.
    Greeting,
    /// `help` — static usage text.
    Help,
}

/// Parse a chat message into a command.
///
/// Returns `None` for anything outside the grammar; such messages get no
/// reply at all.
pub fn parse_command(text: &str) -> Option<Command> {
    if let Some(caps) = LOGIN_RE.captures(text) {
        return Some(Command::Login {
            email: extract_email(&caps["email"]),
            password: caps["password"].to_string(),
        });
    }
    if let Some(caps) = SEARCH_RE.captures(text) {
        return Some(Command::Search {
            keywords: caps["keywords"].to_string(),
        });
    }
    if GREETING_RE.is_match(text) {
        return Some(Command::Greeting);
    }
    if HELP_RE.is_match(text) {
        return Some(Command::Help);
    }
    None
}

/// Pull the address out of a Slack-style `<mailto:addr|label>` link.
///
/// Plain addresses pass through unchanged; a bare `<...>` wrapping is
/// stripped. Both input shapes are accepted on purpose.
pub fn extract_email(token: &str) -> String {
    match MAILTO_RE.captures(token) {
        Some(caps) => caps["email"].to_string(),
        None => token
            .trim_start_matches('<')
            .trim_end_matches('>')
            .to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes parsed commands to the API client and session store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: BotConfig,
    sessions: SessionStore,
}

impl Dispatcher {
    /// Create a dispatcher over the given config and session store.
    pub fn new(config: BotConfig, sessions: SessionStore) -> Self {
        Self { config, sessions }
    }

    /// Handle one incoming message from a chat user.
    ///
    /// Returns the reply to post in the originating channel, or `None`
    /// when the message is not addressed to the bot.
    pub async fn handle_message(&self, chat_user_id: &str, text: &str) -> Option<String> {
        match parse_command(text)? {
            Command::Login { email, password } => {
                Some(self.login(chat_user_id, &email, &password).await)
            }
            Command::Search { keywords } => Some(self.search(chat_user_id, &keywords).await),
            Command::Greeting => Some("Hey <3".to_string()),
            Command::Help => Some(help_text().to_string()),
        }
    }

    async fn login(&self, chat_user_id: &str, email: &str, password: &str) -> String {
        match RecruiterClient::sign_in(&self.config.api_base_url, email, password).await {
            Ok(client) => {
                let reply = greeting(&client.profile().firstname);
                self.sessions.put(chat_user_id, client);
                reply
            }
            // AuthenticationFailed renders as "Authentication failed.";
            // other errors surface their own text in-channel.
            Err(e) => e.to_string(),
        }
    }

    async fn search(&self, chat_user_id: &str, keywords: &str) -> String {
        let client = match self.sessions.get(chat_user_id) {
            Some(client) => client,
            None => return SIGN_IN_FIRST.to_string(),
        };

        match client.find_talents(keywords).await {
            Ok(page) => format_talents(client.base_url(), &page),
            Err(e) => e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reply formatting
// ---------------------------------------------------------------------------

/// Greeting posted after a successful login.
pub fn greeting(firstname: &str) -> String {
    format!("Hey {}", firstname)
}

/// Render a talents page as chat text.
///
/// Each talent becomes `headline` + newline + profile URL (URL alone when
/// the headline is absent), entries separated by a blank line.
pub fn format_talents(base_url: &str, page: &TalentsPage) -> String {
    page.talents
        .iter()
        .map(|talent| {
            let url = honeypot::talent_url(base_url, talent.id);
            match &talent.headline {
                Some(headline) => format!("{}\n{}", headline, url),
                None => url,
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Static usage text for the `help` command.
pub fn help_text() -> &'static str {
    "Bearbot\n\
     login <email> <password> - sign you in as recruiter (private message!)\n\
     search [keywords] - search talents for given keyword (i.e. \"frontend developer\")"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
