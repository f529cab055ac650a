//! Per-chat-user session store.
//!
//! Maps a chat-user identifier to the authenticated API client created by
//! that user's login. The store is constructed explicitly and handed to the
//! dispatcher instead of living in process-global state. Thread-safe;
//! last write wins when the same user logs in twice.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::honeypot::RecruiterClient;

/// Thread-safe map from chat-user id to an authenticated client.
///
/// Sessions are never evicted; they live for the process lifetime or until
/// a later login from the same user replaces them.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<RecruiterClient>>>>,
}

impl SessionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the session for a chat user, replacing any previous one.
    pub fn put(&self, chat_user_id: &str, client: RecruiterClient) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(chat_user_id.to_string(), Arc::new(client));
        }
    }

    /// The session for a chat user, if that user has logged in.
    pub fn get(&self, chat_user_id: &str) -> Option<Arc<RecruiterClient>> {
        self.sessions
            .read()
            .ok()
            .and_then(|sessions| sessions.get(chat_user_id).cloned())
    }

    /// Number of signed-in chat users.
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Check if nobody has logged in yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::honeypot::RecruiterProfile;

    fn client(token: &str, firstname: &str) -> RecruiterClient {
        RecruiterClient::from_parts(
            "https://acme.example",
            token,
            RecruiterProfile {
                token: token.to_string(),
                firstname: firstname.to_string(),
                lastname: None,
                email: None,
            },
        )
    }

    #[test]
    fn test_put_and_get() {
        let store = SessionStore::new();
        store.put("U1", client("t1", "Sam"));

        let session = store.get("U1").unwrap();
        assert_eq!(session.profile().firstname, "Sam");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = SessionStore::new();
        assert!(store.get("U1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_overwrites() {
        let store = SessionStore::new();
        store.put("U1", client("t1", "Sam"));
        store.put("U1", client("t2", "Alex"));

        let session = store.get("U1").unwrap();
        assert_eq!(session.profile().firstname, "Alex");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sessions_are_per_user() {
        let store = SessionStore::new();
        store.put("U1", client("t1", "Sam"));

        assert!(store.get("U1").is_some());
        assert!(store.get("U2").is_none());
    }

    #[test]
    fn test_thread_safety() {
        use std::thread;

        let store = SessionStore::new();
        let writer_store = store.clone();
        let writer = thread::spawn(move || {
            for i in 0..50 {
                writer_store.put(&format!("U{}", i), client("t", "Sam"));
            }
        });

        let reader_store = store.clone();
        let reader = thread::spawn(move || {
            for i in 0..50 {
                let _ = reader_store.get(&format!("U{}", i));
            }
        });

        writer.join().unwrap();
        reader.join().unwrap();

        assert_eq!(store.len(), 50);
    }
}
