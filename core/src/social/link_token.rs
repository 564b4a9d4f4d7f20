use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::prelude::{JournalError, JournalResult};

const TOKEN_LENGTH: usize = 24;

struct IssuedToken {
    holder: String,
    expires_at: Instant,
}

/// Issues and validates the opaque tokens behind QR friend links.
///
/// Tokens live in memory only; expired entries are dropped when seen or
/// via [`LinkTokenIssuer::purge_expired`].
pub struct LinkTokenIssuer {
    tokens: Mutex<HashMap<String, IssuedToken>>,
    ttl: Duration,
}

impl LinkTokenIssuer {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mints a fresh token bound to `holder`, valid for the issuer TTL.
    pub fn issue(&self, holder: &str) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.insert(
                token.clone(),
                IssuedToken {
                    holder: holder.to_string(),
                    expires_at: Instant::now() + self.ttl,
                },
            );
        }
        token
    }

    /// Returns the holder bound to `token`, or why the link is dead.
    pub fn validate(&self, token: &str) -> JournalResult<String> {
        let mut tokens = self
            .tokens
            .lock()
            .map_err(|_| JournalError::UnknownToken)?;

        let now = Instant::now();
        let (holder, live) = match tokens.get(token) {
            None => return Err(JournalError::UnknownToken),
            Some(entry) => (entry.holder.clone(), entry.expires_at > now),
        };

        if live {
            Ok(holder)
        } else {
            tokens.remove(token);
            Err(JournalError::ExpiredToken)
        }
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        if let Ok(mut tokens) = self.tokens.lock() {
            let now = Instant::now();
            tokens.retain(|_, entry| entry.expires_at > now);
        }
    }

    pub fn active_count(&self) -> usize {
        self.tokens.lock().map(|tokens| tokens.len()).unwrap_or(0)
    }
}
