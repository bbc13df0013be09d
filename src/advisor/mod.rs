//! AI advice service: a best-effort Gemini client behind a memoizing,
//! infallible facade. Every public operation returns fixed fallback text on
//! missing credentials or any request failure; errors never cross this
//! boundary.

pub mod client;
pub mod worker;

pub use client::OracleClient;
pub use worker::{AdviceReply, AdviceRequest, AdvisorWorker};

use serde::Deserialize;
use std::collections::HashMap;

use crate::catalog::Enchantment;

/// Environment variable holding the Gemini API key. Absence is a handled
/// state, not a startup failure.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Advice for a single enchantment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Advice {
    pub advice: String,
    pub synergy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One prior turn of a chat conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Memoizing advice facade.
///
/// Advice and build-strategy results are cached unbounded for the process
/// lifetime; input cardinality is bounded by the fixture, so no eviction is
/// needed. Chat is history-dependent and never cached. Failed requests are
/// not cached either, so a transient failure is retried on the next ask.
pub struct Advisor {
    client: Option<OracleClient>,
    advice_cache: HashMap<String, Advice>,
    build_cache: HashMap<String, String>,
}

impl Advisor {
    /// Build from the `GEMINI_API_KEY` environment variable. A missing or
    /// empty key degrades every call to its fallback text.
    pub fn from_env() -> Self {
        let client = std::env::var(API_KEY_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .and_then(|key| match OracleClient::new(key) {
                Ok(c) => Some(c),
                Err(err) => {
                    eprintln!("advisor: failed to build HTTP client: {err:#}");
                    None
                }
            });

        Self {
            client,
            advice_cache: HashMap::new(),
            build_cache: HashMap::new(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.client.is_some()
    }

    /// Usage advice and synergy notes for one enchantment
    pub fn advice(&mut self, enchant: &Enchantment, context: &str) -> Advice {
        let key = format!("{}-{}", enchant.id, context);
        if let Some(cached) = self.advice_cache.get(&key) {
            return cached.clone();
        }

        let Some(client) = &self.client else {
            return Advice {
                advice: "API Key missing. Unable to fetch arcane knowledge.".into(),
                synergy: "Unknown".into(),
            };
        };

        match client.enchantment_advice(enchant, context) {
            Ok(advice) => {
                self.advice_cache.insert(key, advice.clone());
                advice
            }
            Err(err) => {
                eprintln!("advisor: advice request failed: {err:#}");
                Advice {
                    advice: "The arcane connection is disrupted. Try again later.".into(),
                    synergy: "Unknown".into(),
                }
            }
        }
    }

    /// Best "god build" strategy for an item name
    pub fn build_strategy(&mut self, item: &str) -> String {
        let key = item.trim().to_lowercase();
        if let Some(cached) = self.build_cache.get(&key) {
            return cached.clone();
        }

        let Some(client) = &self.client else {
            return "API Key missing.".into();
        };

        match client.build_strategy(item) {
            Ok(strategy) => {
                self.build_cache.insert(key, strategy.clone());
                strategy
            }
            Err(err) => {
                eprintln!("advisor: build strategy request failed: {err:#}");
                "Failed to retrieve build strategy.".into()
            }
        }
    }

    /// Next model turn for an ongoing conversation. Not memoized.
    pub fn chat(&mut self, history: &[ChatTurn], message: &str) -> String {
        let Some(client) = &self.client else {
            return "I cannot connect to the arcane network (API Key Missing).".into();
        };

        match client.chat(history, message) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("advisor: chat request failed: {err:#}");
                "Something disturbed the magic. Please try asking again.".into()
            }
        }
    }
}
