use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::{Advice, ChatTurn, Role};
use crate::catalog::Enchantment;

const MODEL: &str = "gemini-2.5-flash";

const CHAT_SYSTEM_INSTRUCTION: &str = "You are the Mystic Guide, an ancient and helpful AI \
    specialized in Minecraft enchantments, mechanics, and builds. You are witty, concise, and \
    use magical/gaming terminology. Keep answers short and helpful.";

/// Raw Gemini REST client. All methods are fallible; the [`Advisor`](super::Advisor)
/// facade maps failures to fallback text.
pub struct OracleClient {
    api_key: String,
    client: Client,
}

impl OracleClient {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("enchant-codex")
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { api_key, client })
    }

    /// Structured advice for one enchantment. The model is asked for a JSON
    /// object with `advice` and `synergy` string fields.
    pub fn enchantment_advice(&self, enchant: &Enchantment, context: &str) -> Result<Advice> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": advice_prompt(enchant, context) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "advice": { "type": "STRING" },
                        "synergy": { "type": "STRING" }
                    }
                }
            }
        });

        let text = self.generate(&body)?;
        serde_json::from_str(&text).context("Failed to parse advice response")
    }

    /// Free-text build strategy for an item name
    pub fn build_strategy(&self, item: &str) -> Result<String> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": format!(
                    "What is the absolute best \"God\" enchantment build for a Minecraft {} \
                     in the current version? List the specific enchantments and levels. \
                     Explain briefly why this combination is powerful.",
                    item
                ) }]
            }]
        });

        self.generate(&body)
    }

    /// Next turn of a multi-turn conversation under the Mystic Guide persona
    pub fn chat(&self, history: &[ChatTurn], message: &str) -> Result<String> {
        let mut contents = chat_contents(history);
        contents.push(json!({
            "role": "user",
            "parts": [{ "text": message }]
        }));

        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": CHAT_SYSTEM_INSTRUCTION }]
            },
            "contents": contents
        });

        self.generate(&body)
    }

    /// POST a generateContent request and pull out the first candidate's text
    fn generate(&self, body: &Value) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            MODEL
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .context("Failed to reach the Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(anyhow!("Gemini API returned {}: {}", status, detail));
        }

        let json: Value = response.json().context("Failed to read response body")?;
        extract_text(&json).ok_or_else(|| anyhow!("No response from oracle"))
    }
}

fn advice_prompt(enchant: &Enchantment, context: &str) -> String {
    format!(
        "You are an expert Minecraft mechanic guide.\n\
         Analyze the enchantment \"{}\" (Max Level: {}) for items: {}.\n\n\
         Context: {}.\n\n\
         Provide:\n\
         1. A short, pro-tip style advice on how to best use this enchantment.\n\
         2. Synergy notes (what other enchants go well with it).\n\n\
         Keep it brief, gamer-focused, and exciting.",
        enchant.name,
        enchant.max_level,
        enchant.items.join(", "),
        context
    )
}

fn chat_contents(history: &[ChatTurn]) -> Vec<Value> {
    history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
            };
            json!({
                "role": role,
                "parts": [{ "text": turn.text }]
            })
        })
        .collect()
}

/// `candidates[0].content.parts[0].text` of a generateContent response
fn extract_text(json: &Value) -> Option<String> {
    json["candidates"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["content"]["parts"].as_array())
        .and_then(|parts| parts.first())
        .and_then(|p| p["text"].as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::enchantment_by_id;

    #[test]
    fn test_advice_prompt_mentions_record_fields() {
        let mend = enchantment_by_id("mend").unwrap();
        let prompt = advice_prompt(mend, "general usage");
        assert!(prompt.contains("Mending"));
        assert!(prompt.contains("Max Level: 1"));
        assert!(prompt.contains("All Tools"));
        assert!(prompt.contains("general usage"));
    }

    #[test]
    fn test_chat_contents_maps_roles() {
        let history = vec![ChatTurn::user("hello"), ChatTurn::model("greetings")];
        let contents = chat_contents(&history);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "greetings");
    }

    #[test]
    fn test_extract_text_from_candidate() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "use it on boots" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&response).as_deref(), Some("use it on boots"));
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        assert!(extract_text(&json!({})).is_none());
        assert!(extract_text(&json!({ "candidates": [] })).is_none());
    }
}
