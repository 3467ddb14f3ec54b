use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::catalog::{Character, World};
use crate::{NookError, Result};

pub const DEFAULT_CHARACTER_TYPE: &str = "protagonist";
pub const DEFAULT_GENRE: &str = "fantasy";
pub const DEFAULT_WORLD_TYPE: &str = "fantasy";
pub const DEFAULT_SETTING: &str = "medieval";
pub const DEFAULT_ASSIST_TYPE: &str = "continue";
pub const DEFAULT_TITLE: &str = "Untitled Story";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

pub const HOME_MESSAGE: &str = "Welcome to The Story Nook API";
pub const STORY_SAVED_MESSAGE: &str = "Story saved successfully";

/// Decodes a request body into a typed request. Only a JSON object is a
/// valid body; serde would otherwise fill struct fields from an array by
/// position.
pub fn decode_body<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    if !value.is_object() {
        return Err(NookError::InvalidBody(format!(
            "Expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Accepts any JSON value and keeps it only when it is a string, so a field
/// of the wrong type behaves like an absent one.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterRequest {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub character_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,
}

impl CharacterRequest {
    pub fn character_type(&self) -> &str {
        self.character_type
            .as_deref()
            .unwrap_or(DEFAULT_CHARACTER_TYPE)
    }

    pub fn genre(&self) -> &str {
        self.genre.as_deref().unwrap_or(DEFAULT_GENRE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldRequest {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub world_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub setting: Option<String>,
}

impl WorldRequest {
    pub fn world_type(&self) -> &str {
        self.world_type.as_deref().unwrap_or(DEFAULT_WORLD_TYPE)
    }

    pub fn setting(&self) -> &str {
        self.setting.as_deref().unwrap_or(DEFAULT_SETTING)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WritingAssistRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub prompt: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub assist_type: Option<String>,
}

impl WritingAssistRequest {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("")
    }

    pub fn assist_type(&self) -> &str {
        self.assist_type.as_deref().unwrap_or(DEFAULT_ASSIST_TYPE)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveStoryRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
}

impl SaveStoryRequest {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }
}

/// Body of the grammar-check and paraphrase endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewriteRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

impl RewriteRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Success wrapper shared by the POST endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeStatus {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    pub character: Character,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldResponse {
    pub world: World,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WritingAssistResponse {
    pub suggestions: Vec<String>,
    #[serde(rename = "type")]
    pub assist_type: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveStoryResponse {
    pub story_id: String,
    pub message: String,
    pub saved_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrammarCheckResponse {
    pub corrected: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParaphraseResponse {
    pub paraphrased: String,
    pub generated_at: String,
}
