use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ModelError;

/// Opaque post identifier, assigned by the model on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Post entity - a blog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post from validated attributes, assigning id and date.
    pub fn new(attrs: NewPost) -> Self {
        Self {
            id: PostId::generate(),
            title: attrs.title,
            content: attrs.content,
            author: attrs.author,
            date: Utc::now(),
        }
    }

    /// Apply submitted fields to this post.
    ///
    /// Only `title` and `content` are mutable; `_id`, `author` and `date`
    /// are preserved no matter what the fields contain.
    pub fn apply(&mut self, fields: &PostFields) -> Result<(), ModelError> {
        let title = fields.string_field("title")?;
        let content = fields.string_field("content")?;

        if let Some(title) = title {
            validate_title(title)?;
            self.title = title.to_string();
        }
        if let Some(content) = content {
            self.content = content.to_string();
        }
        Ok(())
    }
}

/// Attributes handed to the model when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title is required".to_string()));
    }
    Ok(())
}

/// Fields submitted with a request body, kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostFields(Map<String, Value>);

impl PostFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.get("content").and_then(Value::as_str)
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author").and_then(Value::as_str)
    }

    // Absent and null are both "not submitted"; anything else must be a string.
    fn string_field(&self, key: &str) -> Result<Option<&str>, ModelError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ModelError::Validation(format!("{key} must be a string"))),
        }
    }
}

impl From<Map<String, Value>> for PostFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
