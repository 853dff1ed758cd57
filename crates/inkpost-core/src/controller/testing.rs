//! Recording fakes for controller tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{NewPost, Post, PostFields, PostId};
use crate::error::ModelError;
use crate::ports::{PostModel, ResponseContext};

/// How every call to a [`StubPostModel`] completes.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Succeed,
    Fail,
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelCall {
    Create(NewPost),
    Update(PostId, PostFields),
    Delete(PostId),
    FindById(PostId),
    List,
}

pub struct StubPostModel {
    outcome: Outcome,
    calls: Mutex<Vec<ModelCall>>,
}

impl StubPostModel {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ModelCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ModelCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn stored(id: PostId) -> Post {
        Post {
            id,
            title: "My first test post".to_string(),
            content: "Random content".to_string(),
            author: "stswenguser".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn failure() -> ModelError {
        ModelError::Query("Some error message".to_string())
    }
}

#[async_trait]
impl PostModel for StubPostModel {
    async fn create(&self, attrs: NewPost) -> Result<Post, ModelError> {
        self.record(ModelCall::Create(attrs.clone()));
        match self.outcome {
            Outcome::Succeed => Ok(Post {
                title: attrs.title,
                content: attrs.content,
                author: attrs.author,
                ..Self::stored(PostId::new("507asdghajsdhjgasd"))
            }),
            Outcome::Fail | Outcome::Missing => Err(Self::failure()),
        }
    }

    async fn update(&self, id: &PostId, attrs: &PostFields) -> Result<Post, ModelError> {
        self.record(ModelCall::Update(id.clone(), attrs.clone()));
        match self.outcome {
            Outcome::Succeed => {
                let mut post = Self::stored(id.clone());
                post.apply(attrs)?;
                Ok(post)
            }
            Outcome::Fail => Err(Self::failure()),
            Outcome::Missing => Err(ModelError::NotFound),
        }
    }

    async fn delete(&self, id: &PostId) -> Result<(), ModelError> {
        self.record(ModelCall::Delete(id.clone()));
        match self.outcome {
            Outcome::Succeed => Ok(()),
            Outcome::Fail => Err(Self::failure()),
            Outcome::Missing => Err(ModelError::NotFound),
        }
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, ModelError> {
        self.record(ModelCall::FindById(id.clone()));
        match self.outcome {
            Outcome::Succeed => Ok(Some(Self::stored(id.clone()))),
            Outcome::Fail => Err(Self::failure()),
            Outcome::Missing => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Post>, ModelError> {
        self.record(ModelCall::List);
        match self.outcome {
            Outcome::Succeed => Ok(vec![Self::stored(PostId::new("507asdghajsdhjgasd"))]),
            Outcome::Fail => Err(Self::failure()),
            Outcome::Missing => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseCall {
    Flash(String, String),
    Json(Post),
    Redirect(String),
    Status(u16),
    End,
}

/// Response that records every call made to it, in order.
#[derive(Debug, Default)]
pub struct RecordingResponse {
    pub calls: Vec<ResponseCall>,
}

impl RecordingResponse {
    pub fn redirects(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ResponseCall::Redirect(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn flashes(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ResponseCall::Flash(kind, message) => Some((kind.clone(), message.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn json_payloads(&self) -> Vec<Post> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ResponseCall::Json(post) => Some(post.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<u16> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ResponseCall::Status(code) => Some(*code),
                _ => None,
            })
            .collect()
    }

    pub fn ended(&self) -> bool {
        self.calls.contains(&ResponseCall::End)
    }
}

impl ResponseContext for RecordingResponse {
    fn flash(&mut self, kind: &str, message: &str) {
        self.calls
            .push(ResponseCall::Flash(kind.to_string(), message.to_string()));
    }

    fn json(&mut self, post: &Post) {
        self.calls.push(ResponseCall::Json(post.clone()));
    }

    fn redirect(&mut self, path: &str) {
        self.calls.push(ResponseCall::Redirect(path.to_string()));
    }

    fn status(&mut self, code: u16) {
        self.calls.push(ResponseCall::Status(code));
    }

    fn end(&mut self) {
        self.calls.push(ResponseCall::End);
    }
}
