use crate::domain::{PostFields, PostId};
use crate::error::ControllerError;

/// The authenticated session of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
}

impl Session {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

/// Route parameters extracted from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub id: Option<PostId>,
}

impl RouteParams {
    pub fn with_id(id: impl Into<PostId>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    /// The `id` parameter, required by every per-post operation.
    pub fn id(&self) -> Result<&PostId, ControllerError> {
        self.id.as_ref().ok_or(ControllerError::MissingParam("id"))
    }
}

/// Everything a post controller reads from an incoming request.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub body: PostFields,
    pub params: RouteParams,
    pub session: Session,
}

impl PostRequest {
    pub fn new(session: Session) -> Self {
        Self {
            body: PostFields::default(),
            params: RouteParams::default(),
            session,
        }
    }

    pub fn with_body(mut self, body: PostFields) -> Self {
        self.body = body;
        self
    }

    pub fn with_id(mut self, id: impl Into<PostId>) -> Self {
        self.params.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Result<&PostId, ControllerError> {
        self.params.id()
    }
}
