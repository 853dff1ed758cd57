//! Controllers - request handling over the ports, independent of any HTTP framework.

mod delete;
mod post;
mod request;

pub mod paths;

#[cfg(test)]
mod testing;

pub use delete::{
    DELETE_FAILED_MESSAGE, ModelPostDeleter, PostDeleter, UnimplementedPostDeleter,
};
pub use post::{CREATE_FAILED_MESSAGE, PostController};
pub use request::{PostRequest, RouteParams, Session};
