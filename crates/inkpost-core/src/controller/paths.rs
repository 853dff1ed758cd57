//! Redirect targets for post pages.

use crate::domain::PostId;

pub const POSTS: &str = "/posts";
pub const ADD_POST: &str = "/posts/add";

/// `/posts/{id}`
pub fn post(id: &PostId) -> String {
    format!("{POSTS}/{id}")
}

/// `/posts/edit/{id}`
pub fn edit_post(id: &PostId) -> String {
    format!("{POSTS}/edit/{id}")
}
