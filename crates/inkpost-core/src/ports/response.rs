//! Response port - what a controller may do to the response of a request.

use crate::domain::Post;

/// Flash kind used for failed operations.
pub const FLASH_ERROR: &str = "error_msg";

/// Per-request response surface written to by controllers.
pub trait ResponseContext: Send {
    /// Queue a one-shot user notification for the next rendered page.
    fn flash(&mut self, kind: &str, message: &str);

    /// Send a post as the JSON payload.
    fn json(&mut self, post: &Post);

    /// Redirect the client to `path`.
    fn redirect(&mut self, path: &str);

    /// Set the response status code.
    fn status(&mut self, code: u16);

    /// Finish the response without a body.
    fn end(&mut self);
}
