//! Actix adapter for the controller response port.

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse};
use url::form_urlencoded;

use inkpost_core::domain::Post;
use inkpost_core::ports::ResponseContext;

/// Cookie carrying the pending flash message.
pub const FLASH_COOKIE: &str = "flash";

/// Collects what a controller did to the response, then renders it.
#[derive(Debug, Default)]
pub struct HttpResponseContext {
    status: Option<StatusCode>,
    json: Option<Post>,
    redirect: Option<String>,
    flash: Option<(String, String)>,
}

impl HttpResponseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render as an HTTP response.
    ///
    /// A redirect is a `303 See Other`; a JSON payload sent alongside it
    /// becomes the redirect's body.
    pub fn into_response(self) -> HttpResponse {
        let default_status = if self.redirect.is_some() {
            StatusCode::SEE_OTHER
        } else {
            StatusCode::OK
        };
        let mut builder = HttpResponse::build(self.status.unwrap_or(default_status));

        if let Some(location) = self.redirect {
            builder.insert_header((header::LOCATION, location));
        }
        if let Some((kind, message)) = self.flash {
            builder.cookie(flash_cookie(&kind, &message));
        }

        match self.json {
            Some(post) => builder.json(post),
            None => builder.finish(),
        }
    }
}

impl ResponseContext for HttpResponseContext {
    fn flash(&mut self, kind: &str, message: &str) {
        self.flash = Some((kind.to_string(), message.to_string()));
    }

    fn json(&mut self, post: &Post) {
        self.json = Some(post.clone());
    }

    fn redirect(&mut self, path: &str) {
        self.redirect = Some(path.to_string());
    }

    fn status(&mut self, code: u16) {
        match StatusCode::from_u16(code) {
            Ok(status) => self.status = Some(status),
            Err(_) => {
                tracing::error!(code, "Controller set an invalid status code");
                self.status = Some(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }

    fn end(&mut self) {
        self.json = None;
    }
}

fn flash_cookie(kind: &str, message: &str) -> Cookie<'static> {
    let value = form_urlencoded::Serializer::new(String::new())
        .append_pair(kind, message)
        .finish();

    Cookie::build(FLASH_COOKIE, value)
        .path("/")
        .http_only(true)
        .finish()
}

/// Cookie that clears a consumed flash message on the client.
pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Read the pending flash message of a request, if any.
pub fn read_flash(req: &HttpRequest) -> Option<(String, String)> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    parse_flash(cookie.value())
}

fn parse_flash(value: &str) -> Option<(String, String)> {
    form_urlencoded::parse(value.as_bytes())
        .next()
        .map(|(kind, message)| (kind.into_owned(), message.into_owned()))
}
