//! Post handlers - adapt actix requests to the post controller.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use inkpost_core::domain::{PostFields, PostId};
use inkpost_core::{PostRequest, RouteParams};
use inkpost_shared::ApiResponse;
use inkpost_shared::dto::{CreatePostForm, EditPostForm};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::SessionUser;
use crate::response::{HttpResponseContext, clear_flash_cookie, read_flash};
use crate::state::AppState;

/// Submitted fields, as JSON or as an urlencoded form.
type SubmittedFields = web::Either<web::Json<PostFields>, web::Form<PostFields>>;

/// Render `data` with the pending flash message, clearing it on the client.
fn render_with_flash<T: Serialize>(req: &HttpRequest, data: T) -> HttpResponse {
    let Some((kind, message)) = read_flash(req) else {
        return HttpResponse::Ok().json(ApiResponse::ok(data));
    };

    tracing::debug!(kind = %kind, path = %req.path(), "Delivering flash message");
    HttpResponse::Ok()
        .cookie(clear_flash_cookie())
        .json(ApiResponse::ok_with_message(data, message))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;

    Ok(render_with_flash(&req, posts))
}

/// GET /posts/add
///
/// The blank create form; a failed create lands here with its flash message.
pub async fn new_post_form(req: HttpRequest) -> HttpResponse {
    let form = CreatePostForm {
        author: None,
        title: String::new(),
        content: String::new(),
    };

    render_with_flash(&req, form)
}

/// GET /posts/edit/{id}
///
/// The edit form filled with the stored post.
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let post = state
        .posts
        .find_post(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", id)))?;

    let form = EditPostForm {
        title: post.title,
        content: post.content,
    };
    Ok(render_with_flash(&req, form))
}

/// POST /posts/add
pub async fn add_post(
    state: web::Data<AppState>,
    session: SessionUser,
    body: SubmittedFields,
) -> HttpResponse {
    let req = PostRequest::new(session.into_inner()).with_body(body.into_inner());
    let mut res = HttpResponseContext::new();

    state.posts.add_post(&req, &mut res).await;

    res.into_response()
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let params = RouteParams::with_id(path.into_inner());
    let mut res = HttpResponseContext::new();

    state.posts.show_post(&params, &mut res).await?;

    Ok(res.into_response())
}

/// POST /posts/edit/{id}
pub async fn edit_post(
    state: web::Data<AppState>,
    session: SessionUser,
    path: web::Path<String>,
    body: SubmittedFields,
) -> AppResult<HttpResponse> {
    let req = PostRequest::new(session.into_inner())
        .with_id(path.into_inner())
        .with_body(body.into_inner());
    let mut res = HttpResponseContext::new();

    state.posts.edit_post(&req, &mut res).await?;

    Ok(res.into_response())
}

/// POST /posts/delete/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    session: SessionUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let req = PostRequest::new(session.into_inner()).with_id(path.into_inner());
    let mut res = HttpResponseContext::new();

    state.deleter.delete(&req, &mut res).await?;

    Ok(res.into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    use inkpost_core::domain::{NewPost, Post};
    use inkpost_core::ports::{PostModel, TokenService};
    use inkpost_infra::{InMemoryPostModel, JwtConfig, JwtTokenService};
    use inkpost_shared::ErrorResponse;

    use crate::handlers::configure_routes;
    use crate::response::FLASH_COOKIE;
    use crate::state::AppState;

    use super::*;

    struct Fixture {
        model: Arc<InMemoryPostModel>,
        state: AppState,
        token: String,
    }

    fn fixture(delete_enabled: bool) -> Fixture {
        let model = Arc::new(InMemoryPostModel::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }));
        let token = tokens.generate_token("stswenguser", vec![]).unwrap();
        let state = AppState::with_model(model.clone(), tokens, delete_enabled);

        Fixture {
            model,
            state,
            token,
        }
    }

    fn bearer(token: &str) -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {}", token))
    }

    async fn seed(model: &InMemoryPostModel) -> Post {
        model
            .create(NewPost {
                title: "My first test post".to_string(),
                content: "Random content".to_string(),
                author: "stswenguser".to_string(),
            })
            .await
            .unwrap()
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_add_post_redirects_to_posts_with_session_author() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/add")
            .insert_header(bearer(&fx.token))
            .set_json(CreatePostForm {
                author: Some("mallory".to_string()),
                title: "My first test post".to_string(),
                content: "Random content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/posts");
        assert!(
            resp.response()
                .cookies()
                .all(|c| c.name() != FLASH_COOKIE)
        );

        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.title, "My first test post");
        assert_eq!(post.content, "Random content");
        assert_eq!(post.author, "stswenguser");
        assert_eq!(fx.model.len().await, 1);
    }

    #[actix_web::test]
    async fn test_add_post_accepts_form_body() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/add")
            .insert_header(bearer(&fx.token))
            .set_form(CreatePostForm {
                author: None,
                title: "From a form".to_string(),
                content: "Random content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/posts");
    }

    #[actix_web::test]
    async fn test_add_post_failure_flashes_and_redirects_to_form() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/add")
            .insert_header(bearer(&fx.token))
            .set_json(CreatePostForm {
                author: None,
                title: String::new(),
                content: "Random content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/posts/add");
        assert!(
            resp.response()
                .cookies()
                .any(|c| c.name() == FLASH_COOKIE)
        );
        assert!(fx.model.is_empty().await);
    }

    #[actix_web::test]
    async fn test_add_post_requires_session() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/add")
            .set_json(CreatePostForm {
                author: Some("stswenguser".to_string()),
                title: "My first test post".to_string(),
                content: "Random content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, 401);
    }

    #[actix_web::test]
    async fn test_edit_post_redirects_to_post() {
        let fx = fixture(false);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/edit/{}", post.id))
            .insert_header(bearer(&fx.token))
            .set_json(EditPostForm {
                title: "Updated title".to_string(),
                content: "Updated content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            format!("/posts/{}", post.id).as_str()
        );

        let stored = fx.model.find_by_id(&post.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Updated title");
        assert_eq!(stored.content, "Updated content");
    }

    #[actix_web::test]
    async fn test_edit_unknown_post_redirects_to_edit_form() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/edit/post_id")
            .insert_header(bearer(&fx.token))
            .set_json(EditPostForm {
                title: "Updated title".to_string(),
                content: "Updated content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/posts/edit/post_id"
        );
        assert!(
            resp.response()
                .cookies()
                .all(|c| c.name() != FLASH_COOKIE)
        );
    }

    #[actix_web::test]
    async fn test_delete_without_override_is_not_implemented() {
        let fx = fixture(false);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/delete/{}", post.id))
            .insert_header(bearer(&fx.token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.detail.as_deref(), Some("Not implemented"));
        assert_eq!(fx.model.len().await, 1);
    }

    #[actix_web::test]
    async fn test_delete_with_model_deleter_redirects_to_posts() {
        let fx = fixture(true);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/delete/{}", post.id))
            .insert_header(bearer(&fx.token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/posts");
        assert!(fx.model.is_empty().await);
    }

    #[actix_web::test]
    async fn test_show_post() {
        let fx = fixture(false);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/posts/{}", post.id))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let shown: Post = test::read_body_json(resp).await;
        assert_eq!(shown, post);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/missing").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_posts_delivers_and_clears_flash() {
        let fx = fixture(false);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let req = test::TestRequest::get()
            .uri("/posts")
            .cookie(actix_web::cookie::Cookie::new(
                FLASH_COOKIE,
                "error_msg=Could+not+create+post.+Please+try+again.",
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.response()
                .cookies()
                .any(|c| c.name() == FLASH_COOKIE && c.value().is_empty())
        );

        let body: ApiResponse<Vec<Post>> = test::read_body_json(resp).await;
        assert_eq!(
            body.message.as_deref(),
            Some("Could not create post. Please try again.")
        );
        let ids: Vec<PostId> = body.data.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![post.id]);
    }

    #[actix_web::test]
    async fn test_failed_create_flash_arrives_on_add_form() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri("/posts/add")
            .insert_header(bearer(&fx.token))
            .set_form(CreatePostForm {
                author: None,
                title: String::new(),
                content: "Random content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
        let flash = resp
            .response()
            .cookies()
            .find(|c| c.name() == FLASH_COOKIE)
            .unwrap()
            .into_owned();

        let req = test::TestRequest::get()
            .uri(&location)
            .cookie(flash)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.response()
                .cookies()
                .any(|c| c.name() == FLASH_COOKIE && c.value().is_empty())
        );
        let body: ApiResponse<CreatePostForm> = test::read_body_json(resp).await;
        assert_eq!(
            body.message.as_deref(),
            Some("Could not create post. Please try again.")
        );
        assert_eq!(body.data.unwrap().title, "");
    }

    #[actix_web::test]
    async fn test_add_form_without_flash_has_no_message() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/add").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.response().cookies().next().is_none());
        let body: ApiResponse<CreatePostForm> = test::read_body_json(resp).await;
        assert!(body.message.is_none());
    }

    #[actix_web::test]
    async fn test_failed_edit_redirect_serves_edit_form() {
        let fx = fixture(false);
        let post = seed(&fx.model).await;
        let app = app!(fx.state);

        let req = test::TestRequest::post()
            .uri(&format!("/posts/edit/{}", post.id))
            .insert_header(bearer(&fx.token))
            .set_json(EditPostForm {
                title: String::new(),
                content: "Updated content".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
        assert_eq!(location, format!("/posts/edit/{}", post.id));

        let req = test::TestRequest::get()
            .uri(&location)
            .cookie(actix_web::cookie::Cookie::new(
                FLASH_COOKIE,
                "error_msg=Could+not+create+post.+Please+try+again.",
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.response()
                .cookies()
                .any(|c| c.name() == FLASH_COOKIE && c.value().is_empty())
        );
        let body: ApiResponse<EditPostForm> = test::read_body_json(resp).await;
        assert!(body.message.is_some());
        let form = body.data.unwrap();
        assert_eq!(form.title, "My first test post");
        assert_eq!(form.content, "Random content");
    }

    #[actix_web::test]
    async fn test_edit_form_for_unknown_post_is_not_found() {
        let fx = fixture(false);
        let app = app!(fx.state);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/edit/post_id").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, 404);
    }
}
