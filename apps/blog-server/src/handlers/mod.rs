//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .service(
                    web::resource("/add")
                        .route(web::get().to(posts::new_post_form))
                        .route(web::post().to(posts::add_post)),
                )
                .service(
                    web::resource("/edit/{id}")
                        .route(web::get().to(posts::edit_post_form))
                        .route(web::post().to(posts::edit_post)),
                )
                .route("/delete/{id}", web::post().to(posts::delete_post))
                .route("/{id}", web::get().to(posts::show_post)),
        );
}
