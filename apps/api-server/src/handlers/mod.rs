//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod profile;
mod users;

mod validation;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Registration
            .route("/users", web::post().to(users::register))
            // Session
            .service(
                web::scope("/auth")
                    .route("", web::post().to(auth::login))
                    .route("", web::get().to(auth::current_user)),
            )
            // Posts; reads are public, writes require a token
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/like/{post_id}", web::put().to(posts::like))
                    .route("/unlike/{post_id}", web::put().to(posts::unlike))
                    .route("/{post_id}", web::get().to(posts::get))
                    .route("/{post_id}", web::delete().to(posts::delete)),
            )
            // Profiles; listing and per-user lookup are public
            .service(
                web::scope("/profile")
                    .route("/me", web::get().to(profile::me))
                    .route("/user/{user_id}", web::get().to(profile::by_user))
                    .route("", web::get().to(profile::list))
                    .route("", web::post().to(profile::upsert))
                    .route("", web::delete().to(profile::delete_account)),
            ),
    );
}
