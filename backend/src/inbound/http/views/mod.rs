//! Server-rendered pages.
//!
//! Views are plain functions from read models to [`Markup`]; maud escapes
//! every interpolated value. The shared layout renders the navigation bar
//! for the current user and the flash messages drained for this request.

pub mod campgrounds;
pub mod home;
pub mod users;

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use maud::{DOCTYPE, Markup, html};

use crate::domain::User;

use super::locals::Locals;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha3/dist/js/bootstrap.bundle.min.js";

/// Wrap rendered markup in a `200 OK` HTML response.
pub fn render(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

fn navbar(current_user: Option<&User>) -> Markup {
    html! {
        nav class="navbar sticky-top navbar-expand-lg navbar-dark bg-dark" {
            div class="container-fluid" {
                a class="navbar-brand" href="/" { "YelpCamp" }
                button class="navbar-toggler" type="button" data-bs-toggle="collapse"
                    data-bs-target="#navbarNav" aria-controls="navbarNav"
                    aria-expanded="false" aria-label="Toggle navigation" {
                    span class="navbar-toggler-icon" {}
                }
                div class="collapse navbar-collapse" id="navbarNav" {
                    div class="navbar-nav" {
                        a class="nav-link" href="/" { "Home" }
                        a class="nav-link" href="/campgrounds" { "Campgrounds" }
                        a class="nav-link" href="/campgrounds/new" { "New Campground" }
                    }
                    div class="navbar-nav ms-auto" {
                        @if let Some(user) = current_user {
                            span class="navbar-text me-2" { "Signed in as " (user.username().to_string()) }
                            a class="nav-link" href="/logout" { "Logout" }
                        } @else {
                            a class="nav-link" href="/login" { "Login" }
                            a class="nav-link" href="/register" { "Register" }
                        }
                    }
                }
            }
        }
    }
}

fn flash_alerts(locals: &Locals) -> Markup {
    html! {
        @for message in &locals.success {
            div class="alert alert-success alert-dismissible fade show" role="alert" {
                (message)
                button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close" {}
            }
        }
        @for message in &locals.error {
            div class="alert alert-danger alert-dismissible fade show" role="alert" {
                (message)
                button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close" {}
            }
        }
    }
}

/// Full page with navigation, flash messages and footer.
pub fn layout(title: &str, locals: &Locals, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | YelpCamp" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body class="d-flex flex-column vh-100" {
                (navbar(locals.current_user.as_ref()))
                main class="container mt-5" {
                    (flash_alerts(locals))
                    (content)
                }
                footer class="footer bg-dark py-3 mt-auto" {
                    div class="container" {
                        span class="text-muted" { "© YelpCamp" }
                    }
                }
                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
}
