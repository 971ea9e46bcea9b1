//! Landing page handler.

use actix_web::{HttpResponse, get};

use super::locals::Locals;
use super::views::{home::home as home_view, render};

/// Render the landing page.
#[get("/")]
pub async fn home(locals: Locals) -> HttpResponse {
    render(home_view(&locals))
}
