//! Landing page.

use maud::{Markup, html};

use super::layout;
use crate::inbound::http::locals::Locals;

/// Render the landing page.
pub fn home(locals: &Locals) -> Markup {
    let content = html! {
        div class="text-center" {
            h1 { "YelpCamp" }
            p class="lead" {
                "Welcome to YelpCamp! Jump right in and explore our many campgrounds. "
                "Feel free to share some of your own and comment on others!"
            }
            a href="/campgrounds" class="btn btn-lg btn-secondary fw-bold border-white bg-white text-dark" {
                "View Campgrounds"
            }
        }
    };
    layout("Home", locals, &content)
}
