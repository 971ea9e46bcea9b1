//! Registration and login forms.

use maud::{Markup, html};

use super::layout;
use crate::inbound::http::locals::Locals;

/// Render the registration form.
pub fn register(locals: &Locals) -> Markup {
    let content = html! {
        div class="row" {
            div class="col-md-6 offset-md-3" {
                h1 class="text-center" { "Register" }
                form action="/register" method="POST" {
                    div class="mb-3" {
                        label class="form-label" for="username" { "Username" }
                        input class="form-control" type="text" id="username" name="username" required autofocus;
                    }
                    div class="mb-3" {
                        label class="form-label" for="email" { "Email" }
                        input class="form-control" type="email" id="email" name="email" required;
                    }
                    div class="mb-3" {
                        label class="form-label" for="password" { "Password" }
                        input class="form-control" type="password" id="password" name="password" required;
                    }
                    button class="btn btn-success w-100" { "Register" }
                }
            }
        }
    };
    layout("Register", locals, &content)
}

/// Render the login form.
pub fn login(locals: &Locals) -> Markup {
    let content = html! {
        div class="row" {
            div class="col-md-6 offset-md-3" {
                h1 class="text-center" { "Login" }
                form action="/login" method="POST" {
                    div class="mb-3" {
                        label class="form-label" for="username" { "Username" }
                        input class="form-control" type="text" id="username" name="username" required autofocus;
                    }
                    div class="mb-3" {
                        label class="form-label" for="password" { "Password" }
                        input class="form-control" type="password" id="password" name="password" required;
                    }
                    button class="btn btn-success w-100" { "Login" }
                }
            }
        }
    };
    layout("Login", locals, &content)
}
