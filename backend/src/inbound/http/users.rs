//! Account handlers: registration, login and logout.
//!
//! ```text
//! GET  /register   form
//! POST /register   username=colt&email=colt@example.com&password=secret
//! GET  /login      form
//! POST /login      username=colt&password=secret
//! GET  /logout
//! ```
//!
//! Failures are flashed and answered with a redirect back to the form they
//! came from.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Error, LoginCredentials, Registration, User};

use super::ApiResult;
use super::error::redirect_to;
use super::flash::{FlashKind, FlashMessages};
use super::locals::Locals;
use super::sanitize::SanitizedForm;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::{render, users as views};

/// Flash text after signing up.
pub const WELCOME_MESSAGE: &str = "Welcome to Yelp Camp!";
/// Flash text after logging in.
pub const WELCOME_BACK_MESSAGE: &str = "Welcome back!";
/// Flash text after logging out.
pub const GOODBYE_MESSAGE: &str = "Goodbye!";
/// Landing page after any account action.
pub const HOME_AFTER_AUTH: &str = "/campgrounds";

/// Sign-up form body.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Bind `user` to a fresh session.
fn sign_in(state: &HttpState, session: &SessionContext, user: &User) -> ApiResult<()> {
    session.renew();
    session.persist_identity(&state.identity.serialize_identity(user))
}

async fn create_account(state: &HttpState, form: &RegisterForm) -> ApiResult<User> {
    let registration = Registration::try_from_parts(&form.username, &form.email, &form.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    state.registration.register(&registration).await
}

async fn verify(state: &HttpState, form: &LoginForm) -> ApiResult<User> {
    let credentials = LoginCredentials::try_from_parts(&form.username, &form.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    state.login.authenticate(&credentials).await
}

/// Render the sign-up form.
#[get("/register")]
pub async fn register_form(locals: Locals) -> HttpResponse {
    render(views::register(&locals))
}

/// Create an account and sign it in.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    flash: FlashMessages,
    form: SanitizedForm<RegisterForm>,
) -> HttpResponse {
    let outcome = match create_account(&state, &form).await {
        Ok(user) => sign_in(&state, &session, &user),
        Err(err) => Err(err),
    };
    match outcome {
        Ok(()) => {
            flash.push(FlashKind::Success, WELCOME_MESSAGE);
            redirect_to(HOME_AFTER_AUTH)
        }
        Err(err) => {
            flash.push(FlashKind::Error, err.message());
            redirect_to("/register")
        }
    }
}

/// Render the login form.
#[get("/login")]
pub async fn login_form(locals: Locals) -> HttpResponse {
    render(views::login(&locals))
}

/// Authenticate and return the user to where they were headed.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    flash: FlashMessages,
    form: SanitizedForm<LoginForm>,
) -> HttpResponse {
    let outcome = match verify(&state, &form).await {
        Ok(user) => {
            let target = session.take_return_to();
            sign_in(&state, &session, &user).map(|()| target)
        }
        Err(err) => Err(err),
    };
    match outcome {
        Ok(target) => {
            flash.push(FlashKind::Success, WELCOME_BACK_MESSAGE);
            redirect_to(target.as_deref().unwrap_or(HOME_AFTER_AUTH))
        }
        Err(err) => {
            flash.push(FlashKind::Error, err.message());
            redirect_to("/login")
        }
    }
}

/// Forget the signed-in user.
#[get("/logout")]
pub async fn logout(session: SessionContext, flash: FlashMessages) -> HttpResponse {
    session.forget_identity();
    session.renew();
    flash.push(FlashKind::Success, GOODBYE_MESSAGE);
    redirect_to(HOME_AFTER_AUTH)
}
