//! Listing handlers.
//!
//! ```text
//! GET    /campgrounds            index
//! GET    /campgrounds/new        form (login required)
//! POST   /campgrounds            create (login required)
//! GET    /campgrounds/{id}       show
//! GET    /campgrounds/{id}/edit  form (author only)
//! PUT    /campgrounds/{id}       update (author only)
//! DELETE /campgrounds/{id}       delete (author only)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::domain::{
    CAMPGROUND_NOT_FOUND_MESSAGE, CampgroundDraft, CampgroundId, Error, ImageRef, parse_price,
};

use super::ApiResult;
use super::auth::AuthenticatedUser;
use super::error::{back_on_forbidden, redirect_to};
use super::flash::{FlashKind, FlashMessages};
use super::locals::Locals;
use super::sanitize::SanitizedForm;
use super::state::HttpState;
use super::views::{campgrounds as views, render};

/// Flash text after creating a listing.
pub const CREATED_MESSAGE: &str = "Successfully made a new campground!";
/// Flash text after updating a listing.
pub const UPDATED_MESSAGE: &str = "Successfully updated campground!";
/// Flash text after deleting a listing.
pub const DELETED_MESSAGE: &str = "Successfully deleted campground!";

/// Create/edit form body.
#[derive(Debug, Deserialize)]
pub struct CampgroundForm {
    pub title: String,
    pub location: String,
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CampgroundForm {
    /// Validate the submitted fields.
    pub fn to_draft(&self) -> ApiResult<CampgroundDraft> {
        let invalid = |err: crate::domain::CampgroundValidationError| {
            Error::invalid_request(err.to_string())
        };
        let price = parse_price(&self.price).map_err(invalid)?;
        let images = match self.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => vec![ImageRef::from_url(url).map_err(invalid)?],
            _ => Vec::new(),
        };
        CampgroundDraft::try_new(&self.title, &self.description, price, &self.location)
            .map(|draft| draft.with_images(images))
            .map_err(invalid)
    }
}

/// Parse a listing id from the path; malformed ids read as missing listings.
pub(crate) fn campground_id(raw: &str) -> ApiResult<CampgroundId> {
    CampgroundId::new(raw).map_err(|_| Error::not_found(CAMPGROUND_NOT_FOUND_MESSAGE))
}

pub(crate) fn campground_path(id: &CampgroundId) -> String {
    format!("/campgrounds/{id}")
}

/// List every campground.
#[get("/campgrounds")]
pub async fn index(state: web::Data<HttpState>, locals: Locals) -> ApiResult<HttpResponse> {
    let campgrounds = state.campgrounds_query.list().await?;
    Ok(render(views::index(&locals, &campgrounds)))
}

/// Render the creation form.
#[get("/campgrounds/new")]
pub async fn new_form(_user: AuthenticatedUser, locals: Locals) -> HttpResponse {
    render(views::new_form(&locals))
}

/// Create a listing owned by the signed-in user.
#[post("/campgrounds")]
pub async fn create(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    flash: FlashMessages,
    form: SanitizedForm<CampgroundForm>,
) -> ApiResult<HttpResponse> {
    let draft = form.to_draft()?;
    let campground = state.campgrounds.create(user.user().id(), draft).await?;
    flash.push(FlashKind::Success, CREATED_MESSAGE);
    Ok(redirect_to(&campground_path(campground.id())))
}

/// Show a listing with its reviews.
#[get("/campgrounds/{id}")]
pub async fn show(
    state: web::Data<HttpState>,
    locals: Locals,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = campground_id(&path)?;
    let details = state.campgrounds_query.details(&id).await?;
    Ok(render(views::show(&locals, &details)))
}

/// Render the edit form for the listing author.
#[get("/campgrounds/{id}/edit")]
pub async fn edit_form(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    locals: Locals,
    flash: FlashMessages,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = campground_id(&path)?;
    let result = state
        .campgrounds
        .editable(&id, user.user().id())
        .await
        .map(|campground| render(views::edit_form(&locals, &campground)));
    back_on_forbidden(result, &flash, &campground_path(&id))
}

/// Replace a listing's fields.
#[put("/campgrounds/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    flash: FlashMessages,
    path: web::Path<String>,
    form: SanitizedForm<CampgroundForm>,
) -> ApiResult<HttpResponse> {
    let id = campground_id(&path)?;
    let draft = form.to_draft()?;
    let result = state
        .campgrounds
        .update(&id, user.user().id(), draft)
        .await
        .map(|campground| {
            flash.push(FlashKind::Success, UPDATED_MESSAGE);
            redirect_to(&campground_path(campground.id()))
        });
    back_on_forbidden(result, &flash, &campground_path(&id))
}

/// Delete a listing and its reviews.
#[delete("/campgrounds/{id}")]
pub async fn destroy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    flash: FlashMessages,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = campground_id(&path)?;
    let result = state
        .campgrounds
        .delete(&id, user.user().id())
        .await
        .map(|()| {
            flash.push(FlashKind::Success, DELETED_MESSAGE);
            redirect_to("/campgrounds")
        });
    back_on_forbidden(result, &flash, &campground_path(&id))
}
