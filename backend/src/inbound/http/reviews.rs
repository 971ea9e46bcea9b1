//! Review handlers nested under a listing.
//!
//! ```text
//! POST   /campgrounds/{id}/reviews              body=...&rating=5
//! DELETE /campgrounds/{id}/reviews/{review_id}
//! ```

use actix_web::{HttpResponse, delete, post, web};
use serde::Deserialize;

use crate::domain::{Error, REVIEW_NOT_FOUND_MESSAGE, ReviewDraft, ReviewId};

use super::ApiResult;
use super::auth::AuthenticatedUser;
use super::campgrounds::{campground_id, campground_path};
use super::error::{back_on_forbidden, redirect_to};
use super::flash::{FlashKind, FlashMessages};
use super::sanitize::SanitizedForm;
use super::state::HttpState;

/// Flash text after posting a review.
pub const CREATED_MESSAGE: &str = "Created new review!";
/// Flash text after deleting a review.
pub const DELETED_MESSAGE: &str = "Successfully deleted review!";

/// Review form body.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub body: String,
    pub rating: String,
}

/// Attach a review to a listing.
#[post("/campgrounds/{id}/reviews")]
pub async fn create(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    flash: FlashMessages,
    path: web::Path<String>,
    form: SanitizedForm<ReviewForm>,
) -> ApiResult<HttpResponse> {
    let campground = campground_id(&path)?;
    let draft = ReviewDraft::try_from_parts(&form.body, &form.rating)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    state
        .reviews
        .add(&campground, user.user().id(), draft)
        .await?;
    flash.push(FlashKind::Success, CREATED_MESSAGE);
    Ok(redirect_to(&campground_path(&campground)))
}

/// Delete one of the signed-in user's reviews.
#[delete("/campgrounds/{id}/reviews/{review_id}")]
pub async fn destroy(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    flash: FlashMessages,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_campground, raw_review) = path.into_inner();
    let campground = campground_id(&raw_campground)?;
    let review =
        ReviewId::new(&raw_review).map_err(|_| Error::not_found(REVIEW_NOT_FOUND_MESSAGE))?;
    let back = campground_path(&campground);
    let result = state
        .reviews
        .delete(&campground, &review, user.user().id())
        .await
        .map(|()| {
            flash.push(FlashKind::Success, DELETED_MESSAGE);
            redirect_to(&back)
        });
    back_on_forbidden(result, &flash, &back)
}
