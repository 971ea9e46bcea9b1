//! Listing pages: index, show and the create/edit forms.

use maud::{Markup, html};

use super::layout;
use crate::domain::{Campground, CampgroundDetails, CampgroundDraft, MAX_RATING, MIN_RATING, User, UserId};
use crate::inbound::http::locals::Locals;

fn price_label(price: f64) -> String {
    format!("${price}/night")
}

fn is_author(user: Option<&User>, author: &UserId) -> bool {
    user.is_some_and(|user| user.id() == author)
}

fn first_image(fields: &CampgroundDraft) -> Markup {
    html! {
        @if let Some(image) = fields.images().first() {
            img class="img-fluid" alt=(image.filename) src=(image.url);
        }
    }
}

/// Render every listing.
pub fn index(locals: &Locals, campgrounds: &[Campground]) -> Markup {
    let content = html! {
        h1 { "All Campgrounds" }
        @if campgrounds.is_empty() {
            p { "No campgrounds yet." }
        }
        @for campground in campgrounds {
            @let fields = campground.fields();
            div class="card mb-3" {
                div class="row" {
                    div class="col-md-4" { (first_image(fields)) }
                    div class="col-md-8" {
                        div class="card-body" {
                            h5 class="card-title" { (fields.title()) }
                            p class="card-text" { (fields.description()) }
                            p class="card-text" {
                                small class="text-muted" { (fields.location()) }
                            }
                            a class="btn btn-primary" href={ "/campgrounds/" (campground.id().to_string()) } {
                                "View " (fields.title())
                            }
                        }
                    }
                }
            }
        }
    };
    layout("Campgrounds", locals, &content)
}

fn campground_fields(action: &str, submit: &str, values: Option<&CampgroundDraft>) -> Markup {
    let title = values.map_or("", CampgroundDraft::title);
    let location = values.map_or("", CampgroundDraft::location);
    let description = values.map_or("", CampgroundDraft::description);
    let price = values.map(|fields| fields.price().to_string()).unwrap_or_default();
    let image_url = values
        .and_then(|fields| fields.images().first())
        .map(|image| image.url.as_str())
        .unwrap_or_default();
    html! {
        form action=(action) method="POST" {
            div class="mb-3" {
                label class="form-label" for="title" { "Title" }
                input class="form-control" type="text" id="title" name="title" value=(title) required;
            }
            div class="mb-3" {
                label class="form-label" for="location" { "Location" }
                input class="form-control" type="text" id="location" name="location" value=(location) required;
            }
            div class="mb-3" {
                label class="form-label" for="price" { "Campground Price" }
                div class="input-group" {
                    span class="input-group-text" { "$" }
                    input class="form-control" type="text" id="price" name="price" placeholder="0.00" value=(price) required;
                }
            }
            div class="mb-3" {
                label class="form-label" for="image_url" { "Image URL" }
                input class="form-control" type="url" id="image_url" name="image_url" value=(image_url);
            }
            div class="mb-3" {
                label class="form-label" for="description" { "Description" }
                textarea class="form-control" id="description" name="description" required { (description) }
            }
            button class="btn btn-success" { (submit) }
        }
    }
}

/// Render the creation form.
pub fn new_form(locals: &Locals) -> Markup {
    let content = html! {
        div class="row" {
            h1 class="text-center" { "New Campground" }
            div class="col-md-6 offset-md-3" {
                (campground_fields("/campgrounds", "Add Campground", None))
                a href="/campgrounds" { "All Campgrounds" }
            }
        }
    };
    layout("New Campground", locals, &content)
}

/// Render the edit form pre-filled with `campground`.
pub fn edit_form(locals: &Locals, campground: &Campground) -> Markup {
    let action = format!("/campgrounds/{}?_method=PUT", campground.id());
    let content = html! {
        div class="row" {
            h1 class="text-center" { "Edit Campground" }
            div class="col-md-6 offset-md-3" {
                (campground_fields(&action, "Update Campground", Some(campground.fields())))
                a href={ "/campgrounds/" (campground.id().to_string()) } { "Back to Campground" }
            }
        }
    };
    layout("Edit Campground", locals, &content)
}

fn review_form(campground: &Campground) -> Markup {
    html! {
        h2 { "Leave a Review" }
        form action={ "/campgrounds/" (campground.id().to_string()) "/reviews" } method="POST" class="mb-3" {
            div class="mb-3" {
                label class="form-label" for="rating" { "Rating" }
                select class="form-select" id="rating" name="rating" {
                    @for rating in (MIN_RATING..=MAX_RATING).rev() {
                        option value=(rating) { (rating) }
                    }
                }
            }
            div class="mb-3" {
                label class="form-label" for="body" { "Review Text" }
                textarea class="form-control" id="body" name="body" rows="3" required {}
            }
            button class="btn btn-success" { "Submit" }
        }
    }
}

/// Render a listing with its reviews.
pub fn show(locals: &Locals, details: &CampgroundDetails) -> Markup {
    let campground = &details.campground;
    let fields = campground.fields();
    let current_user = locals.current_user.as_ref();
    let content = html! {
        div class="row" {
            div class="col-6" {
                div class="card mb-3" {
                    @for image in fields.images() {
                        img class="card-img-top" alt=(image.filename) src=(image.url);
                    }
                    div class="card-body" {
                        h5 class="card-title" { (fields.title()) }
                        p class="card-text" { (fields.description()) }
                    }
                    ul class="list-group list-group-flush" {
                        li class="list-group-item text-muted" { (fields.location()) }
                        li class="list-group-item" { "Submitted by " (details.author_name.to_string()) }
                        li class="list-group-item" { (price_label(fields.price())) }
                    }
                    @if is_author(current_user, campground.author()) {
                        div class="card-body" {
                            a class="card-link btn btn-info" href={ "/campgrounds/" (campground.id().to_string()) "/edit" } { "Edit" }
                            form class="d-inline" action={ "/campgrounds/" (campground.id().to_string()) "?_method=DELETE" } method="POST" {
                                button class="btn btn-danger" { "Delete" }
                            }
                        }
                    }
                    div class="card-footer text-muted" {
                        a href="/campgrounds" { "All Campgrounds" }
                    }
                }
            }
            div class="col-6" {
                @if current_user.is_some() {
                    (review_form(campground))
                }
                @for entry in &details.reviews {
                    @let review = &entry.review;
                    div class="card mb-3" {
                        div class="card-body" {
                            h5 class="card-title" { "Rating: " (review.content.rating()) }
                            h6 class="card-subtitle mb-2 text-muted" { "By " (entry.author_name.to_string()) }
                            p class="card-text" { "Review: " (review.content.body()) }
                            @if is_author(current_user, &review.author) {
                                form action={ "/campgrounds/" (campground.id().to_string()) "/reviews/" (review.id.to_string()) "?_method=DELETE" } method="POST" {
                                    button class="btn btn-sm btn-danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    layout(fields.title(), locals, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CampgroundId, Email, ImageRef, Review, ReviewDetails, ReviewDraft, ReviewId, Username,
    };

    fn user(name: &str) -> User {
        User::new(
            UserId::random(),
            Username::new(name).expect("username"),
            Email::new(format!("{name}@example.com")).expect("email"),
        )
    }

    fn details(author: &User, reviewer: &User) -> CampgroundDetails {
        let image = ImageRef::from_url("https://images.unsplash.com/photo/lake.jpg").expect("url");
        let draft = CampgroundDraft::try_new("Misty Hollow", "Quiet <script>", 12.0, "Dover, Delaware")
            .expect("draft")
            .with_images(vec![image]);
        let campground = Campground::new(CampgroundId::random(), *author.id(), draft);
        let review = Review {
            id: ReviewId::random(),
            campground: *campground.id(),
            author: *reviewer.id(),
            content: ReviewDraft::try_new("Lovely", 5).expect("review"),
        };
        CampgroundDetails {
            campground,
            author_name: author.username().clone(),
            reviews: vec![ReviewDetails {
                review,
                author_name: reviewer.username().clone(),
            }],
        }
    }

    fn signed_in(user: &User) -> Locals {
        Locals {
            current_user: Some(user.clone()),
            ..Locals::default()
        }
    }

    #[test]
    fn show_escapes_and_labels_price() {
        let author = user("colt");
        let html = show(&Locals::default(), &details(&author, &author)).into_string();
        assert!(html.contains("Quiet &lt;script&gt;"));
        assert!(html.contains("$12/night"));
        assert!(html.contains("Submitted by colt"));
        assert!(html.contains(r#"alt="lake""#));
    }

    #[test]
    fn authors_see_edit_controls() {
        let author = user("colt");
        let reviewer = user("rae");
        let page = details(&author, &reviewer);
        let as_author = show(&signed_in(&author), &page).into_string();
        assert!(as_author.contains("/edit"));
        assert!(!as_author.contains("/reviews/"));

        let as_reviewer = show(&signed_in(&reviewer), &page).into_string();
        assert!(!as_reviewer.contains("/edit"));
        assert!(as_reviewer.contains("/reviews/"));
        assert!(as_reviewer.contains("Leave a Review"));
    }

    #[test]
    fn anonymous_visitors_cannot_review() {
        let author = user("colt");
        let html = show(&Locals::default(), &details(&author, &author)).into_string();
        assert!(!html.contains("Leave a Review"));
    }

    #[test]
    fn edit_form_tunnels_put() {
        let author = user("colt");
        let page = details(&author, &author);
        let html = edit_form(&signed_in(&author), &page.campground).into_string();
        assert!(html.contains("?_method=PUT"));
        assert!(html.contains(r#"value="Misty Hollow""#));
    }

    #[test]
    fn index_links_every_campground() {
        let author = user("colt");
        let page = details(&author, &author);
        let html = index(&Locals::default(), std::slice::from_ref(&page.campground)).into_string();
        assert!(html.contains(&format!("/campgrounds/{}", page.campground.id())));
    }
}
