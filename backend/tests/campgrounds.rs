//! Listing and review lifecycle, including tunnelled `PUT`/`DELETE`.

mod support;

use actix_web::http::StatusCode;

use yelp_camp::domain::PERMISSION_DENIED_MESSAGE;
use yelp_camp::inbound::http::campgrounds::{CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use yelp_camp::inbound::http::reviews;
use yelp_camp::test_support::InMemoryStore;

#[actix_web::test]
async fn authors_create_edit_and_delete_listings() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;

    let path = browser.create_campground("Misty+Bay").await;
    let show = browser.get(&path).await;
    assert!(show.body.contains(CREATED_MESSAGE));
    assert!(show.body.contains("Misty Bay"));
    assert!(show.body.contains("$12/night"));

    let page = browser
        .post_form(
            &format!("{path}?_method=PUT"),
            "title=Misty+Cove&location=Tulsa&price=15&description=Quieter",
        )
        .await;
    assert_eq!(page.location(), Some(path.as_str()));
    let show = browser.follow(&page).await;
    assert!(show.body.contains(UPDATED_MESSAGE));
    assert!(show.body.contains("Misty Cove"));

    let page = browser
        .post_form(&format!("{path}?_method=DELETE"), "")
        .await;
    assert_eq!(page.location(), Some("/campgrounds"));
    let listing = browser.follow(&page).await;
    assert!(listing.body.contains(DELETED_MESSAGE));
    assert_eq!(store.campground_count(), 0);
}

#[actix_web::test]
async fn other_users_cannot_change_a_listing() {
    let store = InMemoryStore::new();
    let mut author = support::open(&store).await;
    author.register("rae").await;
    let path = author.create_campground("Misty+Bay").await;

    let mut intruder = support::open(&store).await;
    intruder.register("sam").await;
    let page = intruder
        .post_form(&format!("{path}?_method=DELETE"), "")
        .await;
    assert_eq!(page.location(), Some(path.as_str()));
    let show = intruder.follow(&page).await;
    assert!(show.body.contains(PERMISSION_DENIED_MESSAGE));
    assert_eq!(store.campground_count(), 1);

    let page = intruder.get(&format!("{path}/edit")).await;
    assert_eq!(page.location(), Some(path.as_str()));
}

#[actix_web::test]
async fn reviews_are_removed_with_their_campground() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;
    let path = browser.create_campground("Misty+Bay").await;

    let page = browser
        .post_form(&format!("{path}/reviews"), "body=Lovely+views&rating=5")
        .await;
    assert_eq!(page.location(), Some(path.as_str()));
    let show = browser.follow(&page).await;
    assert!(show.body.contains(reviews::CREATED_MESSAGE));
    assert!(show.body.contains("Lovely views"));
    assert_eq!(store.review_count(), 1);

    browser
        .post_form(&format!("{path}?_method=DELETE"), "")
        .await;
    assert_eq!(store.review_count(), 0);
}

#[actix_web::test]
async fn review_authors_delete_their_reviews() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;
    let path = browser.create_campground("Misty+Bay").await;
    browser
        .post_form(&format!("{path}/reviews"), "body=Lovely&rating=4")
        .await;

    let show = browser.get(&path).await;
    let marker = format!("{path}/reviews/");
    let start = show.body.find(&marker).expect("review delete form") + marker.len();
    let review_id = &show.body[start..start + 36];

    let page = browser
        .post_form(&format!("{path}/reviews/{review_id}?_method=DELETE"), "")
        .await;
    assert_eq!(page.location(), Some(path.as_str()));
    let show = browser.follow(&page).await;
    assert!(show.body.contains(reviews::DELETED_MESSAGE));
    assert_eq!(store.review_count(), 0);
}

#[actix_web::test]
async fn get_requests_ignore_method_override() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;
    let path = browser.create_campground("Misty+Bay").await;

    let page = browser.get(&format!("{path}?_method=DELETE")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(store.campground_count(), 1);
}
