//! Errors raised by handlers become a flash plus a redirect to the listings.

mod support;

use actix_web::http::StatusCode;
use rstest::rstest;

use yelp_camp::domain::CAMPGROUND_NOT_FOUND_MESSAGE;
use yelp_camp::inbound::http::error::ERROR_REDIRECT;
use yelp_camp::test_support::InMemoryStore;

#[rstest]
#[case("/", "Welcome to YelpCamp!")]
#[case("/campgrounds", "All Campgrounds")]
#[case("/register", "Register")]
#[case("/login", "Login")]
#[actix_web::test]
async fn pages_render_through_every_middleware(#[case] path: &str, #[case] marker: &str) {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;

    let page = browser.get(path).await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.location(), None);
    assert!(page.body.contains(marker), "{path} rendered without {marker:?}");
}

#[rstest]
#[case("/campgrounds/not-a-uuid")]
#[case("/campgrounds/00000000-0000-4000-8000-000000000000")]
#[case("/campgrounds/00000000-0000-4000-8000-000000000000/edit")]
#[actix_web::test]
async fn missing_campgrounds_are_flashed_on_the_listing_page(#[case] path: &str) {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;

    let page = browser.get(path).await;
    assert_eq!(page.status, StatusCode::FOUND);
    assert_eq!(page.location(), Some(ERROR_REDIRECT));
    assert!(page.body.is_empty(), "status detail must not leak");

    let listing = browser.follow(&page).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert!(listing.body.contains(CAMPGROUND_NOT_FOUND_MESSAGE));
}

#[actix_web::test]
async fn flashes_are_shown_once() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;

    let page = browser.get("/campgrounds/not-a-uuid").await;
    let first = browser.follow(&page).await;
    assert!(first.body.contains(CAMPGROUND_NOT_FOUND_MESSAGE));

    let second = browser.get("/campgrounds").await;
    assert!(!second.body.contains(CAMPGROUND_NOT_FOUND_MESSAGE));
}

#[rstest]
#[case("/nowhere")]
#[case("/campgrounds/a/b/c")]
#[actix_web::test]
async fn unmatched_routes_fall_through_to_a_plain_404(#[case] path: &str) {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;

    let page = browser.get(path).await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert_eq!(page.location(), None);
    assert!(page.body.is_empty());
}
