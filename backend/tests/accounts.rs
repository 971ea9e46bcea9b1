//! Registration, login, `returnTo` and logout through the full middleware stack.

mod support;

use actix_web::http::StatusCode;

use yelp_camp::domain::{BAD_CREDENTIALS_MESSAGE, DUPLICATE_USERNAME_MESSAGE};
use yelp_camp::inbound::http::auth::{LOGIN_PATH, LOGIN_REQUIRED_MESSAGE};
use yelp_camp::inbound::http::users::{GOODBYE_MESSAGE, WELCOME_BACK_MESSAGE, WELCOME_MESSAGE};
use yelp_camp::test_support::InMemoryStore;

#[actix_web::test]
async fn registering_signs_the_user_in() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;

    let page = browser.register("rae").await;
    let listing = browser.follow(&page).await;

    assert!(listing.body.contains(WELCOME_MESSAGE));
    assert!(listing.body.contains("Logout"));
}

#[actix_web::test]
async fn duplicate_usernames_return_to_the_form() {
    let store = InMemoryStore::new();
    support::open(&store).await.register("rae").await;

    let mut browser = support::open(&store).await;
    let page = browser
        .post_form(
            "/register",
            "username=rae&email=other%40example.com&password=secret",
        )
        .await;
    assert_eq!(page.location(), Some("/register"));

    let form = browser.follow(&page).await;
    assert!(form.body.contains(DUPLICATE_USERNAME_MESSAGE));
}

#[actix_web::test]
async fn login_required_pages_remember_where_the_user_was_going() {
    let store = InMemoryStore::new();
    support::open(&store).await.register("rae").await;
    let mut browser = support::open(&store).await;

    let page = browser.get("/campgrounds/new?from=nav").await;
    assert_eq!(page.location(), Some(LOGIN_PATH));
    let form = browser.follow(&page).await;
    assert!(form.body.contains(LOGIN_REQUIRED_MESSAGE));

    let page = browser
        .post_form("/login", "username=rae&password=secret")
        .await;
    assert_eq!(page.location(), Some("/campgrounds/new?from=nav"));

    let target = browser.follow(&page).await;
    assert_eq!(target.status, StatusCode::OK);
    assert!(target.body.contains(WELCOME_BACK_MESSAGE));
}

#[actix_web::test]
async fn wrong_passwords_are_rejected() {
    let store = InMemoryStore::new();
    support::open(&store).await.register("rae").await;
    let mut browser = support::open(&store).await;

    let page = browser
        .post_form("/login", "username=rae&password=nope")
        .await;
    assert_eq!(page.location(), Some(LOGIN_PATH));
    let form = browser.follow(&page).await;
    assert!(form.body.contains(BAD_CREDENTIALS_MESSAGE));
}

#[actix_web::test]
async fn identity_survives_until_logout() {
    let store = InMemoryStore::new();
    let mut browser = support::open(&store).await;
    browser.register("rae").await;

    for _ in 0..3 {
        let page = browser.get("/campgrounds/new").await;
        assert_eq!(page.status, StatusCode::OK);
    }

    let page = browser.get("/logout").await;
    let listing = browser.follow(&page).await;
    assert!(listing.body.contains(GOODBYE_MESSAGE));
    assert!(listing.body.contains("Login"));

    let page = browser.get("/campgrounds/new").await;
    assert_eq!(page.location(), Some(LOGIN_PATH));
}
