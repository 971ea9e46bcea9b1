//! Shared harness driving the full application over an in-memory store.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType, HeaderMap};
use actix_web::test::{self as actix_test, TestRequest};

use yelp_camp::inbound::http::session_config::{SESSION_COOKIE_NAME, session_key};
use yelp_camp::server::{AppDependencies, build_app, build_http_state};
use yelp_camp::test_support::InMemoryStore;

/// A response reduced to what assertions need.
pub struct Page {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Page {
    /// Redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

/// Client that carries the session cookie between requests.
pub struct Browser<S> {
    app: S,
    cookie: Option<Cookie<'static>>,
}

impl<S, B> Browser<S>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    /// Send a request with the current session cookie.
    pub async fn send(&mut self, request: TestRequest) -> Page {
        let request = match &self.cookie {
            Some(cookie) => request.cookie(cookie.clone()),
            None => request,
        };
        let res = actix_test::call_service(&self.app, request.to_request()).await;
        if let Some(cookie) = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        {
            self.cookie = Some(cookie.into_owned());
        }
        let status = res.status();
        let headers = res.headers().clone();
        let body = actix_test::read_body(res).await;
        Page {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    pub async fn get(&mut self, path: &str) -> Page {
        self.send(TestRequest::get().uri(path)).await
    }

    pub async fn post_form(&mut self, path: &str, body: &str) -> Page {
        self.send(
            TestRequest::post()
                .uri(path)
                .insert_header(ContentType::form_url_encoded())
                .set_payload(body.to_owned()),
        )
        .await
    }

    /// Follow the redirect carried by `page`.
    pub async fn follow(&mut self, page: &Page) -> Page {
        let location = page.location().expect("redirect location").to_owned();
        self.get(&location).await
    }

    /// Register and stay signed in.
    pub async fn register(&mut self, username: &str) -> Page {
        let body = format!("username={username}&email={username}%40example.com&password=secret");
        let page = self.post_form("/register", &body).await;
        assert_eq!(page.location(), Some("/campgrounds"), "registration failed");
        page
    }

    /// Create a listing and return its path.
    pub async fn create_campground(&mut self, title: &str) -> String {
        let body =
            format!("title={title}&location=Tulsa%2C+Oklahoma&price=12&description=Quiet+spot");
        let page = self.post_form("/campgrounds", &body).await;
        assert_eq!(page.status, StatusCode::FOUND);
        page.location().expect("campground location").to_owned()
    }
}

/// Open a browser against a fresh application over `store`.
pub async fn open(
    store: &InMemoryStore,
) -> Browser<
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
> {
    let app = actix_test::init_service(build_app(AppDependencies {
        http_state: build_http_state(store.ports()),
        key: session_key("integration secret"),
        cookie_secure: false,
    }))
    .await;
    Browser { app, cookie: None }
}
