//! Tests for HTTP error mapping and the flash error pipeline.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test, web};
use rstest::rstest;

use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[case(418, StatusCode::IM_A_TEAPOT)]
#[case(422, StatusCode::UNPROCESSABLE_ENTITY)]
#[case(404, StatusCode::NOT_FOUND)]
fn raw_statuses_survive_to_the_response(#[case] raw: u16, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&Error::http("boom", raw)), status);
}

#[rstest]
fn out_of_range_statuses_fall_back_to_the_category() {
    let error = Error::http("boom", 1000);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(
        ResponseError::status_code(&error),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[actix_web::test]
async fn error_response_carries_message_as_text() {
    let response = ResponseError::error_response(&Error::not_found("Page Not Found"));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body()).await.expect("body");
    assert_eq!(body.as_ref(), b"Page Not Found");
}

async fn drain_errors(flash: FlashMessages) -> HttpResponse {
    HttpResponse::Ok().body(flash.take(FlashKind::Error).join("\n"))
}

fn pipeline_app() -> App<
    impl actix_web::dev::ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(FlashErrors)
        .wrap(test_session_middleware())
        .route(
            "/raise/{status}",
            web::get().to(|path: web::Path<u16>| async move {
                Err::<HttpResponse, _>(Error::http("Page Not Found", path.into_inner()))
            }),
        )
        .route(
            "/framework",
            web::get().to(|| async {
                Err::<HttpResponse, _>(actix_web::error::ErrorBadRequest("parse failure"))
            }),
        )
        .route("/ok", web::get().to(|| async { HttpResponse::Ok().body("fine") }))
        .route("/flash", web::get().to(drain_errors))
}

#[rstest]
#[case(404)]
#[case(403)]
#[case(418)]
#[case(500)]
#[case(503)]
#[actix_web::test]
async fn raised_errors_redirect_and_flash_the_message(#[case] status: u16) {
    let app = actix_test::init_service(pipeline_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/raise/{status}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some(ERROR_REDIRECT)
    );
    let cookie = session_cookie(&res);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/flash").cookie(cookie).to_request(),
    )
    .await;
    let body = actix_test::read_body(res).await;
    assert_eq!(body.as_ref(), b"Page Not Found");
}

#[actix_web::test]
async fn framework_errors_flash_the_generic_message() {
    let app = actix_test::init_service(pipeline_app()).await;

    let req = actix_test::TestRequest::get().uri("/framework").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    let cookie = session_cookie(&res);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/flash").cookie(cookie).to_request(),
    )
    .await;
    let body = actix_test::read_body(res).await;
    assert_eq!(body.as_ref(), DEFAULT_ERROR_MESSAGE.as_bytes());
}

#[actix_web::test]
async fn successful_responses_pass_through() {
    let app = actix_test::init_service(pipeline_app()).await;

    let req = actix_test::TestRequest::get().uri("/ok").to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(actix_test::read_body(res).await.as_ref(), b"fine");
}

#[actix_web::test]
async fn unmatched_routes_keep_the_default_not_found() {
    let app = actix_test::init_service(pipeline_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/does-not-exist").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().get(header::LOCATION).is_none());
}
