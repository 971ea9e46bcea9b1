//! Form decoding with key sanitisation.
//!
//! Field names containing `$` or `.` could be read as query operators or
//! nested paths by a document store. They are rewritten with `_` before the
//! body reaches a handler, so a field such as `$where` is only ever seen as
//! `_where`.

use std::ops::Deref;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use url::form_urlencoded;

use crate::domain::Error;

/// Flash text for a body that does not match the expected form.
pub const INVALID_FORM_MESSAGE: &str = "Invalid form submission";

/// Replace characters that carry meaning in document queries.
///
/// # Examples
/// ```
/// use yelp_camp::inbound::http::sanitize::sanitize_key;
///
/// assert_eq!(sanitize_key("$where"), "_where");
/// assert_eq!(sanitize_key("title.en"), "title_en");
/// assert_eq!(sanitize_key("title"), "title");
/// ```
#[must_use]
pub fn sanitize_key(key: &str) -> String {
    key.replace(['$', '.'], "_")
}

/// Decode an `application/x-www-form-urlencoded` body into `T` after
/// sanitising every key. When a key repeats, the last value wins.
pub fn decode_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let fields: Map<String, Value> = form_urlencoded::parse(body)
        .map(|(key, value)| (sanitize_key(&key), Value::String(value.into_owned())))
        .collect();
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        debug!(error = %err, "form body rejected");
        Error::invalid_request(INVALID_FORM_MESSAGE)
    })
}

/// Extractor decoding a sanitised form body.
#[derive(Debug)]
pub struct SanitizedForm<T>(pub T);

impl<T> SanitizedForm<T> {
    /// Unwrap the decoded form.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SanitizedForm<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for SanitizedForm<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let body = body.await?;
            Ok(Self(decode_form(&body)?))
        })
    }
}
