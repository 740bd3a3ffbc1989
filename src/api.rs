//! API Client
//!
//! One async wrapper per backend operation, each normalizing the transport
//! into either a domain value or a rejection carrying a human-readable
//! message. Generic failure classes travel as `error.*` i18n keys; server
//! messages pass through verbatim.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod appointments;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod profile;
pub mod tasks;

const API_BASE: &str = "/api";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Normalize one HTTP exchange into the response envelope.
///
/// 204 is a bare success. A non-2xx status rejects with the server's
/// `message` when the body carries one, else the status code. A 2xx body
/// must parse as JSON and carry `success: true`, otherwise the call
/// rejects with the server's message or a generic invalid-response error.
fn parse_envelope(status: u16, body: &str) -> Result<Value, String> {
    if status == 204 {
        return Ok(Value::Null);
    }
    let value: Option<Value> = serde_json::from_str(body).ok();
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string);

    if !(200..300).contains(&status) {
        return Err(message.unwrap_or_else(|| format!("HTTP {status}")));
    }

    let value = value.ok_or_else(|| "error.invalid_response".to_string())?;
    match value.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(value),
        _ => Err(message.unwrap_or_else(|| "error.invalid_response".to_string())),
    }
}

/// Pull one named field out of a success envelope.
fn take_field<T: DeserializeOwned>(value: &Value, field: &str) -> Result<T, String> {
    let inner = value
        .get(field)
        .cloned()
        .ok_or_else(|| "error.invalid_response".to_string())?;
    serde_json::from_value(inner).map_err(|_| "error.invalid_response".to_string())
}

async fn send(builder: RequestBuilder, body: Option<Value>) -> Result<Value, String> {
    let result = match body {
        Some(payload) => match builder.json(&payload) {
            Ok(request) => request.send().await,
            Err(_) => return Err("error.network".to_string()),
        },
        None => builder.send().await,
    };
    let response = result.map_err(|_| "error.network".to_string())?;
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    parse_envelope(status, &text)
}

/// GETs disable HTTP caching so a reload always reflects the latest
/// mutation.
async fn get_value(path: &str) -> Result<Value, String> {
    send(
        Request::get(&endpoint(path)).cache(web_sys::RequestCache::NoStore),
        None,
    )
    .await
}

async fn get<T: DeserializeOwned>(path: &str, field: &str) -> Result<T, String> {
    let value = get_value(path).await?;
    take_field(&value, field)
}

async fn post(path: &str, body: Value) -> Result<Value, String> {
    send(Request::post(&endpoint(path)), Some(body)).await
}

async fn put(path: &str, body: Value) -> Result<Value, String> {
    send(Request::put(&endpoint(path)), Some(body)).await
}

async fn delete(path: &str) -> Result<(), String> {
    send(Request::delete(&endpoint(path)), None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_200_with_success_false_rejects_with_server_message() {
        let err = parse_envelope(200, r#"{"success":false,"message":"X"}"#).unwrap_err();
        assert_eq!(err, "X");
    }

    #[test]
    fn http_204_is_a_bare_success() {
        assert_eq!(parse_envelope(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn missing_success_flag_is_an_invalid_response() {
        let err = parse_envelope(200, r#"{"categories":[]}"#).unwrap_err();
        assert_eq!(err, "error.invalid_response");
    }

    #[test]
    fn unparseable_body_is_an_invalid_response() {
        let err = parse_envelope(200, "<html>oops</html>").unwrap_err();
        assert_eq!(err, "error.invalid_response");
    }

    #[test]
    fn non_2xx_prefers_the_server_message() {
        let err = parse_envelope(404, r#"{"success":false,"message":"introuvable"}"#).unwrap_err();
        assert_eq!(err, "introuvable");
        let err = parse_envelope(502, "bad gateway").unwrap_err();
        assert_eq!(err, "HTTP 502");
    }

    #[test]
    fn take_field_extracts_typed_payloads() {
        let value = parse_envelope(
            200,
            r#"{"success":true,"categories":[{"id":1,"titre":"Entretien"}]}"#,
        )
        .unwrap();
        let categories: Vec<crate::models::Category> = take_field(&value, "categories").unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Entretien");

        let missing: Result<Vec<crate::models::Category>, _> = take_field(&value, "tasks");
        assert_eq!(missing.unwrap_err(), "error.invalid_response");
    }
}
