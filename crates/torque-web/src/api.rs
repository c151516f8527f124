//! REST API route handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use torque_llm::{NormalizedReply, Turn};
use torque_search::VehicleInfo;

use crate::pipeline::run_chat;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/status
// ---------------------------------------------------------------------------

/// Response payload for the `/api/status` endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub model: String,
}

/// Report the configured provider. Never contacts it.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let descriptor = state.adapter.descriptor();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: descriptor.name.clone(),
        model: descriptor.model.clone(),
    })
}

// ---------------------------------------------------------------------------
// POST /api/chat
// ---------------------------------------------------------------------------

/// Request body for `/api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub messages: Vec<Turn>,
    #[serde(default)]
    pub car_info: VehicleInfo,
}

/// Run one chat turn.
///
/// 200 with `{success, message, web_results}` on success, 500 with
/// `{success, error}` when the completion fails, 400 for malformed input.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected chat request body");
            return bad_request(rejection.body_text());
        }
    };

    if body.messages.is_empty() {
        return bad_request("messages must not be empty".into());
    }

    let reply = run_chat(&state, &body.messages, &body.car_info).await;
    reply_response(reply)
}

fn reply_response(reply: NormalizedReply) -> (StatusCode, Json<Value>) {
    if reply.success {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": reply.message,
                "web_results": reply.resources,
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": reply.error.unwrap_or_else(|| "chat completion failed".into()),
            })),
        )
    }
}

fn bad_request(error: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": error })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use torque_search::SearchResult;

    #[test]
    fn chat_body_accepts_numeric_year_and_missing_car_info() {
        let body: ChatBody = serde_json::from_str(
            r#"{"messages":[{"role":"user","content":"hi"}],"car_info":{"year":2015,"make":"Honda"}}"#,
        )
        .unwrap();
        assert_eq!(body.car_info.year.as_deref(), Some("2015"));
        assert_eq!(body.car_info.model, None);

        let bare: ChatBody =
            serde_json::from_str(r#"{"messages":[{"role":"user","content":"hi"}]}"#).unwrap();
        assert_eq!(bare.car_info, VehicleInfo::default());
    }

    #[test]
    fn success_reply_keeps_null_web_results() {
        let (status, Json(v)) = reply_response(NormalizedReply::ok("done", None));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["success"], true);
        assert_eq!(v["message"], "done");
        assert!(v.get("web_results").is_some_and(Value::is_null));
    }

    #[test]
    fn success_reply_lists_resources() {
        let hits = vec![SearchResult {
            title: "T".into(),
            url: "https://t.test".into(),
            snippet: String::new(),
        }];
        let (_, Json(v)) = reply_response(NormalizedReply::ok("done", Some(hits)));
        assert_eq!(v["web_results"][0]["title"], "T");
        assert_eq!(v["web_results"][0]["url"], "https://t.test");
    }

    #[test]
    fn empty_search_keeps_web_results_as_empty_list() {
        let (status, Json(v)) = reply_response(NormalizedReply::ok("done", Some(Vec::new())));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["web_results"], json!([]));
    }

    #[test]
    fn failed_reply_has_no_message_key() {
        let (status, Json(v)) = reply_response(NormalizedReply::failure("provider returned 500: x"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v["success"], false);
        assert_eq!(v["error"], "provider returned 500: x");
        assert!(v.get("message").is_none());
    }
}
