//! HTTP routes and the websocket live channel.
//!
//! Handlers only decode requests, call into [`crate::callbacks`], and encode
//! the result. Sessions hold no server-side state beyond their socket.

use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::callbacks::{self, OutputUpdate, SelectorEvent};
use crate::layout::PageLayout;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

type SharedState = Arc<AppState>;

/// Messages the browser sends over `/ws`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Select(SelectorEvent),
}

/// Messages the server sends over `/ws`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage<'a> {
    Layout(&'a PageLayout),
    Update { outputs: Vec<OutputUpdate> },
    Error { message: String },
}

impl ServerMessage<'_> {
    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"type":"error","message":"encode failed"}"#.to_string())
    }
}

pub fn router(state: SharedState, static_dir: PathBuf) -> Router {
    Router::new()
        // Page
        .route("/", get(page_index))
        // API
        .route("/api/layout", get(api_layout))
        .route("/api/figure", get(api_figure))
        .route("/api/summary", get(api_summary))
        .route("/api/records", get(api_records))
        .route("/api/wins", get(api_wins))
        .route("/api/final", get(api_final))
        .route("/ws", get(ws_handler))
        // Assets
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Serve until the listener fails or the process is terminated.
pub async fn serve(listener: TcpListener, state: SharedState, static_dir: PathBuf) -> anyhow::Result<()> {
    axum::serve(listener, router(state, static_dir)).await?;
    Ok(())
}

async fn page_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn api_layout(State(state): State<SharedState>) -> Response {
    Json(&state.layout).into_response()
}

async fn api_figure(State(state): State<SharedState>) -> Response {
    Json(&state.figure).into_response()
}

async fn api_summary(State(state): State<SharedState>) -> Response {
    Json(&state.summary).into_response()
}

async fn api_records(State(state): State<SharedState>) -> Response {
    Json(state.dataset.records()).into_response()
}

#[derive(Debug, Deserialize)]
struct WinsQuery {
    country: String,
}

#[derive(Debug, Deserialize)]
struct FinalQuery {
    year: u16,
}

async fn api_wins(State(state): State<SharedState>, Query(q): Query<WinsQuery>) -> Json<OutputUpdate> {
    Json(callbacks::win_count_output(&state, &q.country))
}

// A non-numeric year is rejected by the Query extractor with 400.
async fn api_final(State(state): State<SharedState>, Query(q): Query<FinalQuery>) -> Json<OutputUpdate> {
    Json(callbacks::final_output(&state, q.year))
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_browser_socket(socket, state))
}

async fn handle_browser_socket(mut socket: WebSocket, state: SharedState) {
    debug!("[WS] session opened");

    let hello = ServerMessage::Layout(&state.layout).to_json();
    if socket.send(Message::Text(hello)).await.is_err() {
        return;
    }

    while let Some(inbound) = socket.recv().await {
        let text = match inbound {
            Ok(Message::Text(text)) => text,
            Ok(Message::Binary(bin)) => match String::from_utf8(bin) {
                Ok(text) => text,
                Err(_) => continue,
            },
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => continue,
        };

        let reply = handle_client_text(&state, &text).to_json();
        if socket.send(Message::Text(reply)).await.is_err() {
            break;
        }
    }

    debug!("[WS] session closed");
}

/// Decode one client frame and produce the reply.
pub fn handle_client_text<'a>(state: &'a AppState, text: &str) -> ServerMessage<'a> {
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("[WS] malformed client message: {}", e);
            return ServerMessage::Error {
                message: format!("malformed message: {}", e),
            };
        }
    };

    match msg {
        ClientMessage::Select(event) => match callbacks::dispatch(state, &event) {
            Ok(outputs) => ServerMessage::Update { outputs },
            Err(e) => {
                warn!("[WS] rejected selector event: {}", e);
                ServerMessage::Error {
                    message: e.to_string(),
                }
            }
        },
    }
}

/// Log what is being served.
pub fn log_startup(state: &AppState) {
    info!(
        "Loaded {} finals ({}..={}), {} distinct winners",
        state.dataset.len(),
        state.dataset.years().next().unwrap_or_default(),
        state.dataset.years().last().unwrap_or_default(),
        state.summary.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn state() -> AppState {
        AppState::build().unwrap()
    }

    fn reply_json(state: &AppState, text: &str) -> Value {
        serde_json::from_str(&handle_client_text(state, text).to_json()).unwrap()
    }

    #[test]
    fn test_select_reply() {
        let state = state();
        let reply = reply_json(
            &state,
            r#"{"type":"select","id":"country-dropdown","value":"France"}"#,
        );
        assert_eq!(
            reply,
            json!({
                "type": "update",
                "outputs": [{
                    "id": "win-count-output",
                    "children": "France has won the World Cup 2 time(s)."
                }]
            })
        );
    }

    #[test]
    fn test_malformed_message_reply() {
        let state = state();
        let reply = reply_json(&state, "not json");
        assert_eq!(reply["type"], "error");

        let reply = reply_json(&state, r#"{"type":"subscribe"}"#);
        assert_eq!(reply["type"], "error");
    }

    #[test]
    fn test_dispatch_error_reply() {
        let state = state();
        let reply = reply_json(&state, r#"{"type":"select","id":"nope","value":1}"#);
        assert_eq!(reply["type"], "error");
        assert_eq!(reply["message"], "unknown element id \"nope\"");
    }

    #[test]
    fn test_layout_message_is_tagged() {
        let state = state();
        let json: Value =
            serde_json::from_str(&ServerMessage::Layout(&state.layout).to_json()).unwrap();
        assert_eq!(json["type"], "layout");
        assert_eq!(json["title"], "FIFA World Cup Dashboard");
        assert_eq!(json["country_dropdown"]["value"], "Brazil");
        assert_eq!(json["year_dropdown"]["value"], 2022);
        assert_eq!(json["map"]["figure"]["data"][0]["type"], "choropleth");
    }
}
