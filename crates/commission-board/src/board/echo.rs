use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::Path;
use axum::response::Response;
use tracing::debug;

pub const ECHO_PREFIX: &str = "Server received: ";

pub fn echo_reply(text: &str) -> String {
    format!("{ECHO_PREFIX}{text}")
}

/// Per-application channel that echoes every text frame back with a prefix.
pub(crate) async fn echo_handler(
    Path(application_id): Path<i64>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| echo_session(socket, application_id))
}

async fn echo_session(mut socket: WebSocket, application_id: i64) {
    debug!(application_id, "echo channel opened");

    while let Some(message) = socket.recv().await {
        match message {
            Ok(Message::Text(text)) => {
                if socket.send(Message::Text(echo_reply(&text))).await.is_err() {
                    break;
                }
            }
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    debug!(application_id, "echo channel closed");
}
