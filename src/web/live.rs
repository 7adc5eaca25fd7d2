//! Live Updates
//!
//! WebSocket endpoint that forwards dashboard change notifications to the
//! browser so open pages reload after each state transition.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use super::state::AppState;
use crate::dashboard::DashboardEvent;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let events = state.dashboard.subscribe();
    ws.on_upgrade(move |socket| handle_socket(socket, events))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, mut events: broadcast::Receiver<DashboardEvent>) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = uuid::Uuid::new_v4();
    tracing::debug!(connection_id = %connection_id, "Live connection opened");

    // Forward dashboard events to the socket
    let mut send_task = tokio::spawn(async move {
        loop {
            let event = match events.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(connection_id = %connection_id, skipped, "Live connection lagged");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let text = match serde_json::to_string(&event) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize event");
                    continue;
                }
            };
            if sender.send(Message::Text(text)).await.is_err() {
                tracing::debug!(connection_id = %connection_id, "WebSocket send failed, closing connection");
                break;
            }
        }
    });

    // Drain incoming frames until the client goes away
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !keep_open(&msg) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(connection_id = %connection_id, error = %e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    tracing::debug!(connection_id = %connection_id, "Live connection closed");
}

/// Returns false if the connection should be closed.
///
/// Pings are answered by axum; text and binary frames are ignored.
fn keep_open(message: &Message) -> bool {
    !matches!(message, Message::Close(_))
}
