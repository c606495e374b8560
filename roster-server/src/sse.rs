//! Server-Sent Events stream of roster changes.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::state::{AppState, RosterEvent};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SsePayload<'a> {
    #[serde(rename = "type")]
    event_type: &'static str,
    activity: &'a str,
    email: &'a str,
}

impl<'a> From<&'a RosterEvent> for SsePayload<'a> {
    fn from(event: &'a RosterEvent) -> Self {
        match event {
            RosterEvent::Enrolled { activity, email } => SsePayload {
                event_type: "enrolled",
                activity,
                email,
            },
            RosterEvent::Withdrawn { activity, email } => SsePayload {
                event_type: "withdrawn",
                activity,
                email,
            },
        }
    }
}

/// SSE endpoint handler.
pub async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.event_tx.subscribe();
    debug!("SSE client subscribed");

    let stream = async_stream::stream! {
        yield Ok(Event::default().event("connected").data("{}"));

        loop {
            match rx.recv().await {
                Ok(roster_event) => {
                    if let Ok(json) = serde_json::to_string(&SsePayload::from(&roster_event)) {
                        yield Ok(Event::default().event("change").data(json));
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(skipped = n, "SSE client lagged, some events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}
