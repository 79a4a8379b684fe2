use std::{convert::Infallible, time::Duration};

use axum::{
    extract::{Extension, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::Stream;
use tokio::sync::broadcast::error::RecvError;

use crate::{models::CurrentUser, AppState};

// GET /events  (SSE)
//
// Only the caller's own events are forwarded.
pub async fn sse_events(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events_tx.subscribe();

    let stream = futures_util::stream::unfold((rx, u.id), |(mut rx, user_id)| async move {
        loop {
            let evt = match rx.recv().await {
                Ok(e) if e.user_id == user_id => Event::default().event(e.name).data("1"),
                Ok(_) => continue,
                Err(RecvError::Lagged(_)) => Event::default().event("ping").data("lagged"),
                Err(RecvError::Closed) => return None,
            };

            return Some((Ok(evt), (rx, user_id)));
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(20))
            .text("keep-alive"),
    )
}
