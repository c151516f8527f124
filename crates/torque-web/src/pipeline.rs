//! Per-request chat pipeline: optional search, then one chat completion.

use tracing::Instrument;
use uuid::Uuid;

use torque_llm::{NormalizedReply, Turn};
use torque_search::VehicleInfo;

use crate::state::AppState;

/// Run one chat turn end to end.
///
/// The trigger check looks at the last turn's text whatever its role.
/// Search failures never reach the caller; a failed completion comes back
/// as a reply with `success == false`.
pub async fn run_chat(state: &AppState, turns: &[Turn], vehicle: &VehicleInfo) -> NormalizedReply {
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id, provider = %state.adapter.descriptor().name);

    async move {
        let Some(last) = turns.last() else {
            return NormalizedReply::failure("conversation has no turns");
        };

        tracing::info!(turns = turns.len(), "chat request received");

        let resources = state.search.maybe_search(&last.content, vehicle).await;
        if let Some(hits) = &resources {
            tracing::info!(count = hits.len(), "search resources attached");
        }

        let reply = state.adapter.send(turns, resources).await;
        if reply.success {
            tracing::info!(reply_len = reply.message.len(), "chat request completed");
        } else {
            tracing::warn!(error = reply.error.as_deref().unwrap_or_default(), "chat request failed");
        }
        reply
    }
    .instrument(span)
    .await
}
