//! Notification dispatch - core enrichment and forwarding logic.
//!
//! This module walks an authenticated webhook envelope, enriches each
//! comment change with detail fetches from the Graph API, and forwards
//! the assembled event to Zapier.
//!
//! ## Processing Flow
//!
//! ```text
//! WebhookEnvelope → comment changes → fetch comment + media → NormalizedEvent → Zapier
//! ```
//!
//! Fetch and forward failures drop the affected change; they never fail
//! the inbound request.

pub mod types;

use futures::future::join;
use tracing::{error, info, warn};

use crate::graph::GraphClient;
use crate::zapier::{Forwarder, NormalizedEvent};

pub use types::{
    ChangeEvent, ChangeValue, EntryItem, MediaRef, WebhookEnvelope, COMMENTS_FIELD,
    INSTAGRAM_OBJECT,
};

/// Per-request processing summary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Comment changes found in the payload
    pub comment_changes: usize,
    /// Events successfully forwarded to Zapier
    pub forwarded: usize,
    /// Changes dropped because ids were missing or a fetch/forward failed
    pub skipped: usize,
}

/// Process one authenticated webhook envelope.
///
/// Changes are handled strictly in payload order. Within a change the
/// comment and media fetches run concurrently and are joined before the
/// event is assembled; the event is forwarded only when both succeed.
pub async fn process_notification(
    graph: &GraphClient,
    forwarder: &Forwarder,
    envelope: WebhookEnvelope,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    if envelope.object != INSTAGRAM_OBJECT {
        info!(object = %envelope.object, "webhook_object_ignored");
        return outcome;
    }

    for entry in envelope.entry {
        let changes = match entry.changes {
            Some(changes) => changes,
            None => continue,
        };

        for change in changes {
            if change.field != COMMENTS_FIELD {
                continue;
            }

            outcome.comment_changes += 1;

            let ids = change.value.as_ref().and_then(|value| {
                let comment_id = value.id.clone()?;
                let media_id = value.media.as_ref()?.id.clone()?;
                Some((comment_id, media_id))
            });

            let (comment_id, media_id) = match ids {
                Some(ids) => ids,
                None => {
                    warn!("comment_change_missing_ids");
                    outcome.skipped += 1;
                    continue;
                }
            };

            info!(
                comment_id = %comment_id,
                media_id = %media_id,
                "comment_change_detected"
            );

            // The two fetches are independent reads, issued concurrently
            // and joined before assembly.
            let (comment, media) = join(
                graph.fetch_comment(&comment_id),
                graph.fetch_media(&media_id),
            )
            .await;

            let (comment, media) = match (comment, media) {
                (Ok(comment), Ok(media)) => (comment, media),
                (comment, media) => {
                    if let Err(e) = &comment {
                        error!(comment_id = %comment_id, error = %e, "comment_fetch_failed");
                    }
                    if let Err(e) = &media {
                        error!(media_id = %media_id, error = %e, "media_fetch_failed");
                    }
                    outcome.skipped += 1;
                    continue;
                }
            };

            let event = NormalizedEvent::new_comment(comment, media);

            match forwarder.forward(&event).await {
                Ok(()) => outcome.forwarded += 1,
                Err(e) => {
                    error!(comment_id = %comment_id, error = %e, "zapier_forward_failed");
                    outcome.skipped += 1;
                }
            }
        }
    }

    outcome
}
