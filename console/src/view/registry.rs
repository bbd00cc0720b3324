//! Open table views, keyed by session id
//!
//! Every client that opens the table gets its own `TableView` so page and
//! filter state survive between requests. Sessions nobody touched for a while
//! are swept by a background task.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::pipeline::{PageSize, ViewPage};
use super::table::{TableView, ViewCommand};
use crate::store::StoreSnapshot;

#[derive(Debug, Clone)]
struct ViewSession {
    view: TableView,
    last_used: DateTime<Utc>,
}

/// Result of applying commands to a session
#[derive(Debug, Clone)]
pub struct AppliedCommands {
    pub page: ViewPage,
    /// Commands that were ignored (out-of-range page moves)
    pub ignored: usize,
}

#[derive(Clone)]
pub struct ViewRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, ViewSession>>>,
    default_page_size: PageSize,
}

impl ViewRegistry {
    pub fn new(default_page_size: PageSize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_page_size,
        }
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = ViewSession {
            view: TableView::new(self.default_page_size),
            last_used: Utc::now(),
        };
        self.sessions.write().await.insert(id, session);
        info!("Opened table view {}", id);
        id
    }

    pub async fn render(&self, id: Uuid, snapshot: &StoreSnapshot) -> Option<ViewPage> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_used = Utc::now();
        Some(session.view.render(snapshot))
    }

    #[instrument(skip(self, commands, snapshot), fields(view = %id, commands = commands.len()))]
    pub async fn apply(
        &self,
        id: Uuid,
        commands: Vec<ViewCommand>,
        snapshot: &StoreSnapshot,
    ) -> Option<AppliedCommands> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_used = Utc::now();

        let ignored = commands
            .into_iter()
            .filter(|command| !session.view.apply(command.clone(), snapshot))
            .count();

        Some(AppliedCommands {
            page: session.view.render(snapshot),
            ignored,
        })
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Closed table view {}", id);
        }
        removed
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions idle for longer than `max_idle_minutes`
    pub async fn cleanup_idle(&self, max_idle_minutes: i64) -> u32 {
        let cutoff = match chrono::Duration::try_minutes(max_idle_minutes)
            .and_then(|idle| Utc::now().checked_sub_signed(idle))
        {
            Some(cutoff) => cutoff,
            None => {
                warn!(
                    "Idle limit of {} minutes is out of range, skipping view cleanup",
                    max_idle_minutes
                );
                return 0;
            }
        };

        let mut sessions = self.sessions.write().await;
        let initial_count = sessions.len();

        sessions.retain(|id, session| {
            let keep = session.last_used > cutoff;
            if !keep {
                warn!(
                    "Discarding table view {} (idle for {}m)",
                    id,
                    Utc::now().signed_duration_since(session.last_used).num_minutes()
                );
            }
            keep
        });

        (initial_count - sessions.len()) as u32
    }
}
