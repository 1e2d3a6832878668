//! Ledger Application Service (Use Case)
//!
//! Owns one persistent cell per collection and exposes the user actions
//! the presentation layer drives. Every action mutates at most the cells it
//! names; derived metrics are recomputed on read.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use sovereign::domain::entities::parse_amount;
use sovereign::{
    BlockKind, ChatEntry, DailyRitual, DomainError, KeyValueStore, LeakDraft, MetricsSnapshot,
    PersistentCell, ResourceLeak, TimeBlock, WarChest, WarChestField,
};
use tokio::sync::watch;
use tracing::{debug, info};

use super::oversoul::{build_context, Oversoul};

pub const LEAKS_KEY: &str = "sov_leaks";
pub const WAR_CHEST_KEY: &str = "sov_chest";
pub const TIME_BLOCKS_KEY: &str = "sov_time";
pub const RITUAL_KEY: &str = "sov_rituals";
pub const REVELATIONS_KEY: &str = "sov_revelations";
pub const TRANSCRIPT_KEY: &str = "sov_chat";

/// What to do with an Oversoul answer that arrives after a newer question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Keep only the answer to the most recent question
    #[default]
    LatestOnly,
    /// Append every answer when it arrives, possibly out of order
    AppendAll,
}

impl std::str::FromStr for ResponseOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" | "latest_only" => Ok(ResponseOrdering::LatestOnly),
            "append" | "append_all" => Ok(ResponseOrdering::AppendAll),
            _ => Err(format!("Unknown response ordering: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    pub response_ordering: ResponseOrdering,
}

/// Application service for the Sovereign ledger
pub struct LedgerService {
    leaks: PersistentCell<Vec<ResourceLeak>>,
    war_chest: PersistentCell<WarChest>,
    time_blocks: PersistentCell<Vec<TimeBlock>>,
    ritual: PersistentCell<DailyRitual>,
    revelations: PersistentCell<Vec<String>>,
    transcript: PersistentCell<Vec<ChatEntry>>,
    oversoul: Oversoul,
    config: LedgerConfig,
    latest_request: AtomicU64,
    in_flight: AtomicUsize,
    loading: watch::Sender<bool>,
}

/// Marks one Oversoul request in flight until dropped
struct InFlight<'a> {
    ledger: &'a LedgerService,
}

impl<'a> InFlight<'a> {
    fn start(ledger: &'a LedgerService) -> Self {
        ledger.in_flight.fetch_add(1, Ordering::SeqCst);
        ledger.loading.send_replace(true);
        Self { ledger }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.ledger.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.ledger.loading.send_replace(false);
        }
    }
}

impl LedgerService {
    /// Hydrate every cell from `store`
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        oversoul: Oversoul,
        config: LedgerConfig,
    ) -> Result<Self, DomainError> {
        let (loading, _) = watch::channel(false);

        let ledger = Self {
            leaks: PersistentCell::new(store.clone(), LEAKS_KEY, Vec::new())?,
            war_chest: PersistentCell::new(store.clone(), WAR_CHEST_KEY, WarChest::default())?,
            time_blocks: PersistentCell::new(
                store.clone(),
                TIME_BLOCKS_KEY,
                TimeBlock::default_schedule(),
            )?,
            ritual: PersistentCell::new(store.clone(), RITUAL_KEY, DailyRitual::for_today())?,
            revelations: PersistentCell::new(store.clone(), REVELATIONS_KEY, Vec::new())?,
            transcript: PersistentCell::new(store, TRANSCRIPT_KEY, Vec::new())?,
            oversoul,
            config,
            latest_request: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            loading,
        };

        info!(
            leaks = ledger.leaks.with(|l| l.len()),
            time_blocks = ledger.time_blocks.with(|b| b.len()),
            transcript = ledger.transcript.with(|t| t.len()),
            "Ledger opened"
        );

        Ok(ledger)
    }

    // ============================================
    // Leaks
    // ============================================

    pub fn leaks(&self) -> Vec<ResourceLeak> {
        self.leaks.get()
    }

    /// Record a new unsealed leak. Empty name or amount is a no-op.
    pub fn submit_leak(&self, draft: LeakDraft) -> Result<Option<ResourceLeak>, DomainError> {
        let Some(leak) = draft.into_leak() else {
            return Ok(None);
        };

        self.leaks.update(|leaks| {
            let mut next = leaks.clone();
            next.push(leak.clone());
            next
        })?;

        debug!(id = %leak.id, name = %leak.name, amount = leak.amount, "Leak recorded");
        Ok(Some(leak))
    }

    /// Seal a leak and log its name in today's ritual.
    ///
    /// Returns `false` without touching anything when the id is unknown or
    /// the leak is already sealed. If the ritual write fails, both cells
    /// still hold the sealed state in memory and the ritual reaches the
    /// store with its next successful write.
    pub fn seal_leak(&self, id: &str) -> Result<bool, DomainError> {
        let mut sealed_name = None;

        let sealed = self.leaks.try_update(|leaks| {
            let index = leaks.iter().position(|l| l.id == id && !l.sealed)?;
            let mut next = leaks.clone();
            next[index] = next[index].sealed();
            sealed_name = Some(next[index].name.clone());
            Some(next)
        })?;

        let Some(name) = sealed_name.filter(|_| sealed) else {
            return Ok(false);
        };

        self.ritual.update(|ritual| ritual.with_sealed(name.clone()))?;

        info!(id = %id, name = %name, "Leak sealed");
        Ok(true)
    }

    pub fn remove_leak(&self, id: &str) -> Result<bool, DomainError> {
        self.leaks.try_update(|leaks| {
            let index = leaks.iter().position(|l| l.id == id)?;
            let mut next = leaks.clone();
            next.remove(index);
            Some(next)
        })
    }

    // ============================================
    // War chest
    // ============================================

    pub fn war_chest(&self) -> WarChest {
        self.war_chest.get()
    }

    /// Replace the whole chest; NaN or infinite fields become 0
    pub fn set_war_chest(&self, chest: WarChest) -> Result<(), DomainError> {
        self.war_chest.set(chest.finite())
    }

    /// Set one field from user input; non-numeric input becomes 0
    pub fn set_war_chest_field(&self, field: WarChestField, raw: &str) -> Result<(), DomainError> {
        let value = parse_amount(raw);
        self.war_chest.update(|chest| chest.with_field(field, value))
    }

    // ============================================
    // Time blocks
    // ============================================

    pub fn time_blocks(&self) -> Vec<TimeBlock> {
        self.time_blocks.get()
    }

    /// Schedule a block. An empty label is a no-op; a NaN or infinite
    /// duration is stored as 0.
    pub fn add_time_block(
        &self,
        kind: BlockKind,
        label: &str,
        start_time: &str,
        duration_hours: f64,
    ) -> Result<Option<TimeBlock>, DomainError> {
        if label.trim().is_empty() {
            return Ok(None);
        }

        let block = TimeBlock::new(kind, label, start_time, duration_hours);
        self.time_blocks.update(|blocks| {
            let mut next = blocks.clone();
            next.push(block.clone());
            next
        })?;

        Ok(Some(block))
    }

    pub fn remove_time_block(&self, id: &str) -> Result<bool, DomainError> {
        self.time_blocks.try_update(|blocks| {
            let index = blocks.iter().position(|b| b.id == id)?;
            let mut next = blocks.clone();
            next.remove(index);
            Some(next)
        })
    }

    /// Drop the whole schedule
    pub fn clear_time_blocks(&self) -> Result<(), DomainError> {
        self.time_blocks.set(Vec::new())
    }

    // ============================================
    // Rituals and revelations
    // ============================================

    pub fn ritual(&self) -> DailyRitual {
        self.ritual.get()
    }

    pub fn set_morning_invocation(&self, done: bool) -> Result<(), DomainError> {
        self.ritual.update(|ritual| DailyRitual {
            morning_invocation: done,
            ..ritual.clone()
        })
    }

    pub fn set_evening_audit(&self, done: bool) -> Result<(), DomainError> {
        self.ritual.update(|ritual| DailyRitual {
            evening_audit: done,
            ..ritual.clone()
        })
    }

    /// Newest first
    pub fn revelations(&self) -> Vec<String> {
        self.revelations.get()
    }

    /// Prepend a journal line. Blank text is a no-op.
    pub fn add_revelation(&self, text: &str) -> Result<bool, DomainError> {
        if text.trim().is_empty() {
            return Ok(false);
        }

        self.revelations.update(|revelations| {
            let mut next = Vec::with_capacity(revelations.len() + 1);
            next.push(text.to_string());
            next.extend(revelations.iter().cloned());
            next
        })?;

        Ok(true)
    }

    // ============================================
    // Oversoul
    // ============================================

    pub fn transcript(&self) -> Vec<ChatEntry> {
        self.transcript.get()
    }

    /// Whether any Oversoul request is in flight
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Send a message to the Oversoul and record both sides of the exchange.
    ///
    /// Blank messages are a no-op. Returns the answer, or `None` when it was
    /// superseded by a newer question under [`ResponseOrdering::LatestOnly`].
    /// Remote faults surface as a fallback answer, never as an error; only
    /// persistence faults are returned.
    pub async fn consult(&self, message: &str) -> Result<Option<String>, DomainError> {
        if message.trim().is_empty() {
            return Ok(None);
        }

        self.transcript.update(|transcript| {
            let mut next = transcript.clone();
            next.push(ChatEntry::user(message));
            next
        })?;

        let sequence = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let context = build_context(&self.metrics(), message);

        let advice = {
            let _in_flight = InFlight::start(self);
            self.oversoul.advise(&context).await
        };

        let superseded = self.latest_request.load(Ordering::SeqCst) != sequence;
        if superseded && self.config.response_ordering == ResponseOrdering::LatestOnly {
            info!(sequence, "Discarding superseded Oversoul answer");
            return Ok(None);
        }

        self.transcript.update(|transcript| {
            let mut next = transcript.clone();
            next.push(ChatEntry::assistant(advice.clone()));
            next
        })?;

        Ok(Some(advice))
    }

    // ============================================
    // Derived metrics and subscriptions
    // ============================================

    /// Metrics recomputed from the current cell contents
    pub fn metrics(&self) -> MetricsSnapshot {
        let chest = self.war_chest.get();
        self.leaks.with(|leaks| {
            self.time_blocks
                .with(|blocks| MetricsSnapshot::compute(leaks, blocks, &chest))
        })
    }

    pub fn subscribe_leaks(&self) -> watch::Receiver<u64> {
        self.leaks.subscribe()
    }

    pub fn subscribe_war_chest(&self) -> watch::Receiver<u64> {
        self.war_chest.subscribe()
    }

    pub fn subscribe_time_blocks(&self) -> watch::Receiver<u64> {
        self.time_blocks.subscribe()
    }

    pub fn subscribe_ritual(&self) -> watch::Receiver<u64> {
        self.ritual.subscribe()
    }

    pub fn subscribe_revelations(&self) -> watch::Receiver<u64> {
        self.revelations.subscribe()
    }

    pub fn subscribe_transcript(&self) -> watch::Receiver<u64> {
        self.transcript.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}
