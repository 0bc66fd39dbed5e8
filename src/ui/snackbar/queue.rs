// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `SnackbarQueue` owns every active snackbar together with its expiry
//! deadline. It is bounded: when a new key arrives while the queue is full,
//! the oldest entry is evicted first. Entries leave the queue either when
//! [`SnackbarQueue::expire`] sees their deadline pass or when they are
//! dismissed with [`SnackbarQueue::delete`].
//!
//! The backing `LruCache` is only ever touched through non-promoting calls
//! (`peek`, `peek_mut`, `contains`, `put` of new keys, `pop`, `pop_lru`), so
//! its recency order is exactly the insertion order.

use super::entry::{Snackbar, SnackbarKey};
use crate::config::{
    DEFAULT_SNACKBAR_CAPACITY, DEFAULT_SNACKBAR_LIFETIME_MS, MAX_SNACKBAR_CAPACITY,
    MAX_SNACKBAR_LIFETIME_MS, MIN_SNACKBAR_CAPACITY, MIN_SNACKBAR_LIFETIME_MS,
};
use crate::ui::design_tokens::motion;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific snackbar (user clicked it).
    Dismiss(SnackbarKey),
    /// Periodic tick used to expire snackbars whose deadline passed.
    Tick(Instant),
}

/// Capacity and lifetime of a [`SnackbarQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnackbarSettings {
    capacity: NonZeroUsize,
    lifetime: Duration,
}

impl SnackbarSettings {
    /// Creates settings, clamping both values to their supported ranges.
    #[must_use]
    pub fn new(capacity: usize, lifetime_ms: u64) -> Self {
        let capacity = capacity.clamp(MIN_SNACKBAR_CAPACITY, MAX_SNACKBAR_CAPACITY);
        let lifetime_ms = lifetime_ms.clamp(MIN_SNACKBAR_LIFETIME_MS, MAX_SNACKBAR_LIFETIME_MS);
        Self {
            capacity: NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            lifetime: Duration::from_millis(lifetime_ms),
        }
    }

    #[must_use]
    pub fn capacity(self) -> NonZeroUsize {
        self.capacity
    }

    #[must_use]
    pub fn lifetime(self) -> Duration {
        self.lifetime
    }
}

impl Default for SnackbarSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SNACKBAR_CAPACITY, DEFAULT_SNACKBAR_LIFETIME_MS)
    }
}

/// What [`SnackbarQueue::add`] did with a snackbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new key was appended.
    Inserted(SnackbarKey),
    /// The key was already queued; its content was replaced in place and
    /// its expiry clock restarted.
    Refreshed(SnackbarKey),
    /// The queue was full, so `evicted` (the oldest entry) made room for
    /// `inserted`.
    Evicted {
        inserted: SnackbarKey,
        evicted: SnackbarKey,
    },
}

impl AddOutcome {
    /// Key of the snackbar that was added or refreshed.
    #[must_use]
    pub fn key(&self) -> &SnackbarKey {
        match self {
            AddOutcome::Inserted(key) | AddOutcome::Refreshed(key) => key,
            AddOutcome::Evicted { inserted, .. } => inserted,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    snackbar: Snackbar,
    inserted_at: Instant,
    expires_at: Instant,
}

/// Read-only view of a queued snackbar and its timing.
#[derive(Debug, Clone, Copy)]
pub struct QueuedSnackbar<'a> {
    key: &'a SnackbarKey,
    slot: &'a Slot,
}

impl<'a> QueuedSnackbar<'a> {
    #[must_use]
    pub fn key(&self) -> &'a SnackbarKey {
        self.key
    }

    #[must_use]
    pub fn snackbar(&self) -> &'a Snackbar {
        &self.slot.snackbar
    }

    #[must_use]
    pub fn inserted_at(&self) -> Instant {
        self.slot.inserted_at
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.slot.expires_at
    }

    /// Fade-in progress in `0.0..=1.0`.
    #[must_use]
    pub fn appearance(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.slot.inserted_at);
        (elapsed.as_secs_f32() / motion::APPEAR.as_secs_f32()).min(1.0)
    }
}

/// Bounded, insertion-ordered, de-duplicating snackbar collection.
pub struct SnackbarQueue {
    entries: LruCache<SnackbarKey, Slot>,
    lifetime: Duration,
}

impl fmt::Debug for SnackbarQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnackbarQueue")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

impl Default for SnackbarQueue {
    fn default() -> Self {
        Self::new(SnackbarSettings::default())
    }
}

impl SnackbarQueue {
    #[must_use]
    pub fn new(settings: SnackbarSettings) -> Self {
        Self {
            entries: LruCache::new(settings.capacity()),
            lifetime: settings.lifetime(),
        }
    }

    /// Adds a snackbar using the current time.
    pub fn add(&mut self, snackbar: Snackbar) -> AddOutcome {
        self.add_at(snackbar, Instant::now())
    }

    /// Adds a snackbar as if it happened at `now`.
    ///
    /// A snackbar whose key is already queued replaces the queued one in
    /// place and restarts its expiry clock. Otherwise the oldest entry is
    /// evicted first when the queue is full.
    pub fn add_at(&mut self, snackbar: Snackbar, now: Instant) -> AddOutcome {
        let key = snackbar.key();
        let expires_at = now + self.lifetime;

        if let Some(slot) = self.entries.peek_mut(&key) {
            slot.snackbar = snackbar;
            slot.expires_at = expires_at;
            tracing::debug!(key = %key, "snackbar refreshed");
            return AddOutcome::Refreshed(key);
        }

        let evicted = if self.entries.len() >= self.entries.cap().get() {
            self.entries.pop_lru().map(|(evicted, _)| evicted)
        } else {
            None
        };

        self.entries.put(
            key.clone(),
            Slot {
                snackbar,
                inserted_at: now,
                expires_at,
            },
        );

        match evicted {
            Some(evicted) => {
                tracing::debug!(key = %key, evicted = %evicted, "snackbar inserted, oldest evicted");
                AddOutcome::Evicted {
                    inserted: key,
                    evicted,
                }
            }
            None => {
                tracing::debug!(key = %key, "snackbar inserted");
                AddOutcome::Inserted(key)
            }
        }
    }

    /// Removes a snackbar immediately, together with its pending expiry.
    ///
    /// Returns `true` if it was queued. Deleting twice is harmless.
    pub fn delete(&mut self, key: &SnackbarKey) -> bool {
        let removed = self.entries.pop(key).is_some();
        if removed {
            tracing::debug!(key = %key, "snackbar dismissed");
        }
        removed
    }

    /// Removes every snackbar whose deadline is at or before `now`.
    ///
    /// Returns the removed keys, oldest first.
    pub fn expire(&mut self, now: Instant) -> Vec<SnackbarKey> {
        let due: Vec<SnackbarKey> = self
            .entries
            .iter()
            .rev()
            .filter(|(_, slot)| slot.expires_at <= now)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &due {
            self.entries.pop(key);
            tracing::debug!(key = %key, "snackbar expired");
        }

        due
    }

    /// Handles a snackbar message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(key) => {
                self.delete(key);
            }
            Message::Tick(now) => {
                self.expire(*now);
            }
        }
    }

    /// Queued snackbars as `(key, snackbar)` pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&SnackbarKey, &Snackbar)> {
        self.entries
            .iter()
            .rev()
            .map(|(key, slot)| (key, &slot.snackbar))
    }

    /// Queued snackbars with their timing, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = QueuedSnackbar<'_>> {
        self.entries
            .iter()
            .rev()
            .map(|(key, slot)| QueuedSnackbar { key, slot })
    }

    #[must_use]
    pub fn get(&self, key: &SnackbarKey) -> Option<&Snackbar> {
        self.entries.peek(key).map(|slot| &slot.snackbar)
    }

    #[must_use]
    pub fn contains(&self, key: &SnackbarKey) -> bool {
        self.entries.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.cap()
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, slot)| slot.expires_at).min()
    }

    /// Whether any snackbar is still fading in at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries().any(|entry| entry.appearance(now) < 1.0)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
