// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session registry.
//!
//! Sessions live in a slot arena addressed by generation-checked handles.
//! Freeing a slot bumps its generation, so a stale handle can never reach a
//! later session that reuses the same slot. A slot whose generation would
//! wrap is retired instead of reused.
//!
//! Sessions are stored behind `Arc`: lookups clone the `Arc` under the lock
//! and scan outside it, so a concurrent `close` never invalidates an
//! in-flight scan.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::automaton::SearchOptions;
use crate::error::{Error, Result};
use crate::keyword::KeywordSet;
use crate::report::{Report, ReportMode};
use crate::session::Session;

/// Opaque session handle.
///
/// Packs a slot index (low 32 bits) and a generation (high 32 bits).
/// Generations start at 1, so the raw value 0 is never a live handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    fn new(index: u32, generation: u32) -> Self {
        Handle((u64::from(generation) << 32) | u64::from(index))
    }

    pub fn from_raw(raw: u64) -> Self {
        Handle(raw)
    }

    pub fn into_raw(self) -> u64 {
        self.0
    }

    pub fn index(self) -> u32 {
        self.0 as u32
    }

    pub fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.index(), self.generation())
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    session: Option<Arc<Session>>,
}

#[derive(Debug, Default)]
struct Slots {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Slots {
    fn insert(&mut self, session: Arc<Session>) -> Result<Handle> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.session = Some(session);
            self.live += 1;
            return Ok(Handle::new(index, slot.generation));
        }
        let index = u32::try_from(self.slots.len())
            .map_err(|_| Error::Internal("session registry is full".into()))?;
        self.slots.push(Slot {
            generation: 1,
            session: Some(session),
        });
        self.live += 1;
        Ok(Handle::new(index, 1))
    }

    fn get(&self, handle: Handle) -> Option<&Arc<Session>> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.session.as_ref()
    }

    fn remove(&mut self, handle: Handle) -> Option<Arc<Session>> {
        let index = handle.index();
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        let session = slot.session.take()?;
        self.live -= 1;
        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                self.free.push(index);
            }
            None => {
                tracing::debug!(index, "retiring exhausted session slot");
            }
        }
        Some(session)
    }
}

/// Thread-safe map from handles to sessions.
#[derive(Debug, Default)]
pub struct Registry {
    inner: Mutex<Slots>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Slots>> {
        self.inner
            .lock()
            .map_err(|_| Error::Internal("session registry lock poisoned".into()))
    }

    /// Compile `keywords` and register the resulting session.
    ///
    /// The automaton is built before the lock is taken.
    pub fn open(&self, keywords: KeywordSet, options: SearchOptions) -> Result<Handle> {
        let session = Arc::new(Session::new(keywords, options)?);
        let keywords = session.keywords().len();
        let handle = self.lock()?.insert(session)?;
        tracing::debug!(%handle, keywords, "opened session");
        Ok(handle)
    }

    /// Shared reference to a live session.
    pub fn get(&self, handle: Handle) -> Result<Arc<Session>> {
        self.lock()?
            .get(handle)
            .cloned()
            .ok_or(Error::InvalidHandle(handle))
    }

    /// Release a session. Scans already holding it run to completion.
    pub fn close(&self, handle: Handle) -> Result<()> {
        let removed = self.lock()?.remove(handle);
        // Dropped after the lock is released.
        let _session = removed.ok_or(Error::InvalidHandle(handle))?;
        tracing::debug!(%handle, "closed session");
        Ok(())
    }

    pub fn substitute(&self, handle: Handle, text: &str) -> Result<String> {
        Ok(self.get(handle)?.substitute(text))
    }

    pub fn find(&self, handle: Handle, text: &str, mode: ReportMode) -> Result<Report> {
        Ok(self.get(handle)?.report(text, mode))
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |slots| slots.live)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
