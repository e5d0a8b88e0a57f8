//! List + form panel state shared by the bus, student, and notification pages.
//!
//! DESIGN
//! ======
//! A panel owns one list, one error slot, one success slot, and a `pending`
//! flag. Every mutating operation has the same post-condition: a successful
//! request is followed by exactly one full reload of the list. A failed one
//! leaves the list alone and writes the error slot.
//!
//! Slots are independent and last-write-wins. A new success does not clear an
//! old error and vice versa.
//!
//! `pending` is set while a mutation and its reload are in flight; further
//! mutations are refused until it clears, and pages disable their controls
//! off it. Loads do not touch it.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::net::http::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub pending: bool,
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), error: None, success: None, pending: false }
    }
}

impl<T> PanelState<T> {
    /// Replace the list on success; otherwise set the error and keep the list.
    pub fn apply_load(&mut self, result: Result<Vec<T>, ApiError>, fallback: &str) -> bool {
        match result {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(err) => {
                self.error = Some(err.display_message(fallback));
                false
            }
        }
    }
}

/// Messages and confirmation for one kind of mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Error slot text when the server gives no `message`.
    pub failure: &'static str,
    /// Success slot text; `None` leaves the slot untouched.
    pub success: Option<&'static str>,
    /// Fallback for the follow-up reload.
    pub reload_failure: &'static str,
    /// When set, the user must confirm this prompt before anything is sent.
    pub confirm: Option<&'static str>,
}

/// Somewhere a panel's state lives: a Leptos signal in the app, a `RefCell`
/// in tests.
pub trait PanelCell<T> {
    fn is_pending(&self) -> bool;
    fn edit(&self, f: impl FnOnce(&mut PanelState<T>));
}

impl<T: Send + Sync + 'static> PanelCell<T> for RwSignal<PanelState<T>> {
    fn is_pending(&self) -> bool {
        // A disposed signal means the page is gone; treat it as busy.
        self.try_with_untracked(|s| s.pending).unwrap_or(true)
    }

    fn edit(&self, f: impl FnOnce(&mut PanelState<T>)) {
        self.update(f);
    }
}

impl<T> PanelCell<T> for RefCell<PanelState<T>> {
    fn is_pending(&self) -> bool {
        self.borrow().pending
    }

    fn edit(&self, f: impl FnOnce(&mut PanelState<T>)) {
        f(&mut self.borrow_mut());
    }
}

/// Fetch the collection into the panel.
pub async fn load<T, C, F>(cell: &C, fetch: F, fallback: &str) -> bool
where
    C: PanelCell<T>,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    let result = fetch.await;
    if let Err(err) = &result {
        warn!("panel load failed: {err}");
    }
    let mut loaded = false;
    cell.edit(|s| loaded = s.apply_load(result, fallback));
    loaded
}

/// Run one mutation with the panel contract.
///
/// Returns `true` only when the request succeeded. `on_success` runs before
/// the reload so forms reset while the list refreshes. A declined
/// confirmation or an already-pending panel sends nothing.
pub async fn mutate<T, C, Req, OnOk, Reload, ReloadFut>(
    cell: &C,
    outcome: Outcome,
    confirm: impl FnOnce(&str) -> bool,
    request: Req,
    on_success: OnOk,
    reload: Reload,
) -> bool
where
    C: PanelCell<T>,
    Req: Future<Output = Result<(), ApiError>>,
    OnOk: FnOnce(),
    Reload: FnOnce() -> ReloadFut,
    ReloadFut: Future<Output = Result<Vec<T>, ApiError>>,
{
    if cell.is_pending() {
        return false;
    }
    if let Some(prompt) = outcome.confirm {
        if !confirm(prompt) {
            return false;
        }
    }

    cell.edit(|s| s.pending = true);
    match request.await {
        Ok(()) => {
            if let Some(message) = outcome.success {
                cell.edit(|s| s.success = Some(message.to_owned()));
            }
            on_success();
            load(cell, reload(), outcome.reload_failure).await;
            cell.edit(|s| s.pending = false);
            true
        }
        Err(err) => {
            warn!("panel mutation failed: {err}");
            cell.edit(|s| {
                s.error = Some(err.display_message(outcome.failure));
                s.pending = false;
            });
            false
        }
    }
}

/// Confirmation stand-in for outcomes that never prompt.
pub fn no_prompt(_: &str) -> bool {
    true
}
