//! # Working Schedule Form
//!
//! Loads the account's working slots into a [`SlotSelection`] and writes the
//! edited selection back.
//!
//! Saving replaces the server's whole active set with the ids of the selected
//! cells. Cells without a server id cannot be created from here, so a
//! selection containing any of them is refused and nothing is sent.
//!
//! A failed save leaves the selection exactly as it was so the user can retry.
//! Saves are not queued: whatever is selected when `save` runs is what gets
//! submitted.

use slotdesk_core::{
    cache::{QueryCache, WORKING_SLOTS_KEY},
    errors::{DeskError, DeskResult},
    grid::SlotGrid,
    models::slot::{DisabledSlot, ServerSlot},
    selection::SlotSelection,
};
use tracing::{info, warn};

use crate::api::SlotApi;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub active_ids: Vec<String>,
}

pub struct WorkingScheduleForm<A: SlotApi> {
    api: A,
    grid: SlotGrid,
    disabled: Vec<DisabledSlot>,
    cache: QueryCache<Vec<ServerSlot>>,
    selection: SlotSelection,
}

impl<A: SlotApi> WorkingScheduleForm<A> {
    pub fn new(api: A, grid: SlotGrid) -> Self {
        Self {
            api,
            grid,
            disabled: Vec::new(),
            cache: QueryCache::new(),
            selection: SlotSelection::new(grid),
        }
    }

    pub fn with_disabled(mut self, disabled: Vec<DisabledSlot>) -> Self {
        self.selection.set_disabled(disabled.clone());
        self.disabled = disabled;
        self
    }

    pub fn selection(&self) -> &SlotSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SlotSelection {
        &mut self.selection
    }

    /// Working slots, from the cache when present.
    pub async fn working_slots(&mut self) -> DeskResult<Vec<ServerSlot>> {
        if let Some(slots) = self.cache.get(WORKING_SLOTS_KEY) {
            return Ok(slots);
        }
        let slots = self.api.fetch_working_slots().await?;
        self.cache.insert(WORKING_SLOTS_KEY, slots.clone());
        Ok(slots)
    }

    /// Rebuilds the selection from the server's active slots, discarding edits.
    ///
    /// # Errors
    ///
    /// * `DeskError::Api` - the slots could not be fetched; the current
    ///   selection is kept
    pub async fn load(&mut self) -> DeskResult<&SlotSelection> {
        let slots = self.working_slots().await?;
        self.selection =
            SlotSelection::from_server_slots(self.grid, slots).with_disabled(self.disabled.clone());
        info!(
            selected = self.selection.selected().len(),
            "Loaded working schedule"
        );
        Ok(&self.selection)
    }

    /// Fetches fresh slots and attaches ids to selected cells that lacked one,
    /// keeping the user's edits.
    pub async fn refresh(&mut self) -> DeskResult<()> {
        self.cache.invalidate(WORKING_SLOTS_KEY);
        let slots = self.working_slots().await?;
        self.selection.refresh_server_slots(slots);
        Ok(())
    }

    /// Submits the ids of the selected cells as the new active set.
    ///
    /// # Errors
    ///
    /// * `DeskError::Validation` - some selected cells have no server slot;
    ///   nothing is sent
    /// * `DeskError::Api` - the request failed; the selection is unchanged
    pub async fn save(&mut self) -> DeskResult<SaveSummary> {
        let (active_ids, unknown) = self.selection.partition();

        if !unknown.is_empty() {
            warn!(
                count = unknown.len(),
                "Selected slots have no server record; creating slots is not supported here"
            );
            return Err(DeskError::Validation(format!(
                "{} selected slot(s) do not exist on the server yet and cannot be saved",
                unknown.len()
            )));
        }

        self.api.set_active_slots(&active_ids).await?;
        self.cache.invalidate(WORKING_SLOTS_KEY);

        info!(count = active_ids.len(), "Saved working schedule");
        Ok(SaveSummary { active_ids })
    }
}
