//! # Slot Selection
//!
//! The working set of selected cells for one editing session, plus the bulk
//! operations the weekly picker exposes.
//!
//! Each selected cell may carry the id of the server slot it corresponds to.
//! Ids are recovered from the most recently fetched server slots by matching
//! the weekday and the bucket the slot's start time falls into.
//!
//! ## Rules
//!
//! - At most one entry exists per `(weekday, slot_index)`.
//! - Bulk selection never overrides a disabled cell; such cells are skipped
//!   without an error.
//! - Bulk deselection always removes, disabled or not.
//! - A registered change listener receives exactly the cells that changed and
//!   the direction of the change.

use std::fmt;

use tracing::debug;

use crate::{
    errors::{DeskError, DeskResult},
    grid::{SlotGrid, is_disabled},
    models::slot::{DisabledSlot, SelectedSlot, ServerSlot, SlotCell, WeekDay},
};

/// Callback receiving `(changed_cells, selected)` after a bulk operation.
pub type ChangeListener = Box<dyn FnMut(&[SlotCell], bool) + Send>;

pub struct SlotSelection {
    grid: SlotGrid,
    selected: Vec<SelectedSlot>,
    disabled: Vec<DisabledSlot>,
    server_slots: Vec<ServerSlot>,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for SlotSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotSelection")
            .field("grid", &self.grid)
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .field("server_slots", &self.server_slots.len())
            .finish_non_exhaustive()
    }
}

impl SlotSelection {
    pub fn new(grid: SlotGrid) -> Self {
        Self {
            grid,
            selected: Vec::new(),
            disabled: Vec::new(),
            server_slots: Vec::new(),
            listener: None,
        }
    }

    /// Seeds the selection with every active server slot that lands on the grid.
    pub fn from_server_slots(grid: SlotGrid, server_slots: Vec<ServerSlot>) -> Self {
        let mut selection = Self::new(grid);
        for slot in server_slots.iter().filter(|slot| slot.is_active) {
            let Some(slot_index) = grid.slot_index_for(slot.start_time) else {
                debug!(slot_id = %slot.id, "Active slot outside the grid range, skipping");
                continue;
            };
            let cell = SlotCell::new(slot.week_day, slot_index);
            if !selection.is_selected(cell) {
                selection
                    .selected
                    .push(SelectedSlot::new(cell, Some(slot.id.clone())));
            }
        }
        selection.server_slots = server_slots;
        selection
    }

    pub fn with_disabled(mut self, disabled: Vec<DisabledSlot>) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn set_disabled(&mut self, disabled: Vec<DisabledSlot>) {
        self.disabled = disabled;
    }

    pub fn on_change(&mut self, listener: impl FnMut(&[SlotCell], bool) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn selected(&self) -> &[SelectedSlot] {
        &self.selected
    }

    pub fn disabled(&self) -> &[DisabledSlot] {
        &self.disabled
    }

    pub fn server_slots(&self) -> &[ServerSlot] {
        &self.server_slots
    }

    pub fn is_selected(&self, cell: SlotCell) -> bool {
        self.selected.iter().any(|slot| slot.cell() == cell)
    }

    pub fn is_disabled(&self, cell: SlotCell) -> bool {
        is_disabled(&self.disabled, cell)
    }

    /// Id of the server slot occupying `cell`, if any.
    pub fn server_id_for(&self, cell: SlotCell) -> Option<String> {
        self.server_slots
            .iter()
            .find(|slot| {
                slot.week_day == cell.weekday
                    && self.grid.slot_index_for(slot.start_time) == Some(cell.slot_index)
            })
            .map(|slot| slot.id.clone())
    }

    /// Flips one cell and returns whether it is selected afterwards.
    ///
    /// # Errors
    ///
    /// * `DeskError::Validation` - the cell is outside the grid or disabled
    pub fn toggle(&mut self, weekday: WeekDay, slot_index: usize) -> DeskResult<bool> {
        let cell = SlotCell::new(weekday, slot_index);
        if !self.grid.contains(cell) {
            return Err(DeskError::Validation(format!(
                "Slot {} is outside the {}-bucket grid",
                slot_index,
                self.grid.bucket_count()
            )));
        }

        if let Some(position) = self.selected.iter().position(|slot| slot.cell() == cell) {
            self.selected.remove(position);
            return Ok(false);
        }

        if self.is_disabled(cell) {
            return Err(DeskError::Validation(format!(
                "{} slot {} is not available",
                weekday.short_name(),
                slot_index
            )));
        }

        let id = self.server_id_for(cell);
        self.selected.push(SelectedSlot::new(cell, id));
        Ok(true)
    }

    /// Selects or deselects a list of cells and returns the cells that changed.
    pub fn bulk_set(&mut self, cells: &[SlotCell], selected: bool) -> Vec<SlotCell> {
        let mut delta = Vec::new();

        if selected {
            for &cell in cells {
                if !self.grid.contains(cell)
                    || self.is_disabled(cell)
                    || self.is_selected(cell)
                {
                    continue;
                }
                let id = self.server_id_for(cell);
                self.selected.push(SelectedSlot::new(cell, id));
                delta.push(cell);
            }
        } else {
            self.selected.retain(|slot| {
                let keep = !cells.contains(&slot.cell());
                if !keep {
                    delta.push(slot.cell());
                }
                keep
            });
        }

        if !delta.is_empty() {
            debug!(changed = delta.len(), selected, "Bulk slot update");
            if let Some(listener) = self.listener.as_mut() {
                listener(&delta, selected);
            }
        }

        delta
    }

    pub fn select_all_for_day(&mut self, weekday: WeekDay) -> Vec<SlotCell> {
        let cells: Vec<SlotCell> = self.grid.day_cells(weekday).collect();
        self.bulk_set(&cells, true)
    }

    pub fn clear_for_day(&mut self, weekday: WeekDay) -> Vec<SlotCell> {
        let cells: Vec<SlotCell> = self
            .selected
            .iter()
            .map(SelectedSlot::cell)
            .filter(|cell| cell.weekday == weekday)
            .collect();
        self.bulk_set(&cells, false)
    }

    pub fn select_all(&mut self) -> Vec<SlotCell> {
        let cells: Vec<SlotCell> = self.grid.cells().collect();
        self.bulk_set(&cells, true)
    }

    pub fn clear_all(&mut self) -> Vec<SlotCell> {
        let cells: Vec<SlotCell> = self.selected.iter().map(SelectedSlot::cell).collect();
        self.bulk_set(&cells, false)
    }

    /// Replaces the known server slots and attaches ids to entries that lacked one.
    pub fn refresh_server_slots(&mut self, server_slots: Vec<ServerSlot>) {
        self.server_slots = server_slots;
        let recovered: Vec<(usize, String)> = self
            .selected
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.id.is_none())
            .filter_map(|(position, slot)| {
                self.server_id_for(slot.cell()).map(|id| (position, id))
            })
            .collect();
        for (position, id) in recovered {
            self.selected[position].id = Some(id);
        }
    }

    /// Splits the selection into server ids and cells with no server record,
    /// both ordered by weekday then slot index.
    pub fn partition(&self) -> (Vec<String>, Vec<SlotCell>) {
        let mut ordered: Vec<&SelectedSlot> = self.selected.iter().collect();
        ordered.sort_by_key(|slot| slot.cell());

        let mut ids = Vec::new();
        let mut unknown = Vec::new();
        for slot in ordered {
            match &slot.id {
                Some(id) => ids.push(id.clone()),
                None => unknown.push(slot.cell()),
            }
        }
        (ids, unknown)
    }
}
