//! # Weekly Slot Grid
//!
//! Maps an hour range and a slot duration to an ordered sequence of time
//! buckets, and a `(weekday, slot_index)` cell to the clock times it covers.
//!
//! Buckets that run past midnight wrap around the clock (`23:00`, `00:00`, ...)
//! and stay in the same weekday column as the rest of the row.

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::{
    errors::{DeskError, DeskResult},
    models::slot::{DisabledSlot, SlotCell, WeekDay},
};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Fixed weekly grid geometry.
///
/// The constructor clamps the hour range so that at least one bucket always
/// exists and the range never inverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    start_hour: u32,
    end_hour: u32,
    slot_minutes: u32,
}

impl SlotGrid {
    /// Builds a grid from possibly out-of-range input.
    ///
    /// `start_hour` is clamped to `0..=23` and `end_hour` to
    /// `start_hour + 1..=24`.
    ///
    /// # Errors
    ///
    /// * `DeskError::Validation` - `slot_minutes` is zero
    pub fn new(start_hour: u32, end_hour: u32, slot_minutes: u32) -> DeskResult<Self> {
        if slot_minutes == 0 {
            return Err(DeskError::Validation(
                "Slot duration must be at least one minute".to_string(),
            ));
        }

        let start_hour = start_hour.min(23);
        let end_hour = end_hour.min(24).max(start_hour + 1);

        Ok(Self {
            start_hour,
            end_hour,
            slot_minutes,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Number of buckets per weekday, `ceil(range_minutes / slot_minutes)`.
    pub fn bucket_count(&self) -> usize {
        let range_minutes = (self.end_hour - self.start_hour) * 60;
        range_minutes.div_ceil(self.slot_minutes) as usize
    }

    /// Clock time at which bucket `slot_index` starts.
    pub fn bucket_start(&self, slot_index: usize) -> NaiveTime {
        let offset = i64::from(self.start_hour) * 60 + slot_index as i64 * i64::from(self.slot_minutes);
        NaiveTime::MIN + TimeDelta::minutes(offset.rem_euclid(MINUTES_PER_DAY))
    }

    /// `"HH:MM"` labels for every bucket, in order.
    pub fn labels(&self) -> Vec<String> {
        (0..self.bucket_count())
            .map(|index| self.bucket_start(index).format("%H:%M").to_string())
            .collect()
    }

    /// Display range of a cell. The end may wrap past midnight.
    pub fn time_range(&self, cell: SlotCell) -> (NaiveTime, NaiveTime) {
        let start = self.bucket_start(cell.slot_index);
        let end = start + TimeDelta::minutes(i64::from(self.slot_minutes));
        (start, end)
    }

    pub fn contains(&self, cell: SlotCell) -> bool {
        cell.slot_index < self.bucket_count()
    }

    /// Every cell of the grid, weekday-major.
    pub fn cells(&self) -> impl Iterator<Item = SlotCell> + '_ {
        WeekDay::ALL.into_iter().flat_map(move |weekday| {
            (0..self.bucket_count()).map(move |index| SlotCell::new(weekday, index))
        })
    }

    /// Cells of one weekday column.
    pub fn day_cells(&self, weekday: WeekDay) -> impl Iterator<Item = SlotCell> {
        (0..self.bucket_count()).map(move |index| SlotCell::new(weekday, index))
    }

    /// Bucket a server start time falls into, or `None` if it lies outside
    /// the grid. Times before `start_hour` are treated as belonging to the
    /// wrapped part of the range.
    pub fn slot_index_for(&self, time: NaiveTime) -> Option<usize> {
        let minutes = i64::from(time.hour()) * 60 + i64::from(time.minute());
        let offset = (minutes - i64::from(self.start_hour) * 60).rem_euclid(MINUTES_PER_DAY);
        let index = (offset / i64::from(self.slot_minutes)) as usize;
        (index < self.bucket_count()).then_some(index)
    }

    /// A row is hidden when the cell is disabled on all seven weekdays.
    pub fn is_row_hidden(&self, slot_index: usize, disabled: &[DisabledSlot]) -> bool {
        WeekDay::ALL
            .into_iter()
            .all(|weekday| is_disabled(disabled, SlotCell::new(weekday, slot_index)))
    }

    /// Indices of the rows that should be rendered, in order.
    pub fn visible_rows(&self, disabled: &[DisabledSlot]) -> Vec<usize> {
        (0..self.bucket_count())
            .filter(|&index| !self.is_row_hidden(index, disabled))
            .collect()
    }
}

/// Exact match on weekday and index; calendar dates are never compared.
pub fn is_disabled(disabled: &[DisabledSlot], cell: SlotCell) -> bool {
    disabled.iter().any(|slot| slot.cell() == cell)
}
