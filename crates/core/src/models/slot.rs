use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::DeskError;

/// Day of the working week, serialized the way the slot endpoints spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Zero-based position with Monday first.
    pub fn index(self) -> u64 {
        match self {
            WeekDay::Monday => 0,
            WeekDay::Tuesday => 1,
            WeekDay::Wednesday => 2,
            WeekDay::Thursday => 3,
            WeekDay::Friday => 4,
            WeekDay::Saturday => 5,
            WeekDay::Sunday => 6,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
            WeekDay::Sunday => "Sun",
        }
    }

    /// Date of this weekday inside the fixed reference week
    /// (Monday 1970-01-05 through Sunday 1970-01-11).
    pub fn reference_date(self) -> NaiveDate {
        NaiveDate::default() + Days::new(4 + self.index())
    }
}

impl std::str::FromStr for WeekDay {
    type Err = DeskError;

    /// Accepts short or full English names in any case (`"wed"`, `"Wednesday"`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lower = raw.trim().to_lowercase();
        WeekDay::ALL
            .into_iter()
            .find(|day| {
                lower == day.short_name().to_lowercase() || lower == format!("{day:?}").to_lowercase()
            })
            .ok_or_else(|| DeskError::Validation(format!("Unknown weekday: {raw}")))
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
            Weekday::Sun => WeekDay::Sunday,
        }
    }
}

/// One cell of the weekly grid: a weekday and a position in the bucket sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotCell {
    pub weekday: WeekDay,
    pub slot_index: usize,
}

impl SlotCell {
    pub fn new(weekday: WeekDay, slot_index: usize) -> Self {
        Self { weekday, slot_index }
    }
}

/// A cell the user has selected.
///
/// `date` only carries the weekday; two entries are the same cell when their
/// weekdays and indices match, whatever calendar week the dates fall in.
/// `id` is present once the cell is known to exist server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub date: NaiveDate,
    pub slot_index: usize,
    pub id: Option<String>,
}

impl SelectedSlot {
    pub fn new(cell: SlotCell, id: Option<String>) -> Self {
        Self {
            date: cell.weekday.reference_date(),
            slot_index: cell.slot_index,
            id,
        }
    }

    pub fn weekday(&self) -> WeekDay {
        self.date.weekday().into()
    }

    pub fn cell(&self) -> SlotCell {
        SlotCell::new(self.weekday(), self.slot_index)
    }
}

/// A cell the user may not toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledSlot {
    pub date: NaiveDate,
    pub slot_index: usize,
}

impl DisabledSlot {
    pub fn new(cell: SlotCell) -> Self {
        Self {
            date: cell.weekday.reference_date(),
            slot_index: cell.slot_index,
        }
    }

    pub fn weekday(&self) -> WeekDay {
        self.date.weekday().into()
    }

    pub fn cell(&self) -> SlotCell {
        SlotCell::new(self.weekday(), self.slot_index)
    }
}

/// Slot record as returned by the working-slots endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSlot {
    pub id: String,
    pub week_day: WeekDay,
    #[serde(with = "clock")]
    pub start_time: NaiveTime,
    #[serde(with = "clock")]
    pub end_time: NaiveTime,
    pub is_active: bool,
}

/// Body of the "set active slots" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetActiveSlotsRequest {
    pub ids: Vec<String>,
}

/// `"HH:MM"` clock strings. Seconds are accepted on input and dropped on output.
pub mod clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid clock time: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }
}
