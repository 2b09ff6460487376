//! Weekly time slots.

use chrono::NaiveTime;

use crate::{
    model::classroom::ScheduleEntryDto,
    server::util::parse::{format_time, parse_time},
};

/// One weekly slot: a day label plus start and end time of day.
///
/// The day is an opaque label. Two intervals share a day only when their labels
/// are equal after trimming surrounding whitespace, so `"Monday"` and `"monday"`
/// are different days. Times are naive wall-clock times with second resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    pub day: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeInterval {
    pub fn new(day: impl Into<String>, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            day: day.into(),
            start_time,
            end_time,
        }
    }

    /// Whether both intervals fall on the same day label.
    pub fn same_day(&self, other: &TimeInterval) -> bool {
        self.day.trim() == other.day.trim()
    }

    /// Converts a stored schedule row at the repository boundary.
    pub fn from_entity(entity: entity::classroom_schedule::Model) -> Self {
        Self {
            day: entity.day,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    /// Parses a schedule entry DTO. `None` when either time is not `HH:MM:SS`.
    pub fn from_dto(dto: &ScheduleEntryDto) -> Option<Self> {
        Some(Self {
            day: dto.day.trim().to_string(),
            start_time: parse_time(&dto.start_time)?,
            end_time: parse_time(&dto.end_time)?,
        })
    }

    pub fn into_dto(self) -> ScheduleEntryDto {
        ScheduleEntryDto {
            day: self.day,
            start_time: format_time(self.start_time),
            end_time: format_time(self.end_time),
        }
    }
}
