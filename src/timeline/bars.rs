//! Pixel geometry of task bars.

use chrono::NaiveDate;

use super::grid::{Granularity, TimelineWindow};
use crate::model::dates::days_between;
use crate::model::Task;

/// Horizontal placement of a bar relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
}

/// Place a bar for `start..=end` on a grid whose first column is `grid_start`.
///
/// Day granularity counts the end date inclusively so a one-day task covers
/// its column. Width never drops below one column, which keeps zero-length and
/// inverted ranges clickable.
pub fn bar_position(
    start: NaiveDate,
    end: NaiveDate,
    grid_start: NaiveDate,
    granularity: Granularity,
    unit_width: f32,
) -> BarGeometry {
    let per_unit = granularity.days_per_unit() as f32;
    let offset = days_between(grid_start, start) as f32;
    let inclusive = match granularity {
        Granularity::Day => 1.0,
        Granularity::Week => 0.0,
    };
    let duration = days_between(start, end) as f32 + inclusive;

    BarGeometry {
        left: offset / per_unit * unit_width,
        width: (duration / per_unit * unit_width).max(unit_width),
    }
}

/// The baseline and execution bars of one task row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaskBars {
    /// Non-interactive baseline bar.
    pub planned: Option<BarGeometry>,
    /// Draggable execution bar.
    pub actual: Option<BarGeometry>,
}

/// Compute both bars for a task. A bar whose dates are missing or don't
/// resolve is left out.
pub fn task_bars(task: &Task, window: &TimelineWindow, year: i32) -> TaskBars {
    let place = |(start, end): (NaiveDate, NaiveDate)| {
        bar_position(
            start,
            end,
            window.grid_start(),
            window.granularity,
            window.unit_width,
        )
    };

    TaskBars {
        planned: task.planned.as_ref().and_then(|s| s.resolve(year)).map(place),
        actual: task.execution_range(year).map(place),
    }
}
