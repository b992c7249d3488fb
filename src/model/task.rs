use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::{format_display_date, parse_display_date};

/// Workflow state of a task. Each variant is also a kanban column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Todo, Status::InProgress, Status::Review, Status::Done]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Done => "Done",
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A start/end pair of display dates ("Oct 10" .. "Oct 20").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
}

impl DateSpan {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Resolve both ends against `year`. `None` if either end is unusable.
    pub fn resolve(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_display_date(&self.start, year).ok()?;
        let end = parse_display_date(&self.end, year).ok()?;
        Some((start, end))
    }
}

/// A single work item on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    /// Dot-separated work breakdown code; its depth drives indentation.
    pub wbs: String,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: String,
    pub tags: Vec<String>,
    /// End / due date as shown on the board, e.g. "Oct 30".
    pub due_date: String,
    pub start_date: Option<String>,
    /// Baseline dates, rendered as a subdued bar behind the actual one.
    pub planned: Option<DateSpan>,
    /// Execution dates. When absent the start/due pair is used instead.
    pub actual: Option<DateSpan>,
    pub project_id: Uuid,
    pub description: String,
}

impl Task {
    /// Create a new task with sensible defaults.
    pub fn new(title: impl Into<String>, due_date: impl Into<String>, project_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            wbs: "1.0".to_string(),
            title: title.into(),
            status: Status::Todo,
            priority: Priority::Low,
            assignee: String::new(),
            tags: Vec::new(),
            due_date: due_date.into(),
            start_date: None,
            planned: None,
            actual: None,
            project_id,
            description: String::new(),
        }
    }

    /// Nesting level taken from the WBS code: "1.0" and "2.1" are 0, "1.2.1" is 1.
    pub fn depth(&self) -> usize {
        self.wbs.split('.').count().saturating_sub(2)
    }

    /// The interactive bar's date pair, as display strings.
    pub fn execution_span(&self) -> DateSpan {
        match &self.actual {
            Some(span) => span.clone(),
            None => DateSpan {
                start: self
                    .start_date
                    .clone()
                    .unwrap_or_else(|| self.due_date.clone()),
                end: self.due_date.clone(),
            },
        }
    }

    /// Resolved execution range, if both ends parse.
    pub fn execution_range(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        self.execution_span().resolve(year)
    }

    /// Write a new execution range back into whichever fields it was read from.
    pub fn set_execution_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let start = format_display_date(start);
        let end = format_display_date(end);
        match &mut self.actual {
            Some(span) => {
                span.start = start;
                span.end = end;
            }
            None => {
                self.start_date = Some(start);
                self.due_date = end;
            }
        }
    }

    /// Every display date the task references, in no particular order.
    pub fn reference_dates(&self) -> Vec<&str> {
        let mut dates = vec![self.due_date.as_str()];
        if let Some(start) = &self.start_date {
            dates.push(start);
        }
        for span in [&self.planned, &self.actual].into_iter().flatten() {
            dates.push(&span.start);
            dates.push(&span.end);
        }
        dates
    }

    /// Case-insensitive match against title and assignee.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.assignee.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn depth_follows_wbs_segments() {
        let mut task = Task::new("t", "Oct 1", Uuid::nil());
        task.wbs = "1.0".into();
        assert_eq!(task.depth(), 0);
        task.wbs = "1.2.1".into();
        assert_eq!(task.depth(), 1);
        task.wbs = "3".into();
        assert_eq!(task.depth(), 0);
    }

    #[test]
    fn execution_range_falls_back_to_due_date() {
        let task = Task::new("t", "Oct 12", Uuid::nil());
        assert_eq!(task.execution_range(2026), Some((ymd(10, 12), ymd(10, 12))));
    }

    #[test]
    fn execution_span_reads_actual_before_start_and_due() {
        let mut task = Task::new("t", "Oct 30", Uuid::nil());
        task.start_date = Some("Oct 20".into());
        assert_eq!(task.execution_span(), DateSpan::new("Oct 20", "Oct 30"));

        task.actual = Some(DateSpan::new("Oct 1", "Oct 4"));
        assert_eq!(task.execution_span(), DateSpan::new("Oct 1", "Oct 4"));
    }

    #[test]
    fn set_execution_range_writes_start_and_due() {
        let mut task = Task::new("t", "Oct 12", Uuid::nil());
        task.set_execution_range(ymd(10, 13), ymd(10, 15));
        assert_eq!(task.start_date.as_deref(), Some("Oct 13"));
        assert_eq!(task.due_date, "Oct 15");
    }

    #[test]
    fn set_execution_range_prefers_actual_span() {
        let mut task = Task::new("t", "Oct 30", Uuid::nil());
        task.actual = Some(DateSpan::new("Oct 1", "Oct 4"));
        task.set_execution_range(ymd(10, 2), ymd(10, 6));
        assert_eq!(task.actual, Some(DateSpan::new("Oct 2", "Oct 6")));
        assert_eq!(task.due_date, "Oct 30");
        assert_eq!(task.start_date, None);
    }

    #[test]
    fn status_serialises_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn query_matches_title_or_assignee() {
        let mut task = Task::new("Finance Review", "Oct 30", Uuid::nil());
        task.assignee = "Sarah".into();
        assert!(task.matches_query("finance"));
        assert!(task.matches_query("SAR"));
        assert!(!task.matches_query("design"));
    }
}
