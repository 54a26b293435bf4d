use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Task priority as assigned by back-office staff.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle status of a task, derived from its dates rather than stored.
///
/// `Completed` covers late completions too; lateness is reported separately
/// by the KPI summary and is not conflated with lifecycle state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
pub enum TaskStatus {
    Completed,
    #[strum(to_string = "In Progress")]
    InProgress,
    Overdue,
}

/// A staff task record as materialized by the data-source collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub department: String,
    pub category: String,
    pub priority: Option<Priority>,
    pub due_on: NaiveDate,
    pub completed_on: Option<NaiveDate>,
    pub assignee_id: Uuid,
}

impl TaskRecord {
    /// Derives the lifecycle status for the given reporting day.
    pub fn status(&self, today: NaiveDate) -> TaskStatus {
        if self.completed_on.is_some() {
            TaskStatus::Completed
        } else if self.due_on < today {
            TaskStatus::Overdue
        } else {
            TaskStatus::InProgress
        }
    }

    /// Completion date if present, else the due date. Used for date-window
    /// filtering.
    pub fn effective_date(&self) -> NaiveDate {
        self.completed_on.unwrap_or(self.due_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(due: NaiveDate, completed: Option<NaiveDate>) -> TaskRecord {
        TaskRecord {
            name: "restock shelves".to_string(),
            department: "Warehouse".to_string(),
            category: "Inventory".to_string(),
            priority: Some(Priority::Medium),
            due_on: due,
            completed_on: completed,
            assignee_id: Uuid::new_v4(),
        }
    }

    #[test_case(Some((2025, 5, 3)), TaskStatus::Completed; "completed after due")]
    #[test_case(Some((2025, 4, 29)), TaskStatus::Completed; "completed before due")]
    #[test_case(None, TaskStatus::Overdue; "open past due")]
    fn status_for_past_due_date(completed: Option<(i32, u32, u32)>, expected: TaskStatus) {
        let today = date(2025, 5, 10);
        let t = task(date(2025, 5, 1), completed.map(|(y, m, d)| date(y, m, d)));
        assert_eq!(t.status(today), expected);
    }

    #[test]
    fn open_task_due_today_is_in_progress() {
        let today = date(2025, 5, 10);
        let t = task(today, None);
        assert_eq!(t.status(today), TaskStatus::InProgress);
    }

    #[test]
    fn open_task_due_later_is_in_progress() {
        let today = date(2025, 5, 10);
        let t = task(date(2025, 6, 1), None);
        assert_eq!(t.status(today), TaskStatus::InProgress);
    }

    #[test]
    fn effective_date_prefers_completion() {
        let t = task(date(2025, 5, 1), Some(date(2025, 5, 3)));
        assert_eq!(t.effective_date(), date(2025, 5, 3));
        let open = task(date(2025, 5, 1), None);
        assert_eq!(open.effective_date(), date(2025, 5, 1));
    }

    #[test]
    fn status_labels_render_for_report_cells() {
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert_eq!(Priority::High.to_string(), "High");
    }
}
