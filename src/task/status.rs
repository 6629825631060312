//! Deadline status derived from a task and the current date.

use chrono::NaiveDate;
use serde::Serialize;

use super::task::Task;

/// Days remaining before a deadline that still count as "due soon".
pub const DUE_SOON_DAYS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days_remaining", rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    NoDeadline,
    Overdue,
    DueSoon(i64),
    Upcoming(i64),
}

impl TaskStatus {
    /// Classify `task` relative to `today`. First match wins:
    /// completed, no deadline, past deadline, within [`DUE_SOON_DAYS`], later.
    pub fn classify(task: &Task, today: NaiveDate) -> Self {
        if task.completed {
            return Self::Completed;
        }
        let Some(due) = task.due_date else {
            return Self::NoDeadline;
        };
        let days = (due - today).num_days();
        if days < 0 {
            Self::Overdue
        } else if days <= DUE_SOON_DAYS {
            Self::DueSoon(days)
        } else {
            Self::Upcoming(days)
        }
    }

    /// Bootstrap contextual color name.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Completed => "success",
            Self::NoDeadline => "purple",
            Self::Overdue => "danger",
            Self::DueSoon(_) => "warning",
            Self::Upcoming(_) => "info",
        }
    }

    /// Bootstrap icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "check-circle-fill",
            Self::NoDeadline => "question-circle",
            Self::Overdue => "exclamation-triangle-fill",
            Self::DueSoon(_) => "clock-fill",
            Self::Upcoming(_) => "hourglass-split",
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Completed => "Completed".to_string(),
            Self::NoDeadline => "No deadline".to_string(),
            Self::Overdue => "Overdue".to_string(),
            Self::DueSoon(days) => format!("Due soon ({} days)", days),
            Self::Upcoming(days) => format!("{} days left", days),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Read-only projection of a task for display: the record plus its status.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub status: TaskStatus,
    pub status_label: String,
    pub color: &'static str,
    pub icon: &'static str,
}

impl TaskView {
    pub fn new(task: Task, today: NaiveDate) -> Self {
        let status = TaskStatus::classify(&task, today);
        Self {
            status_label: status.label(),
            color: status.color(),
            icon: status.icon(),
            status,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
    }

    fn task(due_in: Option<i64>, completed: bool) -> Task {
        Task {
            id: 1,
            document_date: String::new(),
            reference_number: String::new(),
            issuing_authority: String::new(),
            summary: String::new(),
            due_date: due_in.map(|d| today() + Duration::days(d)),
            note: String::new(),
            tags: String::new(),
            completed,
            completed_date: completed.then(today),
        }
    }

    #[test]
    fn test_completed_wins_over_deadline() {
        for due in [None, Some(-10), Some(0), Some(1), Some(30)] {
            assert_eq!(TaskStatus::classify(&task(due, true), today()), TaskStatus::Completed);
        }
    }

    #[test]
    fn test_no_deadline() {
        assert_eq!(TaskStatus::classify(&task(None, false), today()), TaskStatus::NoDeadline);
    }

    #[test]
    fn test_deadline_boundaries() {
        let classify = |d| TaskStatus::classify(&task(Some(d), false), today());
        assert_eq!(classify(-3), TaskStatus::Overdue);
        assert_eq!(classify(-1), TaskStatus::Overdue);
        assert_eq!(classify(0), TaskStatus::DueSoon(0));
        assert_eq!(classify(1), TaskStatus::DueSoon(1));
        assert_eq!(classify(2), TaskStatus::DueSoon(2));
        assert_eq!(classify(3), TaskStatus::Upcoming(3));
        assert_eq!(classify(40), TaskStatus::Upcoming(40));
    }

    #[test]
    fn test_presentation_hints() {
        let view = TaskView::new(task(Some(1), false), today());
        assert_eq!(view.color, "warning");
        assert_eq!(view.icon, "clock-fill");
        assert_eq!(view.status_label, "Due soon (1 days)");

        let view = TaskView::new(task(Some(-1), false), today());
        assert_eq!(view.color, "danger");
        assert_eq!(view.icon, "exclamation-triangle-fill");

        assert_eq!(TaskStatus::Upcoming(5).to_string(), "5 days left");
        assert_eq!(TaskStatus::NoDeadline.color(), "purple");
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = TaskView::new(task(Some(5), false), today());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"]["kind"], "upcoming");
        assert_eq!(json["status"]["days_remaining"], 5);
        assert_eq!(json["color"], "info");
    }
}
