//! Completion and overdue counts for the report panel.

use chrono::NaiveDate;
use serde::Serialize;

use super::task::Task;
use crate::dates::MonthYear;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Over every stored task.
    pub all: Counts,
    /// Over the selected month, or equal to `all` when no month is selected.
    pub month: Counts,
    pub scope: Option<MonthYear>,
}

impl TaskStats {
    /// Compute both scopes over the full, unfiltered task list.
    ///
    /// Month scope: `total` counts tasks whose effective date (completion
    /// date, else deadline) is in the month, while `completed` and `overdue`
    /// only look at tasks whose completion date is in the month.
    pub fn compute(tasks: &[Task], today: NaiveDate, scope: Option<MonthYear>) -> Self {
        let all = Counts {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
        };

        let month = match scope {
            None => all,
            Some(m) => {
                let in_month = |d: Option<NaiveDate>| d.is_some_and(|d| m.contains(d));
                let completed_in_month: Vec<&Task> =
                    tasks.iter().filter(|t| in_month(t.completed_date)).collect();
                Counts {
                    total: tasks.iter().filter(|t| in_month(t.effective_date())).count(),
                    completed: completed_in_month.iter().filter(|t| t.completed).count(),
                    overdue: completed_in_month
                        .iter()
                        .filter(|t| t.is_overdue(today))
                        .count(),
                }
            }
        };

        Self { all, month, scope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: i64, due: Option<NaiveDate>, completed_date: Option<NaiveDate>) -> Task {
        Task {
            id,
            document_date: String::new(),
            reference_number: String::new(),
            issuing_authority: String::new(),
            summary: String::new(),
            due_date: due,
            note: String::new(),
            tags: String::new(),
            completed: completed_date.is_some(),
            completed_date,
        }
    }

    #[test]
    fn test_all_scope() {
        let tasks = vec![
            task(1, Some(today() + Duration::days(1)), None),
            task(2, Some(today() - Duration::days(3)), None),
            task(3, Some(today() - Duration::days(3)), Some(today())),
        ];
        let stats = TaskStats::compute(&tasks, today(), None);
        assert_eq!(stats.all, Counts { total: 3, completed: 1, overdue: 1 });
        assert_eq!(stats.month, stats.all);
        assert_eq!(stats.scope, None);
    }

    #[test]
    fn test_empty_store() {
        let stats = TaskStats::compute(&[], today(), MonthYear::new(11, 2025));
        assert_eq!(stats.all, Counts::default());
        assert_eq!(stats.month, Counts::default());
    }

    #[test]
    fn test_month_scope_total_uses_effective_date() {
        let tasks = vec![
            // open, due in November
            task(1, Some(date(2025, 11, 20)), None),
            // completed in November, due in October
            task(2, Some(date(2025, 10, 1)), Some(date(2025, 11, 2))),
            // completed in December, due in November
            task(3, Some(date(2025, 11, 5)), Some(date(2025, 12, 1))),
            // no dates at all
            task(4, None, None),
            // open, due November a year earlier
            task(5, Some(date(2024, 11, 5)), None),
        ];
        let stats = TaskStats::compute(&tasks, today(), MonthYear::new(11, 2025));
        assert_eq!(stats.month.total, 2);
        assert_eq!(stats.month.completed, 1);
        assert_eq!(stats.all, Counts { total: 5, completed: 2, overdue: 1 });
    }

    #[test]
    fn test_month_scope_overdue_restricted_to_completion_month() {
        // Open overdue tasks have no completion date, so they never fall into
        // the completion-month subset.
        let tasks = vec![
            task(1, Some(date(2025, 11, 1)), None),
            task(2, Some(date(2025, 11, 2)), None),
        ];
        let stats = TaskStats::compute(&tasks, today(), MonthYear::new(11, 2025));
        assert_eq!(stats.all.overdue, 2);
        assert_eq!(stats.month, Counts { total: 2, completed: 0, overdue: 0 });
    }
}
