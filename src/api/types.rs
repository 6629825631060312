//! Request and response types for the task page and its JSON twin.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::MonthYear;
use crate::task::{TaskFilter, TaskStats, TaskView};

/// Query string of `GET /` and `GET /api/tasks`.
///
/// Values arrive straight from an HTML form, so every field is text and may be
/// empty. A month bound only applies when both its month and year parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub from_month: Option<String>,
    pub from_year: Option<String>,
    pub to_month: Option<String>,
    pub to_year: Option<String>,
    pub stat_month: Option<String>,
    pub stat_year: Option<String>,
}

fn parse_number<T: std::str::FromStr>(name: &str, value: Option<&str>) -> Option<T> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!("Ignoring non-numeric {}={:?}", name, value);
            None
        }
    }
}

fn month_year(
    month_name: &str,
    month: Option<&str>,
    year_name: &str,
    year: Option<&str>,
) -> Option<MonthYear> {
    let month = parse_number::<u32>(month_name, month)?;
    let year = parse_number::<i32>(year_name, year)?;
    let parsed = MonthYear::new(month, year);
    if parsed.is_none() {
        tracing::debug!("Ignoring out-of-range {}={}", month_name, month);
    }
    parsed
}

impl ListQuery {
    pub fn filter(&self) -> TaskFilter {
        TaskFilter {
            search: self.search.clone(),
            from: month_year(
                "from_month",
                self.from_month.as_deref(),
                "from_year",
                self.from_year.as_deref(),
            ),
            to: month_year(
                "to_month",
                self.to_month.as_deref(),
                "to_year",
                self.to_year.as_deref(),
            ),
        }
    }

    pub fn stat_scope(&self) -> Option<MonthYear> {
        month_year(
            "stat_month",
            self.stat_month.as_deref(),
            "stat_year",
            self.stat_year.as_deref(),
        )
    }
}

/// Everything the task page shows.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub today: NaiveDate,
    pub tasks: Vec<TaskView>,
    pub stats: TaskStats,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        let mut q = ListQuery::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "search" => q.search = v,
                "from_month" => q.from_month = v,
                "from_year" => q.from_year = v,
                "to_month" => q.to_month = v,
                "to_year" => q.to_year = v,
                "stat_month" => q.stat_month = v,
                "stat_year" => q.stat_year = v,
                _ => unreachable!(),
            }
        }
        q
    }

    #[test]
    fn test_complete_pairs() {
        let q = query(&[
            ("from_month", "4"),
            ("from_year", "2025"),
            ("to_month", "11"),
            ("to_year", " 2025 "),
            ("stat_month", "11"),
            ("stat_year", "2025"),
        ]);
        let filter = q.filter();
        assert_eq!(filter.from, MonthYear::new(4, 2025));
        assert_eq!(filter.to, MonthYear::new(11, 2025));
        assert_eq!(q.stat_scope(), MonthYear::new(11, 2025));
    }

    #[test]
    fn test_half_pairs_and_junk_are_ignored() {
        let q = query(&[
            ("from_month", "4"),
            ("from_year", ""),
            ("to_month", "13"),
            ("to_year", "2025"),
            ("stat_month", "nov"),
            ("stat_year", "2025"),
        ]);
        let filter = q.filter();
        assert_eq!(filter.from, None);
        assert_eq!(filter.to, None);
        assert_eq!(q.stat_scope(), None);
    }

    #[test]
    fn test_search_passed_through() {
        let q = query(&[("search", "audit")]);
        assert_eq!(q.filter().search.as_deref(), Some("audit"));
    }
}
