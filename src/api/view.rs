//! HTML rendering of the task page (Bootstrap 5 via CDN).

use std::fmt::Write;

use super::types::{ListQuery, TaskPage};
use crate::actions::Flash;
use crate::dates::format_date;
use crate::task::{TaskStats, TaskView};

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(value: &Option<String>) -> String {
    escape(value.as_deref().unwrap_or_default())
}

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Docket</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
<style>
.text-bg-purple { background-color: #6f42c1 !important; color: #fff !important; }
.summary { white-space: pre-line; max-width: 28rem; }
</style>
</head>
<body class="bg-light">
<div class="container-fluid py-3">
<h1 class="h3 mb-3">Document tasks</h1>
"#;

const TAIL: &str = r#"</div>
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#;

pub fn render_page(page: &TaskPage, query: &ListQuery, flash: Option<&Flash>) -> String {
    let mut html = String::from(HEAD);

    if let Some(flash) = flash {
        let _ = writeln!(
            html,
            r#"<div class="alert alert-{}" role="alert">{}</div>"#,
            flash.level.as_str(),
            escape(&flash.message)
        );
    }

    render_stats(&mut html, &page.stats);
    render_filters(&mut html, query);
    render_add_form(&mut html);
    render_table(&mut html, &page.tasks);

    let _ = writeln!(
        html,
        r#"<p class="text-muted small">Today: {}</p>"#,
        format_date(page.today)
    );
    html.push_str(TAIL);
    html
}

fn render_stats(html: &mut String, stats: &TaskStats) {
    let month_title = match stats.scope {
        Some(m) => format!("Month {:02}/{}", m.month, m.year),
        None => "All months".to_string(),
    };
    let card = |title: &str, c: &crate::task::Counts| {
        format!(
            r#"<div class="col-md-6"><div class="card"><div class="card-body">
<h2 class="h6 card-title">{}</h2>
<span class="badge text-bg-secondary me-2">Total: {}</span>
<span class="badge text-bg-success me-2">Completed: {}</span>
<span class="badge text-bg-danger">Overdue: {}</span>
</div></div></div>"#,
            escape(title),
            c.total,
            c.completed,
            c.overdue
        )
    };
    let _ = writeln!(
        html,
        r#"<div class="row g-3 mb-3">{}{}</div>"#,
        card("All tasks", &stats.all),
        card(&month_title, &stats.month)
    );
}

fn render_filters(html: &mut String, q: &ListQuery) {
    let _ = writeln!(
        html,
        r#"<form method="get" action="/" class="row g-2 align-items-end mb-3">
<div class="col-md-3"><label class="form-label">Search</label>
<input class="form-control" name="search" value="{}" placeholder="summary, note or tag"></div>
<div class="col-auto"><label class="form-label">From (mm / yyyy)</label><div class="input-group">
<input class="form-control" name="from_month" size="2" value="{}">
<input class="form-control" name="from_year" size="4" value="{}"></div></div>
<div class="col-auto"><label class="form-label">To (mm / yyyy)</label><div class="input-group">
<input class="form-control" name="to_month" size="2" value="{}">
<input class="form-control" name="to_year" size="4" value="{}"></div></div>
<div class="col-auto"><label class="form-label">Report month (mm / yyyy)</label><div class="input-group">
<input class="form-control" name="stat_month" size="2" value="{}">
<input class="form-control" name="stat_year" size="4" value="{}"></div></div>
<div class="col-auto"><button class="btn btn-primary" type="submit"><i class="bi bi-funnel"></i> Apply</button>
<a class="btn btn-outline-secondary" href="/">Reset</a></div>
</form>"#,
        opt(&q.search),
        opt(&q.from_month),
        opt(&q.from_year),
        opt(&q.to_month),
        opt(&q.to_year),
        opt(&q.stat_month),
        opt(&q.stat_year),
    );
}

fn render_add_form(html: &mut String) {
    html.push_str(
        r##"<details class="mb-3"><summary class="btn btn-success"><i class="bi bi-plus-circle"></i> New task</summary>
<form method="post" action="/" class="card card-body mt-2">
<input type="hidden" name="action" value="add">
<label class="form-label">Document text</label>
<textarea class="form-control mb-2" name="van_ban" rows="6"
 placeholder="Document date: dd/mm/yyyy&#10;Reference: ...&#10;Author: ...&#10;Summary: ..."></textarea>
<div class="row g-2">
<div class="col-md-3"><input class="form-control" name="han_xu_ly" placeholder="Deadline dd/mm/yyyy"></div>
<div class="col-md-5"><input class="form-control" name="ghi_chu" placeholder="Note"></div>
<div class="col-md-3"><input class="form-control" name="hashtag" placeholder="#tags"></div>
<div class="col-md-1"><button class="btn btn-success w-100" type="submit">Add</button></div>
</div>
</form></details>
"##,
    );
}

fn action_button(html: &mut String, id: i64, action: &str, class: &str, icon: &str, title: &str) {
    let _ = write!(
        html,
        r#"<form method="post" action="/" class="d-inline">
<input type="hidden" name="action" value="{}"><input type="hidden" name="task_id" value="{}">
<button class="btn btn-sm {}" type="submit" title="{}"><i class="bi bi-{}"></i></button></form>"#,
        action, id, class, title, icon
    );
}

fn render_edit_form(html: &mut String, view: &TaskView) {
    let t = &view.task;
    let due = t.due_date.map(format_date).unwrap_or_default();
    let _ = write!(
        html,
        r##"<details class="d-inline"><summary class="btn btn-sm btn-outline-primary" title="Edit"><i class="bi bi-pencil"></i></summary>
<form method="post" action="/" class="card card-body mt-1">
<input type="hidden" name="action" value="edit"><input type="hidden" name="task_id" value="{}">
<input class="form-control form-control-sm mb-1" name="ngay_van_ban" value="{}" placeholder="Document date">
<input class="form-control form-control-sm mb-1" name="so_ky_hieu" value="{}" placeholder="Reference">
<input class="form-control form-control-sm mb-1" name="cq_ban_hanh" value="{}" placeholder="Author">
<textarea class="form-control form-control-sm mb-1" name="trich_yeu" rows="3">{}</textarea>
<input class="form-control form-control-sm mb-1" name="han_xu_ly" value="{}" placeholder="Deadline dd/mm/yyyy">
<input class="form-control form-control-sm mb-1" name="ghi_chu" value="{}" placeholder="Note">
<input class="form-control form-control-sm mb-1" name="hashtag" value="{}" placeholder="#tags">
<button class="btn btn-sm btn-primary" type="submit">Save</button>
</form></details>"##,
        t.id,
        escape(&t.document_date),
        escape(&t.reference_number),
        escape(&t.issuing_authority),
        escape(&t.summary),
        due,
        escape(&t.note),
        escape(&t.tags),
    );
}

fn render_table(html: &mut String, tasks: &[TaskView]) {
    html.push_str(
        r#"<div class="table-responsive"><table class="table table-sm table-hover align-middle bg-white">
<thead><tr><th>#</th><th>Date</th><th>Reference</th><th>Author</th><th>Summary</th>
<th>Deadline</th><th>Note</th><th>Tags</th><th>Status</th><th></th></tr></thead>
<tbody>
"#,
    );

    if tasks.is_empty() {
        html.push_str(r#"<tr><td colspan="10" class="text-center text-muted">No tasks</td></tr>"#);
    }

    for view in tasks {
        let t = &view.task;
        let due = t.due_date.map(format_date).unwrap_or_default();
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="summary">{}</td>
<td>{}</td><td>{}</td><td>{}</td>
<td><span class="badge text-bg-{}"><i class="bi bi-{}"></i> {}</span></td><td class="text-nowrap">"#,
            t.id,
            escape(&t.document_date),
            escape(&t.reference_number),
            escape(&t.issuing_authority),
            escape(&t.summary),
            due,
            escape(&t.note),
            escape(&t.tags),
            view.color,
            view.icon,
            escape(&view.status_label),
        );
        if t.completed {
            action_button(html, t.id, "undo_complete", "btn-outline-warning", "arrow-counterclockwise", "Undo");
        } else {
            action_button(html, t.id, "complete", "btn-outline-success", "check-lg", "Complete");
        }
        render_edit_form(html, view);
        action_button(html, t.id, "delete", "btn-outline-danger", "trash", "Delete");
        html.push_str("</td></tr>\n");
    }

    html.push_str("</tbody></table></div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Flash;
    use crate::task::Task;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 13).unwrap()
    }

    fn page(tasks: Vec<Task>) -> TaskPage {
        let stats = TaskStats::compute(&tasks, today(), None);
        TaskPage {
            today: today(),
            tasks: tasks.into_iter().map(|t| TaskView::new(t, today())).collect(),
            stats,
        }
    }

    fn task(summary: &str, completed: bool) -> Task {
        Task {
            id: 7,
            document_date: "01/11/2025".to_string(),
            reference_number: "5/QD".to_string(),
            issuing_authority: "Board".to_string(),
            summary: summary.to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 11, 14),
            note: String::new(),
            tags: "#q4".to_string(),
            completed,
            completed_date: completed.then(today),
        }
    }

    #[test]
    fn test_escapes_user_text() {
        let html = render_page(&page(vec![task("<script>alert('x')</script>", false)]), &ListQuery::default(), None);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_status_and_actions() {
        let html = render_page(&page(vec![task("open", false)]), &ListQuery::default(), None);
        assert!(html.contains("text-bg-warning"));
        assert!(html.contains("Due soon (1 days)"));
        assert!(html.contains(r#"value="complete""#));
        assert!(html.contains("14/11/2025"));

        let html = render_page(&page(vec![task("done", true)]), &ListQuery::default(), None);
        assert!(html.contains("bi-check-circle-fill"));
        assert!(html.contains(r#"value="undo_complete""#));
    }

    #[test]
    fn test_forms_keep_hashtag_placeholders() {
        let html = render_page(&page(vec![task("open", false)]), &ListQuery::default(), None);
        assert_eq!(html.matches(r##"placeholder="#tags""##).count(), 2);
        assert!(html.contains(r#"name="van_ban""#));
        assert!(html.contains(r##"value="#q4""##));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_flash_and_query_echo() {
        let query = ListQuery {
            search: Some("\"budget\"".to_string()),
            ..Default::default()
        };
        let html = render_page(&page(vec![]), &query, Some(&Flash::success("Task added")));
        assert!(html.contains(r#"alert-success"#));
        assert!(html.contains("Task added"));
        assert!(html.contains(r#"value="&quot;budget&quot;""#));
        assert!(html.contains("No tasks"));
    }
}
