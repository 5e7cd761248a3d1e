//! Pure filtering helpers for the visible task list.
//!
//! Nothing in here mutates a task; the store owns the collection and these
//! functions only compute views over it.

use chrono::NaiveDate;

use crate::fields::StatusFilter;
use crate::task::Task;

/// Category filter: everything, or an exact category match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => task.category == *category,
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

/// The subset of tasks passing both filters, in input order.
///
/// The two filters compose with logical AND: a task must satisfy both to be
/// visible.
pub fn compute_visible<'a>(
    tasks: &'a [Task],
    status: StatusFilter,
    category: &CategoryFilter,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| {
            let status_ok = match status {
                StatusFilter::All => true,
                StatusFilter::Pending => !t.completed,
                StatusFilter::Completed => t.completed,
            };
            status_ok && category.matches(t)
        })
        .collect()
}

/// Whether a task's due date falls within the next seven days, today
/// included. Display cue only; never affects inclusion in filtered results.
pub fn is_upcoming(task: &Task, today: NaiveDate) -> bool {
    match task.due {
        Some(due) => (0..7).contains(&(due - today).num_days()),
        None => false,
    }
}

/// Number of not-yet-completed tasks, computed over the unfiltered
/// collection regardless of any active filters.
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use chrono::Duration;

    fn task(id: u64, category: &str, completed: bool) -> Task {
        Task {
            id,
            text: format!("task {id}"),
            due: None,
            category: category.to_string(),
            priority: Priority::Medium,
            completed,
        }
    }

    fn fixture() -> Vec<Task> {
        vec![
            task(4, "home", false),
            task(3, "work", true),
            task(2, "home", true),
            task(1, "work", false),
        ]
    }

    #[test]
    fn pending_filter_keeps_uncompleted_in_order() {
        let tasks = fixture();
        let visible = compute_visible(&tasks, StatusFilter::Pending, &CategoryFilter::All);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, [4, 1]);
    }

    #[test]
    fn completed_filter_keeps_completed_only() {
        let tasks = fixture();
        let visible = compute_visible(&tasks, StatusFilter::Completed, &CategoryFilter::All);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 2]);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let tasks = fixture();
        let home = CategoryFilter::Only("home".to_string());
        let visible = compute_visible(&tasks, StatusFilter::All, &home);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, [4, 2]);

        let none = CategoryFilter::Only("errands".to_string());
        assert!(compute_visible(&tasks, StatusFilter::All, &none).is_empty());
    }

    #[test]
    fn status_and_category_compose_with_and() {
        let tasks = fixture();
        let home = CategoryFilter::Only("home".to_string());
        let visible = compute_visible(&tasks, StatusFilter::Pending, &home);
        let ids: Vec<u64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, [4]);
    }

    #[test]
    fn all_all_returns_everything() {
        let tasks = fixture();
        let visible = compute_visible(&tasks, StatusFilter::All, &CategoryFilter::All);
        assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn category_filter_from_option() {
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from(Some("home".to_string())),
            CategoryFilter::Only("home".to_string())
        );
    }

    #[test]
    fn upcoming_window_is_today_through_six_days_out() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let mut t = task(1, "home", false);

        t.due = Some(today);
        assert!(is_upcoming(&t, today));

        t.due = Some(today + Duration::days(6));
        assert!(is_upcoming(&t, today));

        t.due = Some(today + Duration::days(7));
        assert!(!is_upcoming(&t, today));

        t.due = Some(today - Duration::days(1));
        assert!(!is_upcoming(&t, today));

        t.due = None;
        assert!(!is_upcoming(&t, today));
    }

    #[test]
    fn pending_count_ignores_filters() {
        let tasks = fixture();
        let completed = tasks.iter().filter(|t| t.completed).count();
        assert_eq!(pending_count(&tasks), tasks.len() - completed);
    }
}
