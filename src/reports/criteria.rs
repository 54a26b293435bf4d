use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::errors::NoDataError;
use crate::models::product::ProductStockRecord;
use crate::models::task::{Priority, TaskRecord, TaskStatus};
use crate::reports::period::DateRange;

/// Accepted values per filter dimension.
///
/// An empty set means "no restriction on that dimension" — the load-bearing
/// convention every report screen relies on, not an accidental default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaSelection {
    #[serde(default)]
    pub departments: HashSet<String>,
    #[serde(default)]
    pub categories: HashSet<String>,
    #[serde(default)]
    pub priorities: HashSet<Priority>,
    #[serde(default)]
    pub statuses: HashSet<TaskStatus>,
}

impl CriteriaSelection {
    pub fn is_unrestricted(&self) -> bool {
        self.departments.is_empty()
            && self.categories.is_empty()
            && self.priorities.is_empty()
            && self.statuses.is_empty()
    }

    /// One human-readable line per task dimension, "All" when unrestricted.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            dimension_line("Department", &self.departments),
            dimension_line("Category", &self.categories),
            dimension_line("Priority", &self.priorities),
            dimension_line("Status", &self.statuses),
        ]
    }

    /// The category line alone, for product reports where the other
    /// dimensions do not apply.
    pub fn category_line(&self) -> String {
        dimension_line("Category", &self.categories)
    }
}

fn dimension_line<T: fmt::Display>(label: &str, values: &HashSet<T>) -> String {
    if values.is_empty() {
        return format!("{}: All", label);
    }
    let mut items: Vec<String> = values.iter().map(ToString::to_string).collect();
    items.sort();
    format!("{}: {}", label, items.join(", "))
}

/// Narrows a task collection through the dimension filters and the date
/// window, in that fixed order.
///
/// Each stage consumes the previous stage's survivors. The stages are
/// independent conjunctive predicates, so their order cannot change the
/// result set; it is fixed for determinism and ease of testing. Surviving
/// records keep their original relative order.
pub fn filter_tasks(
    records: &[TaskRecord],
    window: &DateRange,
    criteria: &CriteriaSelection,
    today: NaiveDate,
) -> Result<Vec<TaskRecord>, NoDataError> {
    if records.is_empty() {
        return Err(NoDataError::EmptyInput);
    }

    let mut survivors: Vec<TaskRecord> = records.to_vec();
    survivors.retain(|t| {
        criteria.departments.is_empty() || criteria.departments.contains(&t.department)
    });
    survivors
        .retain(|t| criteria.categories.is_empty() || criteria.categories.contains(&t.category));
    // A task with no priority is excluded by any non-empty priority filter,
    // not vacuously included.
    survivors.retain(|t| {
        criteria.priorities.is_empty()
            || t.priority.is_some_and(|p| criteria.priorities.contains(&p))
    });
    survivors
        .retain(|t| criteria.statuses.is_empty() || criteria.statuses.contains(&t.status(today)));
    debug!(
        input = records.len(),
        after_dimensions = survivors.len(),
        "applied dimension filters"
    );

    survivors.retain(|t| window.contains(t.effective_date()));

    if survivors.is_empty() {
        return Err(NoDataError::EmptyResult);
    }
    Ok(survivors)
}

/// Product records carry a single filter dimension (category) and no dates,
/// so only that stage and the empty-data checks apply.
pub fn filter_products(
    records: &[ProductStockRecord],
    criteria: &CriteriaSelection,
) -> Result<Vec<ProductStockRecord>, NoDataError> {
    if records.is_empty() {
        return Err(NoDataError::EmptyInput);
    }

    let mut survivors: Vec<ProductStockRecord> = records.to_vec();
    survivors
        .retain(|p| criteria.categories.is_empty() || criteria.categories.contains(&p.category));

    if survivors.is_empty() {
        return Err(NoDataError::EmptyResult);
    }
    Ok(survivors)
}
