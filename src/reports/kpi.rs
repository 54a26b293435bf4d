use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::task::{TaskRecord, TaskStatus};

/// Scalar performance indicators over a filtered task collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Mean of `completed_on - due_on` in days over completed tasks,
    /// signed: negative means early completion. 0 when none are completed.
    pub average_completion_days: f64,
    /// `ceil(task count / distinct assignees)`; 0 for an empty input.
    pub tasks_per_employee: i64,
    /// Percentage of tasks completed on or before their due date.
    pub on_time_rate: f64,
    /// Percentage of tasks completed after their due date.
    pub overdue_rate: f64,
}

/// Computes the KPI summary. Never errors; an empty input yields zeros.
///
/// Open tasks count toward neither percentage numerator but do count toward
/// the denominator, so `on_time_rate + overdue_rate` need not reach 100.
pub fn summarize(tasks: &[TaskRecord]) -> KpiSummary {
    if tasks.is_empty() {
        return KpiSummary::default();
    }

    let completion_days: Vec<i64> = tasks
        .iter()
        .filter_map(|t| {
            t.completed_on
                .map(|done| done.signed_duration_since(t.due_on).num_days())
        })
        .collect();
    let average_completion_days = if completion_days.is_empty() {
        0.0
    } else {
        completion_days.iter().sum::<i64>() as f64 / completion_days.len() as f64
    };

    let assignees: HashSet<Uuid> = tasks.iter().map(|t| t.assignee_id).collect();
    let tasks_per_employee = tasks.len().div_ceil(assignees.len()) as i64;

    let on_time = tasks
        .iter()
        .filter(|t| t.completed_on.is_some_and(|done| done <= t.due_on))
        .count();
    let overdue = tasks
        .iter()
        .filter(|t| t.completed_on.is_some_and(|done| done > t.due_on))
        .count();

    KpiSummary {
        average_completion_days,
        tasks_per_employee,
        on_time_rate: 100.0 * on_time as f64 / tasks.len() as f64,
        overdue_rate: 100.0 * overdue as f64 / tasks.len() as f64,
    }
}

/// Count of tasks per derived status for the given reporting day.
pub fn status_breakdown(tasks: &[TaskRecord], today: NaiveDate) -> HashMap<TaskStatus, i64> {
    let mut counts = HashMap::new();
    for task in tasks {
        *counts.entry(task.status(today)).or_insert(0) += 1;
    }
    counts
}

/// Task count per assignee, busiest first; ties break on the assignee id so
/// the ordering is reproducible.
pub fn assignee_breakdown(tasks: &[TaskRecord]) -> Vec<(Uuid, i64)> {
    let mut counts: HashMap<Uuid, i64> = HashMap::new();
    for task in tasks {
        *counts.entry(task.assignee_id).or_insert(0) += 1;
    }
    let mut ranked: Vec<(Uuid, i64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
