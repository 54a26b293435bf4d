use chrono::Utc;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use validator::Validate;

use crate::config::ReportParameters;
use crate::errors::ReportError;
use crate::models::product::ProductStockRecord;
use crate::models::task::{TaskRecord, TaskStatus};
use crate::reports::categories::{self, CategoryStats};
use crate::reports::criteria::{filter_products, filter_tasks, CriteriaSelection};
use crate::reports::document::{assemble, Document, Table};
use crate::reports::kpi;
use crate::reports::period::DateRange;

/// Service for generating the back-office reports.
///
/// The service itself is stateless; everything a call needs arrives in the
/// record collections and the immutable [`ReportParameters`], so concurrent
/// calls cannot observe each other's configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Generates the statistics report: KPI summary, tasks by status, and
    /// tasks per assignee over the filtered period.
    #[instrument(skip(self, tasks), fields(records = tasks.len()))]
    pub fn generate_statistics_report(
        &self,
        tasks: &[TaskRecord],
        params: &ReportParameters,
    ) -> Result<Document, ReportError> {
        params.validate()?;
        let today = Utc::now().date_naive();
        let window = params.period.resolve(params.reference_date, today);
        let tasks = filter_tasks(tasks, &window, &params.criteria, today)?;

        let summary = kpi::summarize(&tasks);
        let mut kpi_table = Table::new("Key Performance Indicators", &["Indicator", "Value"]);
        kpi_table.push_row(vec![
            "Average completion time (days)".to_string(),
            format!("{:.1}", summary.average_completion_days),
        ]);
        kpi_table.push_row(vec![
            "Tasks per employee".to_string(),
            summary.tasks_per_employee.to_string(),
        ]);
        kpi_table.push_row(vec![
            "On-time completions".to_string(),
            format!("{:.1}%", summary.on_time_rate),
        ]);
        kpi_table.push_row(vec![
            "Overdue completions".to_string(),
            format!("{:.1}%", summary.overdue_rate),
        ]);

        let counts = kpi::status_breakdown(&tasks, today);
        let mut status_table = Table::new("Tasks by Status", &["Status", "Count"]);
        for status in TaskStatus::iter() {
            let count = counts.get(&status).copied().unwrap_or(0);
            status_table.push_row(vec![status.to_string(), count.to_string()]);
        }

        let mut assignee_table = Table::new("Tasks per Assignee", &["Assignee", "Count"]);
        for (assignee, count) in kpi::assignee_breakdown(&tasks) {
            assignee_table.push_row(vec![assignee.to_string(), count.to_string()]);
        }

        let document = assemble(
            "Statistics Report",
            task_filter_lines(&window, &params.criteria),
            vec![kpi_table, status_table, assignee_table],
        )?;
        info!(
            tasks = tasks.len(),
            on_time_rate = summary.on_time_rate,
            overdue_rate = summary.overdue_rate,
            "generated statistics report"
        );
        Ok(document)
    }

    /// Generates the task-completion report: the filtered tasks with their
    /// derived lifecycle status.
    #[instrument(skip(self, tasks), fields(records = tasks.len()))]
    pub fn generate_task_report(
        &self,
        tasks: &[TaskRecord],
        params: &ReportParameters,
    ) -> Result<Document, ReportError> {
        params.validate()?;
        let today = Utc::now().date_naive();
        let window = params.period.resolve(params.reference_date, today);
        let tasks = filter_tasks(tasks, &window, &params.criteria, today)?;

        let mut table = Table::new(
            "Tasks",
            &[
                "Name",
                "Department",
                "Category",
                "Priority",
                "Assignee",
                "Due",
                "Completed",
                "Status",
            ],
        );
        for task in &tasks {
            table.push_row(vec![
                task.name.clone(),
                task.department.clone(),
                task.category.clone(),
                task.priority
                    .map_or_else(|| "-".to_string(), |p| p.to_string()),
                task.assignee_id.to_string(),
                task.due_on.to_string(),
                task.completed_on
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
                task.status(today).to_string(),
            ]);
        }

        let document = assemble(
            "Task Completion Report",
            task_filter_lines(&window, &params.criteria),
            vec![table],
        )?;
        info!(tasks = tasks.len(), "generated task completion report");
        Ok(document)
    }

    /// Generates the warehouse report: per-category stock aggregates with a
    /// totals row, low-stock lines at the configured threshold, and an
    /// out-of-stock table when anything has run dry.
    #[instrument(skip(self, products), fields(records = products.len()))]
    pub fn generate_warehouse_report(
        &self,
        products: &[ProductStockRecord],
        params: &ReportParameters,
    ) -> Result<Document, ReportError> {
        params.validate()?;
        let products = filter_products(products, &params.criteria)?;

        let stats = categories::aggregate(&products);
        let mut ranked: Vec<&CategoryStats> = stats.values().collect();
        ranked.sort_by(|a, b| a.category.cmp(&b.category));

        let mut category_table = Table::new(
            "Stock by Category",
            &["Category", "Products", "Quantity", "Value"],
        );
        for entry in &ranked {
            category_table.push_row(vec![
                entry.category.clone(),
                entry.product_count.to_string(),
                entry.total_quantity.to_string(),
                entry.total_value.round_dp(2).to_string(),
            ]);
        }
        category_table.push_row(vec![
            "Total".to_string(),
            ranked
                .iter()
                .map(|e| e.product_count)
                .sum::<i64>()
                .to_string(),
            ranked
                .iter()
                .map(|e| e.total_quantity)
                .sum::<i64>()
                .to_string(),
            ranked
                .iter()
                .map(|e| e.total_value)
                .sum::<rust_decimal::Decimal>()
                .round_dp(2)
                .to_string(),
        ]);

        let low = categories::low_stock(&products, params.low_stock_threshold)?;
        let mut low_table = Table::new("Low Stock", &["Product", "Category", "Quantity"]);
        for product in &low {
            low_table.push_row(vec![
                product.name.clone(),
                product.category.clone(),
                product.quantity.to_string(),
            ]);
        }

        let mut tables = vec![category_table, low_table];
        let dry = categories::out_of_stock(&products);
        if !dry.is_empty() {
            let mut dry_table = Table::new("Out of Stock", &["Product", "Category"]);
            for product in &dry {
                dry_table.push_row(vec![product.name.clone(), product.category.clone()]);
            }
            tables.push(dry_table);
        }

        let document = assemble(
            "Warehouse Report",
            vec![params.criteria.category_line()],
            tables,
        )?;
        info!(
            products = products.len(),
            categories = ranked.len(),
            low_stock = low.len(),
            "generated warehouse report"
        );
        Ok(document)
    }
}

/// Period line plus one line per task filter dimension.
fn task_filter_lines(window: &DateRange, criteria: &CriteriaSelection) -> Vec<String> {
    let mut lines = vec![format!("Period: {} to {}", window.start, window.end)];
    lines.extend(criteria.summary_lines());
    lines
}
