pub mod categories;
pub mod criteria;
pub mod document;
pub mod kpi;
pub mod period;
