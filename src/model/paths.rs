//! Well-known document paths in the backing repository.

pub const CONFIG_PATH: &str = "hedb/config.json";
pub const DEPT_GROUPING_PATH: &str = "hedb/data_departments.json";
pub const DEPT_MASTER_PATH: &str = "hedb/data_dept_master.json";
pub const YEAR_TEMPLATES_BASE: &str = "hedb/year_templates";

/// Path of the field-template document for one academic year.
pub fn year_template_path(year: &str) -> String {
    format!("{YEAR_TEMPLATES_BASE}/year_{year}_templates.json")
}
