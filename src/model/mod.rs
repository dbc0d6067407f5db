mod admin_config;
mod paths;
mod registry;
mod year_template;

pub use admin_config::{AcademicYear, AdminConfig, FieldTemplate, FieldTypeDef, TemplateCategory};
pub use paths::{
    year_template_path, CONFIG_PATH, DEPT_GROUPING_PATH, DEPT_MASTER_PATH, YEAR_TEMPLATES_BASE,
};
pub use registry::{College, DeptRecord, Registry};
pub use year_template::YearTemplate;
