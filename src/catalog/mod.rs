//! Built-in field catalog for internship records.
//!
//! These definitions ship with the system and are not editable: the core
//! record fields, the locked template categories they live in, the default
//! field types, and the column order of the consolidated report.

/// Spec for one built-in record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub order: u32,
    pub example: &'static str,
    /// Semantic type key for fields resolved through the registry
    /// (`"college"` / `"department"`); `None` means plain text.
    pub field_type: Option<&'static str>,
}

pub const SYSTEM_FIELDS: &[SystemField] = &[
    SystemField { id: "school_year", label: "學年", required: false, order: 1, example: "114", field_type: None },
    SystemField { id: "semester", label: "學期", required: false, order: 2, example: "1", field_type: None },
    SystemField { id: "student_id", label: "學號", required: true, order: 3, example: "12345678", field_type: None },
    SystemField { id: "student_name", label: "姓名", required: false, order: 4, example: "王小明", field_type: None },
    SystemField { id: "student_college", label: "學院", required: false, order: 5, example: "管理學院", field_type: Some("college") },
    SystemField { id: "student_dept", label: "學生所屬學系", required: true, order: 6, example: "資管系", field_type: Some("department") },
    SystemField { id: "course_id", label: "選課代號", required: false, order: 7, example: "8099", field_type: None },
    SystemField { id: "course_name", label: "課程名稱", required: false, order: 8, example: "校外實習", field_type: None },
    SystemField { id: "internship_attr", label: "實習課程屬性", required: false, order: 9, example: "必選", field_type: None },
    SystemField { id: "internship_credit", label: "實習學分數", required: false, order: 10, example: "3", field_type: None },
    SystemField { id: "course_system", label: "開課學制", required: false, order: 11, example: "日間部", field_type: None },
    SystemField { id: "course_college", label: "開課學院", required: false, order: 12, example: "管理學院", field_type: Some("college") },
    SystemField { id: "course_dept", label: "開課學系", required: true, order: 13, example: "國貿系", field_type: Some("department") },
    SystemField { id: "student_grade", label: "學生年級", required: false, order: 14, example: "四年級", field_type: None },
    SystemField { id: "student_gender", label: "性別", required: false, order: 15, example: "男", field_type: None },
    SystemField { id: "student_nationality", label: "實習生國籍", required: false, order: 16, example: "中華民國", field_type: None },
];

/// Fields that must be mapped before a roster can be consolidated.
pub const MANDATORY_FIELD_IDS: &[&str] = &["course_dept", "student_dept", "student_id"];

/// A template category shipped with the system, locked against editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCategory {
    pub id: &'static str,
    pub name: &'static str,
    /// Negative so system categories sort ahead of user-defined ones.
    pub order: i32,
}

pub const SYSTEM_CATEGORIES: &[SystemCategory] = &[
    SystemCategory { id: "sys_course_info", name: "【系統】開課資訊", order: -2 },
    SystemCategory { id: "sys_student_info", name: "【系統】學生資訊", order: -1 },
];

/// Whether fields of this category may appear in a column mapping.
pub fn is_mapping_category(category_id: &str) -> bool {
    SYSTEM_CATEGORIES.iter().any(|c| c.id == category_id)
}

/// A default field type offered by the template editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeSpec {
    pub key: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_FIELD_TYPES: &[FieldTypeSpec] = &[
    FieldTypeSpec { key: "text", label: "文字" },
    FieldTypeSpec { key: "number", label: "數字" },
    FieldTypeSpec { key: "date", label: "日期" },
    FieldTypeSpec { key: "single_select", label: "單選" },
    FieldTypeSpec { key: "list", label: "條列式" },
    FieldTypeSpec { key: "address", label: "地址" },
    FieldTypeSpec { key: "college", label: "學院" },
    FieldTypeSpec { key: "department", label: "學系" },
];

/// One column of the consolidated report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColumn {
    pub id: &'static str,
    pub label: &'static str,
}

pub const OUTPUT_COLUMNS: &[DisplayColumn] = &[
    DisplayColumn { id: "student_id", label: "學號" },
    DisplayColumn { id: "student_name", label: "姓名" },
    DisplayColumn { id: "semester", label: "學期" },
    DisplayColumn { id: "course_college", label: "開課學院" },
    DisplayColumn { id: "course_dept", label: "開課學系" },
    DisplayColumn { id: "course_id", label: "選課代號" },
    DisplayColumn { id: "course_name", label: "課程名稱" },
    DisplayColumn { id: "internship_attr", label: "實習課程屬性" },
    DisplayColumn { id: "internship_credit", label: "實習學分數" },
    DisplayColumn { id: "student_college", label: "學院" },
    DisplayColumn { id: "student_dept", label: "學生所屬學系" },
];

/// Look up a built-in field by id.
pub fn system_field(id: &str) -> Option<&'static SystemField> {
    SYSTEM_FIELDS.iter().find(|f| f.id == id)
}

/// Trim an untrusted cell value; absent values become empty.
pub fn clean_input(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
