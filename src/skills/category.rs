//! 类目映射：源分类学 -> 目标分类学
//!
//! 固定查表，进程生命周期内不变；未收录的源类目一律落到 "Other"。

/// 未知源类目的回落值
pub const FALLBACK_CATEGORY: &str = "Other";

/// 把源文档的类目名映射为目标文档的类目名
pub fn map_category(source: &str) -> &'static str {
    match source {
        "Programming & Languages" => "Languages",
        // 也可归 Backend，沿用数据录入时的取舍
        "Frameworks & Libraries" => "Frontend",
        "Tools & Platforms" => "DevOps",
        "CMS Platforms" => "Backend",
        "Development Practices" => "Practices",
        "Systems & Infrastructure" => "DevOps",
        "Soft Skills & Work Ethic" => "Soft Skills",
        _ => FALLBACK_CATEGORY,
    }
}
