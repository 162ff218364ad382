//! 技能记录：目标文档 List 中的单条数据

use serde::{Deserialize, Serialize};

/// 合成记录的默认图标（tabler 图标 token）
pub const DEFAULT_ICON: &str = "tabler:circle-check";

/// 合成记录的默认使用年限
pub const DEFAULT_YEARS: u64 = 1;

/// 合成记录的默认熟练度（0-100）
pub const DEFAULT_PROFICIENCY: u64 = 50;

/// 目标文档中的一条技能记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub icon: String,
    pub category: String,
    pub years: u64,
    pub proficiency: u64,
}

impl SkillRecord {
    /// 按默认元数据合成一条新记录（源文档只有名字，没有展示元数据）
    pub fn synthesized(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: DEFAULT_ICON.to_string(),
            category: category.to_string(),
            years: DEFAULT_YEARS,
            proficiency: DEFAULT_PROFICIENCY,
        }
    }
}
