//! 技能清单合并
//!
//! 在两份内容文件之间做集合差合并：源文档（类目 -> 技能名数组）中
//! 目标文档尚未收录的技能，按默认元数据合成完整记录后追加并写回。
//! 名字大小写不敏感去重，已有记录的顺序与内容原样保留。

pub mod category;
pub mod merge;
pub mod record;

pub use category::{map_category, FALLBACK_CATEGORY};
pub use merge::{MergeError, MergeReport, SkillMerger};
pub use record::SkillRecord;
