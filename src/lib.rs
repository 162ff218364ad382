//! Folio - 个人作品集网站运维工具集
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **observability**: 日志初始化
//! - **skills**: 技能清单合并（两份内容文件之间的集合差合并）
//! - **verify**: 视觉验证（Headless Chrome 截图 Testimonials 区块）

pub mod config;
pub mod observability;
pub mod skills;
#[cfg(feature = "browser")]
pub mod verify;
