//! 合并引擎：读取两份文档，追加缺失技能后按 4 空格缩进写回
//!
//! 幂等：已收录（大小写不敏感）的名字直接跳过，第二次运行零新增。
//! 目标文档中与技能列表无关的内容原样往返；已有记录只追加不改写。
//! 无事务保证：写回途中崩溃可能留下残缺文件，该工具按手工重跑使用。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::MergeSection;
use crate::skills::category::map_category;
use crate::skills::record::SkillRecord;

/// 合并过程中的致命错误（无部分成功模式，任何失败直接退出）
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Document read failed: {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document parse error: {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed destination document: missing Home.SkillsSection.List")]
    MissingSkillList,

    #[error("Malformed source document: expected an object of category -> skill names")]
    MalformedSource,

    #[error("Write failed: {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 一次合并的结果：按追加顺序记录 (技能名, 解析后的类目)
#[derive(Debug, Default)]
pub struct MergeReport {
    pub added: Vec<(String, String)>,
}

impl MergeReport {
    /// 实际追加到目标文档的记录数
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// 技能合并器：目标/源文档路径来自 [merge] 配置段
pub struct SkillMerger {
    destination: PathBuf,
    source: PathBuf,
}

impl SkillMerger {
    pub fn new(cfg: &MergeSection) -> Self {
        Self {
            destination: cfg.destination.clone(),
            source: cfg.source.clone(),
        }
    }

    /// 执行合并并原地写回目标文档，返回新增记录清单
    pub fn merge(&self) -> Result<MergeReport, MergeError> {
        let mut dest_doc = read_document(&self.destination)?;
        let source_doc = read_document(&self.source)?;
        let categories = source_doc.as_object().ok_or(MergeError::MalformedSource)?;

        let list = skill_list_mut(&mut dest_doc)?;

        // 大小写不敏感的已收录名字集合
        let mut existing: HashSet<String> = list
            .iter()
            .filter_map(|record| record.get("name").and_then(Value::as_str))
            .map(str::to_lowercase)
            .collect();

        let mut report = MergeReport::default();
        for (source_cat, names) in categories {
            let target_cat = map_category(source_cat);
            for name in names.as_array().into_iter().flatten() {
                let Some(name) = name.as_str() else { continue };
                let key = name.to_lowercase();
                if existing.contains(&key) {
                    continue;
                }

                list.push(json!(SkillRecord::synthesized(name, target_cat)));
                existing.insert(key);
                report.added.push((name.to_string(), target_cat.to_string()));
                tracing::info!(skill = %name, category = %target_cat, "skill appended");
            }
        }

        write_document(&self.destination, &dest_doc)?;
        Ok(report)
    }
}

fn read_document(path: &Path) -> Result<Value, MergeError> {
    let data = std::fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| MergeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 定位目标文档里的技能列表；固定嵌套路径缺失即视为目标文档损坏
fn skill_list_mut(doc: &mut Value) -> Result<&mut Vec<Value>, MergeError> {
    doc.get_mut("Home")
        .and_then(|v| v.get_mut("SkillsSection"))
        .and_then(|v| v.get_mut("List"))
        .and_then(Value::as_array_mut)
        .ok_or(MergeError::MissingSkillList)
}

/// 按 4 空格缩进写回（与站点内容文件的既有排版一致）
fn write_document(path: &Path, doc: &Value) -> Result<(), MergeError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser).map_err(|e| MergeError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;
    std::fs::write(path, buf).map_err(|source| MergeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
