//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `FOLIO__*` 覆盖（双下划线表示嵌套，
//! 如 `FOLIO__VERIFY__URL=http://localhost:3001`）。所有字段都有默认值，
//! 缺少配置文件时行为与早期硬编码常量一致。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub merge: MergeSection,
    pub verify: VerifySection,
}

/// [merge] 段：技能合并的目标/源文档路径
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MergeSection {
    /// 目标文档（站点 i18n 消息文件，含 Home.SkillsSection.List）
    pub destination: PathBuf,
    /// 源文档（类目名 -> 技能名数组）
    pub source: PathBuf,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            destination: PathBuf::from("website/messages/en.json"),
            source: PathBuf::from("assets/skillsSection/TechStackAndSkills_en.json"),
        }
    }
}

/// [verify] 段：视觉验证的目标地址与产物路径
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifySection {
    /// 本地开发服务器地址（需另行启动）
    pub url: String,
    /// 截图输出路径（已存在时直接覆盖）
    pub screenshot: PathBuf,
    /// 打字机动画的固定等待时长（毫秒）
    pub settle_ms: u64,
}

impl Default for VerifySection {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
            screenshot: PathBuf::from("verification_testimonials.png"),
            settle_ms: 2000,
        }
    }
}

/// 加载配置：TOML（多个候选位置取第一个存在的）+ FOLIO__ 环境变量覆盖
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("FOLIO")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
