//! folio-merge 入口：合并技能清单后原地写回目标文档
//!
//! 任何解析 / IO 失败都是致命错误：非零退出并在诊断流输出原因。

use anyhow::Context;
use folio::config::load_config;
use folio::skills::SkillMerger;

fn main() -> anyhow::Result<()> {
    folio::observability::init();

    let cfg = load_config(None).context("Failed to load config")?;
    let report = SkillMerger::new(&cfg.merge)
        .merge()
        .context("Skill merge failed")?;

    for (name, category) in &report.added {
        println!("Added: {} ({})", name, category);
    }
    println!("\nSuccessfully merged {} new skills.", report.added_count());

    Ok(())
}
