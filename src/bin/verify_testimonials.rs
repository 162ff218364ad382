//! folio-verify 入口：对本地站点做一次视觉验证
//!
//! 导航 / 元素定位失败是可恢复情形：记录后正常退出，不以退出码区分
//! （浏览器会话的回收在 verify::run 内部保证）。需要另行启动开发服务器。

use anyhow::Context;
use folio::config::load_config;
use folio::verify;

fn main() -> anyhow::Result<()> {
    folio::observability::init();

    let cfg = load_config(None).context("Failed to load config")?;

    match verify::run(&cfg.verify) {
        Ok(report) => {
            println!(
                "Found {} quotes elements (some might be hidden/sr-only parts)",
                report.quotes.len()
            );
            for (i, text) in report.quotes.iter().enumerate() {
                println!("Quote {} text: '{}'", i, text);
            }
            println!("Verification script finished.");
        }
        Err(e) => {
            tracing::error!(error = %e, "verification run failed");
            println!("Error: {}", e);
        }
    }

    Ok(())
}
