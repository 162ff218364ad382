//! 视觉验证：Headless Chrome 截图 Testimonials 区块
//!
//! 打开本地站点，把 "Testimonials" 标题滚动进视口，固定等待打字机
//! 动画推进后整页截图，并枚举所有引用块文本供人工核对。脚本本身
//! 不做任何断言：哪个引用块该有可见文本、哪个只剩光标，由人看图判断。
//!
//! 固定等待不保证动画到达任何特定状态，只保证它有一个有界的推进窗口。

use std::path::PathBuf;
use std::time::Duration;

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::Browser;
use thiserror::Error;

use crate::config::VerifySection;

/// 要定位的区块标题（按可访问名称匹配）
pub const HEADING_NAME: &str = "Testimonials";

/// 引用块内部承载文本的 span（打字机组件的 aria-hidden 文本节点）
pub const QUOTE_SELECTOR: &str = "blockquote span[aria-hidden='true']";

/// 验证过程中的可恢复错误：入口程序统一捕获并记录，不影响浏览器回收
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Chrome launch failed: {0}")]
    Launch(String),

    #[error("Navigate failed: {0}")]
    Navigation(String),

    #[error("Heading \"{0}\" not found")]
    HeadingNotFound(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),
}

/// 一次验证运行的产出（供入口程序打印诊断清单）
#[derive(Debug)]
pub struct VerifyReport {
    pub screenshot: PathBuf,
    pub quotes: Vec<String>,
}

/// 执行完整验证流程
///
/// Browser 在本函数作用域内持有：无论 capture 哪一步失败，
/// 返回前都会随 Drop 回收 Chrome 进程。
pub fn run(cfg: &VerifySection) -> Result<VerifyReport, VerifyError> {
    let browser = Browser::default().map_err(|e| VerifyError::Launch(e.to_string()))?;
    capture(&browser, cfg)
}

/// 导航 -> 定位标题 -> 固定等待 -> 截图 -> 枚举引用块
fn capture(browser: &Browser, cfg: &VerifySection) -> Result<VerifyReport, VerifyError> {
    let tab = browser
        .new_tab()
        .map_err(|e| VerifyError::Navigation(e.to_string()))?;

    tracing::info!(url = %cfg.url, "navigating to home page");
    tab.navigate_to(&cfg.url)
        .map_err(|e| VerifyError::Navigation(e.to_string()))?;
    tab.wait_for_element("body")
        .map_err(|e| VerifyError::Navigation(e.to_string()))?;

    tracing::info!(heading = HEADING_NAME, "waiting for testimonials section");
    let heading = tab
        .wait_for_xpath(&heading_xpath(HEADING_NAME))
        .map_err(|_| VerifyError::HeadingNotFound(HEADING_NAME.to_string()))?;
    heading
        .scroll_into_view()
        .map_err(|e| VerifyError::Navigation(e.to_string()))?;

    // 固定等待，让打字机动画有机会推进（刻意不做条件轮询）
    tracing::info!(settle_ms = cfg.settle_ms, "waiting for typewriter effect");
    std::thread::sleep(Duration::from_millis(cfg.settle_ms));

    tracing::info!(path = %cfg.screenshot.display(), "taking screenshot");
    let png = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| VerifyError::Screenshot(e.to_string()))?;
    std::fs::write(&cfg.screenshot, png).map_err(|e| VerifyError::Screenshot(e.to_string()))?;

    // 引用块枚举是纯诊断输出，找不到任何元素不算失败
    let quotes = tab
        .find_elements(QUOTE_SELECTOR)
        .map(|els| {
            els.iter()
                .map(|el| el.get_inner_text().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    Ok(VerifyReport {
        screenshot: cfg.screenshot.clone(),
        quotes,
    })
}

/// 按可访问名称匹配 h1~h6 标题的 XPath（整体文本匹配，忽略首尾空白）
pub fn heading_xpath(name: &str) -> String {
    format!(
        "//*[self::h1 or self::h2 or self::h3 or self::h4 or self::h5 or self::h6]\
         [normalize-space(.)='{}']",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_xpath_covers_all_heading_levels() {
        let xpath = heading_xpath(HEADING_NAME);
        for level in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert!(xpath.contains(&format!("self::{}", level)));
        }
        assert!(xpath.contains("normalize-space(.)='Testimonials'"));
    }

    #[test]
    fn test_error_messages_name_the_stage() {
        let err = VerifyError::HeadingNotFound(HEADING_NAME.to_string());
        assert_eq!(err.to_string(), "Heading \"Testimonials\" not found");
        let err = VerifyError::Navigation("net::ERR_CONNECTION_REFUSED".to_string());
        assert!(err.to_string().starts_with("Navigate failed:"));
    }
}
