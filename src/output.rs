//! CLI progress output.
//!
//! ```text
//! 开始生成文件树索引...
//! --------------------------------------------------
//! 根目录: /srv/files
//! 已生成: /srv/files/index.html
//! 已生成: /srv/files/docs/index.html
//! --------------------------------------------------
//! 完成！
//! 生成了 2 个目录的索引页面
//! 共索引了 7 个文件
//!
//! 打开 /srv/files/index.html 查看首页
//! ```
//!
//! Each block has a `format_*` function (pure, returns lines) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::config::INDEX_FILE;
use crate::generate::GeneratedPage;
use crate::walk::WalkSummary;
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Banner printed before the walk starts.
pub fn format_start(root: &Path) -> Vec<String> {
    vec![
        "开始生成文件树索引...".to_string(),
        rule(),
        format!("根目录: {}", root.display()),
    ]
}

/// One line per written page.
pub fn format_written(page: &GeneratedPage) -> String {
    format!("已生成: {}", page.path.display())
}

/// Totals printed after the walk completes.
pub fn format_summary(summary: &WalkSummary, root: &Path) -> Vec<String> {
    vec![
        rule(),
        "完成！".to_string(),
        format!("生成了 {} 个目录的索引页面", summary.directories),
        format!("共索引了 {} 个文件", summary.files),
        String::new(),
        format!("打开 {} 查看首页", root.join(INDEX_FILE).display()),
    ]
}

pub fn print_start(root: &Path) {
    for line in format_start(root) {
        println!("{}", line);
    }
}

pub fn print_written(page: &GeneratedPage) {
    println!("{}", format_written(page));
}

pub fn print_summary(summary: &WalkSummary, root: &Path) {
    for line in format_summary(summary, root) {
        println!("{}", line);
    }
}
