//! 应用主入口：参数解析与逐路径统计

use crate::model::Summary;
use crate::options::Options;
use crate::report::Reporter;
use crate::size::format_size;
use std::path::Path;

pub mod error;
pub mod model;
pub mod options;
pub mod path;
pub mod report;
pub mod scan;
pub mod size;
pub mod theme;

pub use error::Error;

/// 应用容器，持有解析后的选项
pub struct App {
    options: Options,
}

impl App {
    /// 解析命令行参数（不含程序名）并初始化应用
    pub fn from_args<I, S, R>(args: I, reporter: &mut R) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Reporter + ?Sized,
    {
        let options = Options::parse(args, reporter)?;
        log::debug!("parsed options: {options:?}");
        Ok(Self { options })
    }

    /// 逐个统计工作路径并输出汇总
    ///
    /// 路径按命令行顺序处理，汇总顺序与之相同。静默模式下不输出任何内容。
    pub fn run<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<Summary, Error> {
        let opts = &self.options;

        if opts.work_paths.is_empty() {
            if !opts.silent {
                reporter.error("No work paths were specified.");
            }
            return Err(Error::NoWorkPaths);
        }
        if !opts.silent {
            reporter.info(&format!("Working with {} work paths", opts.work_paths.len()));
        }

        let mut summary = Summary::default();
        for path in &opts.work_paths {
            let total = scan::scan(opts, &mut *reporter, Path::new(path));
            let size = format_size(total, opts.size_suffixes);
            summary.push(path.as_str(), total, size);

            if !opts.silent {
                reporter.size(size, path);
            }
        }

        if !opts.silent {
            reporter.info("Summary:");
            for entry in summary.entries() {
                reporter.size(entry.size(), entry.path());
            }
        }

        Ok(summary)
    }
}
