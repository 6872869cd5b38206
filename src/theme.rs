//! 主题配置模块

use std::env;
use std::fs;
use std::path::Path;

use crossterm::style;
use serde::{Deserialize, Serialize};

/// 主题文件路径的环境变量
pub const THEME_ENV: &str = "PATHSIZE_THEME";

/// 主题配置，缺失字段使用默认值
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub info: Color,
    pub warning: Color,
    pub error: Color,
    pub size: Color,
}

/// 颜色配置（预设或RGB）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Preset { name: String },
    RGB { r: u8, g: u8, b: u8 },
}

impl Color {
    fn preset(name: &str) -> Self {
        Color::Preset {
            name: name.to_string(),
        }
    }

    /// 转终端颜色
    pub fn to_term_color(&self) -> anyhow::Result<style::Color> {
        match self {
            Color::Preset { name } => parse_preset(name),
            Color::RGB { r, g, b } => Ok(style::Color::Rgb {
                r: *r,
                g: *g,
                b: *b,
            }),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::preset("reset")
    }
}

fn parse_preset(name: &str) -> anyhow::Result<style::Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "reset" | "default" => style::Color::Reset,
        "red" => style::Color::Red,
        "yellow" | "yel" => style::Color::Yellow,
        "blue" => style::Color::Blue,
        "green" => style::Color::Green,
        "cyan" => style::Color::Cyan,
        "magenta" | "purple" => style::Color::Magenta,
        "white" => style::Color::White,
        "grey" | "gray" => style::Color::Grey,
        other => anyhow::bail!("Unknown preset color: {}", other),
    };
    Ok(color)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            info: Color::preset("green"),
            warning: Color::preset("yellow"),
            error: Color::preset("red"),
            size: Color::preset("reset"),
        }
    }
}

impl Theme {
    /// 从文件加载主题
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// 解析并校验TOML文本
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let theme: Theme = toml::from_str(text)?;
        for color in [&theme.info, &theme.warning, &theme.error, &theme.size] {
            color.to_term_color()?;
        }
        Ok(theme)
    }
}

/// 从环境变量加载主题，失败时使用默认主题
pub fn load_theme_from_env_or_default() -> Theme {
    let Ok(path) = env::var(THEME_ENV) else {
        return Theme::default();
    };
    match Theme::load_from_file(Path::new(&path)) {
        Ok(theme) => theme,
        Err(err) => {
            log::debug!("ignoring theme {path}: {err:#}");
            Theme::default()
        }
    }
}
