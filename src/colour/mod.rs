//! # 颜色模块
//!
//! 为绘图生成有序的十六进制颜色码（不负责绘图本身）。
//!
//! ## 子模块
//! - `maps`: 内置色图注册与下标规则
//! - `sequential`: 256 项连续色图查找表
//! - `gradient`: 色图名称解析与采样
//! - `range`: 等间距颜色序列
//!
//! ## 依赖关系
//! - 被 `config.rs` 和库入口使用
//! - 使用 `palette` 表示颜色

pub mod gradient;
pub mod maps;
pub mod range;
pub mod sequential;

pub use gradient::{to_hex, NamedGradient};
pub use maps::{colour_map_names, ColourMap};
pub use range::{colour_range, DEFAULT_COLOUR_COUNT, DEFAULT_COLOUR_MAP};
