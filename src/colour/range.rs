//! # 绘图颜色序列
//!
//! 在命名色图上等间距采样 N 个颜色，按采样顺序的逆序返回十六进制颜色码。
//!
//! ## 依赖关系
//! - 被 `config.rs` 和库入口使用
//! - 使用 `colour/gradient.rs` 解析色图并采样

use crate::colour::gradient::NamedGradient;
use crate::error::Result;

/// 默认颜色数量
pub const DEFAULT_COLOUR_COUNT: usize = 9;

/// 默认色图
pub const DEFAULT_COLOUR_MAP: &str = "viridis";

/// 返回色图上 `n` 个等间距颜色的十六进制码（最后一个采样点在前）
///
/// 未知色图名称返回 [`AnalysisError::InvalidConfiguration`](crate::AnalysisError::InvalidConfiguration)。
pub fn colour_range(n: usize, colour_map: &str) -> Result<Vec<String>> {
    let gradient: NamedGradient = colour_map.parse()?;

    let colours: Vec<String> = (0..n)
        .rev()
        .map(|i| gradient.hex_at(linspace_point(i, n)))
        .collect();

    log::debug!(
        "colour_range: {} colours from '{}'",
        colours.len(),
        colour_map
    );
    Ok(colours)
}

/// `linspace(0, 1, n)` 的第 `i` 个点：`i·step`，末点固定为 1.0
fn linspace_point(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    if i == n - 1 {
        return 1.0;
    }
    let step = 1.0 / (n - 1) as f64;
    i as f64 * step
}
