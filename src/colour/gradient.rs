//! # 色图采样
//!
//! 将 [0, 1] 区间内的位置映射为查找表中的颜色，并格式化为 `#rrggbb`。
//! 名称后缀 `_r` 表示反向色图（查找表倒序）。
//!
//! ## 依赖关系
//! - 被 `colour/range.rs` 使用
//! - 使用 `colour/maps.rs` 的色图数据
//! - 使用 `palette` 的颜色类型与十六进制格式化

use crate::colour::maps::{self, ColourMap};
use crate::error::AnalysisError;

use palette::Srgb;
use std::str::FromStr;

/// 已解析的命名色图（可能反向）
#[derive(Debug, Clone, Copy)]
pub struct NamedGradient {
    map: &'static ColourMap,
    reversed: bool,
}

impl NamedGradient {
    pub fn name(&self) -> &'static str {
        self.map.name
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// 在位置 `x` (0..=1) 处采样颜色，越界值截断到端点
    ///
    /// 反向色图先按正向规则求下标，再在倒序表中取同一下标。
    pub fn sample(&self, x: f64) -> Srgb<u8> {
        let stops = self.map.stops;
        let index = self.map.index(x);
        if self.reversed {
            stops[stops.len() - 1 - index]
        } else {
            stops[index]
        }
    }

    /// 在位置 `x` 处采样并格式化为 `#rrggbb`
    pub fn hex_at(&self, x: f64) -> String {
        to_hex(self.sample(x))
    }
}

impl FromStr for NamedGradient {
    type Err = AnalysisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        if let Some(map) = maps::find(trimmed) {
            return Ok(NamedGradient {
                map,
                reversed: false,
            });
        }

        let base = trimmed
            .strip_suffix("_r")
            .or_else(|| trimmed.strip_suffix("_R"));
        if let Some(map) = base.and_then(maps::find) {
            return Ok(NamedGradient {
                map,
                reversed: true,
            });
        }

        Err(AnalysisError::InvalidConfiguration {
            name: name.to_string(),
            available: maps::colour_map_names().join(", "),
        })
    }
}

/// `Srgb<u8>` → `#rrggbb`（小写）
pub fn to_hex(colour: Srgb<u8>) -> String {
    format!("#{:x}", colour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(name: &str) -> NamedGradient {
        name.parse().unwrap()
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(gradient("viridis").name(), "viridis");
        assert_eq!(gradient("Plasma").name(), "plasma");
        assert!(!gradient("magma").is_reversed());
        assert!(gradient("magma_r").is_reversed());
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "jet2".parse::<NamedGradient>().unwrap_err();
        match err {
            AnalysisError::InvalidConfiguration { name, available } => {
                assert_eq!(name, "jet2");
                assert!(available.contains("viridis"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!("_r".parse::<NamedGradient>().is_err());
        assert!("cividis".parse::<NamedGradient>().is_err());
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(to_hex(Srgb::new(0x44, 0x01, 0x54)), "#440154");
        assert_eq!(to_hex(Srgb::new(0, 0, 4)), "#000004");
        assert_eq!(to_hex(Srgb::new(255, 255, 255)), "#ffffff");
    }

    #[test]
    fn test_lookup_table_entries() {
        let viridis = gradient("viridis");
        assert_eq!(viridis.hex_at(0.0), "#440154");
        assert_eq!(viridis.hex_at(16.0 / 256.0), "#48186a");
        assert_eq!(viridis.hex_at(0.5), "#21918c");
        assert_eq!(viridis.hex_at(1.0), "#fde725");
        // 越界截断
        assert_eq!(viridis.hex_at(-0.5), "#440154");
        assert_eq!(viridis.hex_at(2.0), "#fde725");

        assert_eq!(gradient("plasma").hex_at(0.5), "#cc4778");
        assert_eq!(gradient("magma").hex_at(1.0), "#fcfdbf");
        assert_eq!(gradient("inferno").hex_at(0.0), "#000004");
    }

    #[test]
    fn test_reversed_mirrors_table_index() {
        for name in ["inferno", "tab10", "set1"] {
            let forward = gradient(name);
            let reversed = gradient(&format!("{}_r", name));
            let len = forward.map.stops.len();
            for k in 0..=20 {
                let x = k as f64 / 20.0;
                let mirrored = len - 1 - forward.map.index(x);
                assert_eq!(
                    reversed.sample(x),
                    forward.map.stops[mirrored],
                    "{}_r at {}",
                    name,
                    x
                );
            }
        }
    }

    #[test]
    fn test_reversed_listed_on_bin_edges() {
        // x·N 恰为整数时取倒序表中的同一下标，而不是正向表的 1-x
        let tab10_r = gradient("tab10_r");
        assert_eq!(tab10_r.hex_at(0.0), "#17becf");
        assert_eq!(tab10_r.hex_at(0.1), "#bcbd22");
        assert_eq!(tab10_r.hex_at(0.2), "#7f7f7f");
        assert_eq!(tab10_r.hex_at(0.7), "#2ca02c");
        assert_eq!(tab10_r.hex_at(1.0), "#1f77b4");
    }

    #[test]
    fn test_listed_gradient() {
        let tab10 = gradient("tab10");
        assert_eq!(tab10.hex_at(0.0), "#1f77b4");
        assert_eq!(tab10.hex_at(0.15), "#ff7f0e");
        assert_eq!(tab10.hex_at(1.0), "#17becf");
    }
}
