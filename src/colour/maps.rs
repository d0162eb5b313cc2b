//! # 内置色图数据
//!
//! 所有色图均为离散查找表：连续色图为 256 项（见 `colour/sequential.rs`），
//! 定性色图为各自的调色板列表。
//!
//! ## 依赖关系
//! - 被 `colour/gradient.rs` 使用
//! - 使用 `colour/sequential.rs` 的查找表
//! - 使用 `palette` 的 `Srgb` 颜色类型

use crate::colour::sequential::{INFERNO, MAGMA, PLASMA, VIRIDIS};

use palette::Srgb;

/// 命名色图
#[derive(Debug, Clone, Copy)]
pub struct ColourMap {
    pub name: &'static str,
    /// 查找表，至少一个颜色
    pub stops: &'static [Srgb<u8>],
}

impl ColourMap {
    /// 位置 `x` (0..=1) 对应的查找表下标：`min(floor(x·N), N-1)`
    pub fn index(&self, x: f64) -> usize {
        let len = self.stops.len();
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        ((x * len as f64) as usize).min(len - 1)
    }
}

const TAB10: &[Srgb<u8>] = &[
    Srgb::new(0x1f, 0x77, 0xb4),
    Srgb::new(0xff, 0x7f, 0x0e),
    Srgb::new(0x2c, 0xa0, 0x2c),
    Srgb::new(0xd6, 0x27, 0x28),
    Srgb::new(0x94, 0x67, 0xbd),
    Srgb::new(0x8c, 0x56, 0x4b),
    Srgb::new(0xe3, 0x77, 0xc2),
    Srgb::new(0x7f, 0x7f, 0x7f),
    Srgb::new(0xbc, 0xbd, 0x22),
    Srgb::new(0x17, 0xbe, 0xcf),
];

const SET1: &[Srgb<u8>] = &[
    Srgb::new(0xe4, 0x1a, 0x1c),
    Srgb::new(0x37, 0x7e, 0xb8),
    Srgb::new(0x4d, 0xaf, 0x4a),
    Srgb::new(0x98, 0x4e, 0xa3),
    Srgb::new(0xff, 0x7f, 0x00),
    Srgb::new(0xff, 0xff, 0x33),
    Srgb::new(0xa6, 0x56, 0x28),
    Srgb::new(0xf7, 0x81, 0xbf),
    Srgb::new(0x99, 0x99, 0x99),
];

/// 所有内置色图
pub const COLOUR_MAPS: &[ColourMap] = &[
    ColourMap {
        name: "viridis",
        stops: VIRIDIS,
    },
    ColourMap {
        name: "plasma",
        stops: PLASMA,
    },
    ColourMap {
        name: "inferno",
        stops: INFERNO,
    },
    ColourMap {
        name: "magma",
        stops: MAGMA,
    },
    ColourMap {
        name: "tab10",
        stops: TAB10,
    },
    ColourMap {
        name: "set1",
        stops: SET1,
    },
];

/// 按名称查找内置色图（不区分大小写）
pub fn find(name: &str) -> Option<&'static ColourMap> {
    COLOUR_MAPS
        .iter()
        .find(|map| map.name.eq_ignore_ascii_case(name))
}

/// 内置色图名称列表
pub fn colour_map_names() -> Vec<&'static str> {
    COLOUR_MAPS.iter().map(|map| map.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        for name in ["viridis", "plasma", "inferno", "magma"] {
            assert_eq!(find(name).unwrap().stops.len(), 256, "{}", name);
        }
        assert_eq!(find("tab10").unwrap().stops.len(), 10);
        assert_eq!(find("set1").unwrap().stops.len(), 9);
    }

    #[test]
    fn test_index_rule() {
        let viridis = find("viridis").unwrap();
        assert_eq!(viridis.index(0.0), 0);
        assert_eq!(viridis.index(16.0 / 256.0), 16);
        assert_eq!(viridis.index(0.5), 128);
        assert_eq!(viridis.index(1.0), 255);
        assert_eq!(viridis.index(-1.0), 0);
        assert_eq!(viridis.index(f64::NAN), 0);

        let tab10 = find("tab10").unwrap();
        assert_eq!(tab10.index(0.1), 1);
        assert_eq!(tab10.index(0.99), 9);
        assert_eq!(tab10.index(1.0), 9);
    }
}
