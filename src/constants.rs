//! # 物理常数
//!
//! 波长与 d 间距计算共用的物理常数（CODATA 2014）。
//! 所有能量/波长换算只能通过这里的常数进行。
//!
//! ## 依赖关系
//! - 被 `xrd/wavelength.rs`、`xrd/bragg.rs` 使用
//! - 无外部模块依赖

/// 光速 c (m/s)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// 普朗克常数 h (J·s)
pub const PLANCK_CONSTANT: f64 = 6.62607004e-34;

/// 元电荷 e (C)，用于 eV → J 换算
pub const ELEMENTARY_CHARGE: f64 = 1.6021766208e-19;

/// keV → eV
pub const EV_PER_KEV: f64 = 1.0e3;

/// 默认 X 射线能量 (keV)
pub const DEFAULT_X_RAY_ENERGY_KEV: f64 = 89.07;
