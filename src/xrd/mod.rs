//! # XRD 计算模块
//!
//! 提供 X 射线衍射分析常用的数值换算。
//!
//! ## 子模块
//! - `wavelength`: 能量 ↔ 波长换算
//! - `bragg`: Bragg 定律 d 间距
//! - `strain`: 由 2θ 序列计算晶格应变
//!
//! ## 依赖关系
//! - 被 `config.rs` 和库入口使用
//! - 使用 `constants.rs` 的物理常数

pub mod bragg;
pub mod strain;
pub mod wavelength;

pub use bragg::{calc_dspacing, d_spacing_from_wavelength, BraggAngle};
pub use strain::{calc_strain, calc_strain_with_baseline, DEFAULT_ZERO_RANGE};
pub use wavelength::{energy_from_wavelength, x_ray_wavelength};
