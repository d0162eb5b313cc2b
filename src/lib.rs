//! # xrd-analysis - X 射线衍射分析数值工具
//!
//! 将衍射分析笔记本中常用的换算函数整理为独立的纯函数。
//!
//! ## 功能
//! - `colour_range` - 从命名色图生成绘图用十六进制颜色序列
//! - `x_ray_wavelength` - X 射线能量 (keV) → 波长 (m)
//! - `calc_dspacing` - Bragg 定律计算 d 间距（标量或数组）
//! - `calc_strain` - 由 2θ 序列计算晶格应变
//! - `relative_amplitude` - 振幅序列按首元素归一化
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── colour/     (色图与颜色序列)
//!   ├── xrd/        (波长、d 间距、应变)
//!   ├── constants.rs(物理常数)
//!   ├── amplitude.rs(振幅归一化)
//!   ├── config.rs   (默认参数与配置)
//!   └── error.rs    (错误处理)
//! ```
//!
//! 库本身只通过 `log` 输出诊断信息，不安装日志后端。

pub mod amplitude;
pub mod colour;
pub mod config;
pub mod constants;
pub mod error;
pub mod xrd;

pub use amplitude::relative_amplitude;
pub use colour::colour_range;
pub use config::{BeamConfig, ColourRangeConfig, StrainConfig};
pub use error::{AnalysisError, Result};
pub use xrd::{
    calc_dspacing, calc_strain, calc_strain_with_baseline, d_spacing_from_wavelength,
    energy_from_wavelength, x_ray_wavelength, BraggAngle,
};
