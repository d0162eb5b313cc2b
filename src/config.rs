//! # 分析参数配置
//!
//! 集中管理各计算的默认参数，支持 serde 序列化，
//! 便于宿主程序从自身配置文件加载。
//!
//! ## 依赖关系
//! - 使用 `xrd/`、`colour/` 模块执行计算
//! - 使用 `serde` 派生序列化

use crate::colour::{colour_range, DEFAULT_COLOUR_COUNT, DEFAULT_COLOUR_MAP};
use crate::constants::DEFAULT_X_RAY_ENERGY_KEV;
use crate::error::{AnalysisError, Result};
use crate::xrd::{self, BraggAngle, DEFAULT_ZERO_RANGE};

use ndarray::{Array1, ArrayBase, Data, Ix1};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────
// X 射线束
// ─────────────────────────────────────────────────────────────

/// X 射线束参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// X 射线能量 (keV)
    pub x_ray_energy_kev: f64,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            x_ray_energy_kev: DEFAULT_X_RAY_ENERGY_KEV,
        }
    }
}

impl BeamConfig {
    pub fn new(x_ray_energy_kev: f64) -> Self {
        Self { x_ray_energy_kev }
    }

    /// 由辐射源名称或数值 (keV) 创建
    pub fn from_source(source: &str) -> Result<Self> {
        parse_energy(source).map(Self::new)
    }

    /// 波长 (m)
    pub fn wavelength(&self) -> Result<f64> {
        xrd::x_ray_wavelength(self.x_ray_energy_kev)
    }

    /// d 间距 (m)
    pub fn d_spacing<T: BraggAngle>(&self, two_theta: T) -> Result<T::Output> {
        xrd::calc_dspacing(two_theta, self.x_ray_energy_kev)
    }
}

/// 预定义辐射源能量 (keV)
pub fn get_predefined_energy(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "cu-ka" | "cuka" => Some(8.0413),
        "cu-ka1" | "cuka1" => Some(8.0478),
        "mo-ka" | "moka" => Some(17.4430),
        "mo-ka1" | "moka1" => Some(17.4793),
        "co-ka" | "coka" => Some(6.9254),
        "fe-ka" | "feka" => Some(6.3996),
        "cr-ka" | "crka" => Some(5.4117),
        "ag-ka" | "agka" => Some(22.1044),
        "w-ka1" | "wka1" => Some(59.3182),
        _ => None,
    }
}

/// 解析能量输入（辐射源名称或 keV 数值）
pub fn parse_energy(input: &str) -> Result<f64> {
    let input = input.trim();
    // 先尝试解析为预定义辐射源
    if let Some(energy) = get_predefined_energy(input) {
        return Ok(energy);
    }
    // 再尝试解析为数值
    match input.parse::<f64>() {
        Ok(energy) if energy.is_finite() && energy > 0.0 => Ok(energy),
        _ => Err(AnalysisError::InvalidArgument(format!(
            "Invalid X-ray energy '{}'. Use a positive number in keV (e.g., 89.07) or a name: cu-ka, mo-ka, co-ka, fe-ka, cr-ka, ag-ka, w-ka1",
            input
        ))),
    }
}

// ─────────────────────────────────────────────────────────────
// 应变
// ─────────────────────────────────────────────────────────────

/// 应变计算参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrainConfig {
    /// 用于计算基线的前导点数
    pub zero_range: usize,
}

impl Default for StrainConfig {
    fn default() -> Self {
        Self {
            zero_range: DEFAULT_ZERO_RANGE,
        }
    }
}

impl StrainConfig {
    pub fn apply<S>(&self, two_theta: &ArrayBase<S, Ix1>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
    {
        xrd::calc_strain(two_theta, self.zero_range)
    }
}

// ─────────────────────────────────────────────────────────────
// 颜色
// ─────────────────────────────────────────────────────────────

/// 颜色序列参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourRangeConfig {
    pub count: usize,
    pub colour_map: String,
}

impl Default for ColourRangeConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COLOUR_COUNT,
            colour_map: DEFAULT_COLOUR_MAP.to_string(),
        }
    }
}

impl ColourRangeConfig {
    pub fn apply(&self) -> Result<Vec<String>> {
        colour_range(self.count, &self.colour_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn assert_close(actual: f64, expected: f64, relative: f64) {
        assert!(
            (actual - expected).abs() <= relative * expected.abs(),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_beam_default() {
        let beam = BeamConfig::default();
        assert_eq!(beam.x_ray_energy_kev, 89.07);
        assert_eq!(
            beam.wavelength().unwrap(),
            xrd::x_ray_wavelength(89.07).unwrap()
        );
        assert_eq!(
            beam.d_spacing(90.0).unwrap(),
            xrd::calc_dspacing(90.0, 89.07).unwrap()
        );
    }

    #[test]
    fn test_parse_energy() {
        assert_eq!(parse_energy("Cu-Ka1").unwrap(), 8.0478);
        assert_eq!(parse_energy(" 89.07 ").unwrap(), 89.07);
        assert!(parse_energy("unobtainium").is_err());
        assert!(parse_energy("-3").is_err());
        assert!(parse_energy("0").is_err());
    }

    #[test]
    fn test_cu_ka1_wavelength() {
        let beam = BeamConfig::from_source("cuka1").unwrap();
        assert_close(beam.wavelength().unwrap(), 1.5406e-10, 1e-4);
    }

    #[test]
    fn test_serde_defaults() {
        let beam: BeamConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(beam, BeamConfig::default());

        let strain: StrainConfig = serde_json::from_str(r#"{"zero_range": 3}"#).unwrap();
        assert_eq!(strain.zero_range, 3);

        let colours: ColourRangeConfig =
            serde_json::from_str(r#"{"colour_map": "magma"}"#).unwrap();
        assert_eq!(colours.count, 9);
        assert_eq!(colours.colour_map, "magma");
    }

    #[test]
    fn test_apply() {
        let strain = StrainConfig::default()
            .apply(&array![10.0, 10.5])
            .unwrap();
        assert_eq!(strain[0], 0.0);

        let colours = ColourRangeConfig::default().apply().unwrap();
        assert_eq!(colours.len(), 9);
        assert_eq!(colours[0], "#fde725");
    }
}
