//! # X 射线能量 ↔ 波长换算
//!
//! 使用 Planck 关系 λ = hc / E，能量以 keV 输入，波长以米输出。
//!
//! ## 依赖关系
//! - 被 `xrd/bragg.rs`、`config.rs` 使用
//! - 使用 `constants.rs` 的物理常数

use crate::constants::{ELEMENTARY_CHARGE, EV_PER_KEV, PLANCK_CONSTANT, SPEED_OF_LIGHT};
use crate::error::{AnalysisError, Result};

/// 由 X 射线能量 (keV) 计算波长 (m)
///
/// 能量必须为正的有限值，否则返回 [`AnalysisError::ArithmeticDegenerate`]。
pub fn x_ray_wavelength(x_ray_energy: f64) -> Result<f64> {
    if !(x_ray_energy.is_finite() && x_ray_energy > 0.0) {
        return Err(AnalysisError::degenerate(
            "x_ray_wavelength",
            format!("X-ray energy must be positive, got {} keV", x_ray_energy),
        ));
    }

    let wavelength =
        (PLANCK_CONSTANT * SPEED_OF_LIGHT) / (x_ray_energy * EV_PER_KEV * ELEMENTARY_CHARGE);
    log::debug!("E = {} keV -> λ = {:e} m", x_ray_energy, wavelength);
    Ok(wavelength)
}

/// 由波长 (m) 反算 X 射线能量 (keV)
pub fn energy_from_wavelength(wavelength: f64) -> Result<f64> {
    if !(wavelength.is_finite() && wavelength > 0.0) {
        return Err(AnalysisError::degenerate(
            "energy_from_wavelength",
            format!("wavelength must be positive, got {} m", wavelength),
        ));
    }

    Ok((PLANCK_CONSTANT * SPEED_OF_LIGHT) / (wavelength * EV_PER_KEV * ELEMENTARY_CHARGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_X_RAY_ENERGY_KEV;

    fn assert_close(actual: f64, expected: f64, relative: f64) {
        assert!(
            (actual - expected).abs() <= relative * expected.abs(),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_wavelength_default_energy() {
        let wl = x_ray_wavelength(DEFAULT_X_RAY_ENERGY_KEV).unwrap();
        assert_close(wl, 1.3919860491344693e-11, 1e-12);
    }

    #[test]
    fn test_wavelength_cu_ka1() {
        // Cu Kα1: 8.0478 keV ≈ 1.5406 Å
        let wl = x_ray_wavelength(8.04778640765982).unwrap();
        assert_close(wl, 1.5406e-10, 1e-9);
    }

    #[test]
    fn test_wavelength_inverse_in_energy() {
        let wl1 = x_ray_wavelength(20.0).unwrap();
        let wl2 = x_ray_wavelength(40.0).unwrap();
        assert_close(wl1 / wl2, 2.0, 1e-12);
    }

    #[test]
    fn test_energy_roundtrip() {
        let wl = x_ray_wavelength(89.07).unwrap();
        let e = energy_from_wavelength(wl).unwrap();
        assert_close(e, 89.07, 1e-12);
    }

    #[test]
    fn test_non_positive_energy_is_degenerate() {
        for energy in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = x_ray_wavelength(energy).unwrap_err();
            assert!(matches!(err, AnalysisError::ArithmeticDegenerate { .. }));
        }
        assert!(energy_from_wavelength(0.0).is_err());
    }
}
