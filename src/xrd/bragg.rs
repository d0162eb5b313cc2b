//! # Bragg 定律 d 间距计算
//!
//! d = λ / (2 sin θ)，其中输入为衍射角 2θ（度），内部取半角。
//! 标量输入得到标量，一维数组输入逐元素计算并保持长度与顺序。
//!
//! ## 依赖关系
//! - 被 `config.rs` 使用
//! - 使用 `xrd/wavelength.rs` 计算波长
//! - 使用 `ndarray` 表示数组输入/输出

use crate::error::{AnalysisError, Result};
use crate::xrd::wavelength::x_ray_wavelength;

use ndarray::{Array1, ArrayBase, Data, Ix1};
use std::f64::consts::PI;

/// 可按 Bragg 定律换算为 d 间距的衍射角输入
///
/// 为 `f64`（单个 2θ）与一维数组/切片（2θ 序列）实现，输出形状与输入一致。
pub trait BraggAngle {
    type Output;

    /// 以给定波长 (m) 计算 d 间距 (m)
    fn d_spacing(self, wavelength: f64) -> Result<Self::Output>;
}

impl BraggAngle for f64 {
    type Output = f64;

    fn d_spacing(self, wavelength: f64) -> Result<f64> {
        bragg_d_spacing(self, wavelength)
    }
}

impl BraggAngle for &[f64] {
    type Output = Array1<f64>;

    fn d_spacing(self, wavelength: f64) -> Result<Array1<f64>> {
        self.iter()
            .map(|&two_theta| bragg_d_spacing(two_theta, wavelength))
            .collect::<Result<Vec<_>>>()
            .map(Array1::from)
    }
}

impl<S> BraggAngle for &ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    type Output = Array1<f64>;

    fn d_spacing(self, wavelength: f64) -> Result<Array1<f64>> {
        self.iter()
            .map(|&two_theta| bragg_d_spacing(two_theta, wavelength))
            .collect::<Result<Vec<_>>>()
            .map(Array1::from)
    }
}

impl<S> BraggAngle for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    type Output = Array1<f64>;

    fn d_spacing(self, wavelength: f64) -> Result<Array1<f64>> {
        (&self).d_spacing(wavelength)
    }
}

/// 由衍射角 2θ（度）和 X 射线能量 (keV) 计算 d 间距 (m)
///
/// 2θ ≡ 0 (mod 360°) 时 sin θ = 0，返回 [`AnalysisError::ArithmeticDegenerate`]。
pub fn calc_dspacing<T: BraggAngle>(two_theta: T, x_ray_energy: f64) -> Result<T::Output> {
    let wavelength = x_ray_wavelength(x_ray_energy)?;
    two_theta.d_spacing(wavelength)
}

/// 已知波长 (m) 时直接计算 d 间距
pub fn d_spacing_from_wavelength<T: BraggAngle>(two_theta: T, wavelength: f64) -> Result<T::Output> {
    if !(wavelength.is_finite() && wavelength > 0.0) {
        return Err(AnalysisError::degenerate(
            "d_spacing_from_wavelength",
            format!("wavelength must be positive, got {} m", wavelength),
        ));
    }
    two_theta.d_spacing(wavelength)
}

/// 单点 Bragg 计算
fn bragg_d_spacing(two_theta: f64, wavelength: f64) -> Result<f64> {
    if !two_theta.is_finite() {
        return Err(AnalysisError::degenerate(
            "calc_dspacing",
            format!("2θ must be finite, got {}", two_theta),
        ));
    }
    // sin(2θ·π/360) 在 2θ 为 360° 整数倍时为零
    if two_theta.rem_euclid(360.0) == 0.0 {
        return Err(AnalysisError::degenerate(
            "calc_dspacing",
            format!("sin(θ) = 0 at 2θ = {}°", two_theta),
        ));
    }

    Ok(wavelength / (2.0 * (two_theta * PI / 360.0).sin()))
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
    fn test_dspacing_at_90_degrees() {
        let wl = x_ray_wavelength(89.07).unwrap();
        let d = calc_dspacing(90.0, 89.07).unwrap();
        assert_close(d, wl / 2f64.sqrt(), 1e-12);
    }

    #[test]
    fn test_dspacing_backscatter() {
        // 2θ = 180° → d = λ/2
        let wl = x_ray_wavelength(30.0).unwrap();
        let d = calc_dspacing(180.0, 30.0).unwrap();
        assert_close(d, wl / 2.0, 1e-12);
    }

    #[test]
    fn test_dspacing_array_matches_scalar() {
        let two_theta = array![3.5, 5.2, 7.9, 12.0];
        let d = calc_dspacing(&two_theta, 89.07).unwrap();
        assert_eq!(d.len(), two_theta.len());
        for (tt, di) in two_theta.iter().zip(d.iter()) {
            assert_close(*di, calc_dspacing(*tt, 89.07).unwrap(), 1e-15);
        }
    }

    #[test]
    fn test_dspacing_slice_and_view() {
        let values = vec![4.0, 8.0];
        let from_slice = calc_dspacing(values.as_slice(), 89.07).unwrap();
        let arr = Array1::from(values);
        let from_view = calc_dspacing(arr.view(), 89.07).unwrap();
        assert_eq!(from_slice, from_view);
    }

    #[test]
    fn test_dspacing_from_known_wavelength() {
        // Cu Kα1, Si (111) 2θ ≈ 28.44° → d ≈ 3.1356 Å
        let d = d_spacing_from_wavelength(28.442, 1.5406e-10).unwrap();
        assert_close(d, 3.1356e-10, 1e-3);
    }

    #[test]
    fn test_dspacing_pole_is_degenerate() {
        for tt in [0.0, 360.0, -720.0] {
            let err = calc_dspacing(tt, 89.07).unwrap_err();
            assert!(matches!(err, AnalysisError::ArithmeticDegenerate { .. }));
        }
        assert!(calc_dspacing(&array![10.0, 0.0], 89.07).is_err());
    }

    #[test]
    fn test_dspacing_invalid_energy() {
        assert!(calc_dspacing(90.0, 0.0).is_err());
        assert!(d_spacing_from_wavelength(90.0, -1.0).is_err());
    }
}
