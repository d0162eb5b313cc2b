//! # 晶格应变计算
//!
//! 由 2θ 序列相对零应变基线计算应变：
//! ε = -(θ - θ₀) / tan θ，θ 为半角（弧度），θ₀ 为前 `zero_range` 个点的均值。
//!
//! ## 依赖关系
//! - 被 `config.rs` 使用
//! - 使用 `ndarray` 表示输入/输出序列

use crate::error::{AnalysisError, Result};

use ndarray::{s, Array1, ArrayBase, Data, Ix1};

/// 默认基线点数
pub const DEFAULT_ZERO_RANGE: usize = 1;

/// 计算应变序列
///
/// 基线 θ₀ 通过 `log::debug!` 输出，不作为返回值。
pub fn calc_strain<S>(two_theta: &ArrayBase<S, Ix1>, zero_range: usize) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    calc_strain_with_baseline(two_theta, zero_range).map(|(strain, _)| strain)
}

/// 计算应变序列，同时返回基线 θ₀（弧度）
pub fn calc_strain_with_baseline<S>(
    two_theta: &ArrayBase<S, Ix1>,
    zero_range: usize,
) -> Result<(Array1<f64>, f64)>
where
    S: Data<Elem = f64>,
{
    if two_theta.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "calc_strain requires at least one 2θ value".to_string(),
        ));
    }
    if zero_range == 0 {
        return Err(AnalysisError::InvalidArgument(
            "zero_range must be at least 1".to_string(),
        ));
    }

    // tan θ = 0 when 2θ is a multiple of 360°
    if let Some(pole) = two_theta
        .iter()
        .find(|tt| !tt.is_finite() || tt.rem_euclid(360.0) == 0.0)
    {
        return Err(AnalysisError::degenerate(
            "calc_strain",
            format!("tan(θ) = 0 or undefined at 2θ = {}°", pole),
        ));
    }

    let window = if zero_range > two_theta.len() {
        log::warn!(
            "zero_range {} exceeds series length {}, using all points for the baseline",
            zero_range,
            two_theta.len()
        );
        two_theta.len()
    } else {
        zero_range
    };

    let theta = two_theta.mapv(|tt| 0.5 * tt.to_radians());
    let theta_0 = theta
        .slice(s![..window])
        .mean()
        .ok_or_else(|| AnalysisError::InvalidArgument("empty baseline window".to_string()))?;
    log::debug!("strain baseline θ₀ = {} rad", theta_0);

    let strain = theta.mapv(|t| -(t - theta_0) / t.tan());
    Ok((strain, theta_0))
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
    fn test_strain_two_point_baseline() {
        let two_theta = array![10.0, 10.0, 12.0];
        let (strain, theta_0) = calc_strain_with_baseline(&two_theta, 2).unwrap();

        assert_eq!(strain.len(), 3);
        assert_close(theta_0, 5f64.to_radians(), 1e-12);
        assert_eq!(strain[0], 0.0);
        assert_eq!(strain[1], 0.0);

        let theta_2 = 6f64.to_radians();
        assert_close(strain[2], -(theta_2 - theta_0) / theta_2.tan(), 1e-12);
        assert_close(strain[2], -0.16605698596089738, 1e-9);
    }

    #[test]
    fn test_strain_default_zero_range() {
        let two_theta = array![8.0, 8.1, 7.9];
        let strain = calc_strain(&two_theta, DEFAULT_ZERO_RANGE).unwrap();
        assert_eq!(strain[0], 0.0);
        // 2θ 增大 → d 减小 → 压应变（负值）
        assert!(strain[1] < 0.0);
        assert!(strain[2] > 0.0);
    }

    #[test]
    fn test_strain_zero_range_larger_than_input() {
        let two_theta = array![10.0, 12.0];
        let (clamped, theta_0) = calc_strain_with_baseline(&two_theta, 10).unwrap();
        let (full, full_theta_0) = calc_strain_with_baseline(&two_theta, 2).unwrap();
        assert_eq!(theta_0, full_theta_0);
        assert_eq!(clamped, full);
    }

    #[test]
    fn test_strain_rejects_bad_input() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert!(matches!(
            calc_strain(&empty, 1),
            Err(AnalysisError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc_strain(&array![10.0], 0),
            Err(AnalysisError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc_strain(&array![10.0, 0.0], 1),
            Err(AnalysisError::ArithmeticDegenerate { .. })
        ));
    }
}
