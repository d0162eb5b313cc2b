//! # 相对振幅归一化
//!
//! 将振幅序列逐元素除以首元素，结果首元素恒为 1.0。
//!
//! ## 依赖关系
//! - 被库入口使用
//! - 使用 `ndarray` 表示输入/输出序列

use crate::error::{AnalysisError, Result};

use ndarray::{Array1, ArrayBase, Data, Ix1};

/// 以首元素为参考归一化振幅
pub fn relative_amplitude<S>(amplitude: &ArrayBase<S, Ix1>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    let reference = *amplitude.get(0).ok_or_else(|| {
        AnalysisError::InvalidArgument("relative_amplitude requires at least one value".to_string())
    })?;

    if reference == 0.0 || !reference.is_finite() {
        return Err(AnalysisError::degenerate(
            "relative_amplitude",
            format!("reference amplitude is {}", reference),
        ));
    }

    Ok(amplitude.mapv(|a| a / reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_relative_amplitude() {
        let rel = relative_amplitude(&array![4.0, 2.0, 8.0]).unwrap();
        assert_eq!(rel, array![1.0, 0.5, 2.0]);
    }

    #[test]
    fn test_relative_amplitude_idempotent() {
        let once = relative_amplitude(&array![3.0, 1.5, 9.0, -6.0]).unwrap();
        let twice = relative_amplitude(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_relative_amplitude_single_value() {
        assert_eq!(relative_amplitude(&array![7.5]).unwrap(), array![1.0]);
    }

    #[test]
    fn test_relative_amplitude_zero_reference() {
        let err = relative_amplitude(&array![0.0, 5.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::ArithmeticDegenerate { .. }));
    }

    #[test]
    fn test_relative_amplitude_empty() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert!(matches!(
            relative_amplitude(&empty),
            Err(AnalysisError::InvalidArgument(_))
        ));
    }
}
