//! # 统一错误处理模块
//!
//! 定义 xrd-analysis 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// xrd-analysis 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown colour map '{name}'. Available: {available}")]
    InvalidConfiguration { name: String, available: String },

    // ─────────────────────────────────────────────────────────────
    // 数值退化（除零、三角函数极点）
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate arithmetic in {operation}: {reason}")]
    ArithmeticDegenerate {
        operation: &'static str,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalysisError {
    pub(crate) fn degenerate(operation: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::ArithmeticDegenerate {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AnalysisError>;
