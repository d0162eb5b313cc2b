//! 端到端测试：模拟一次原位加载实验的分析流程

use ndarray::{array, Array1};
use xrd_analysis::{
    calc_dspacing, calc_strain, calc_strain_with_baseline, colour_range, relative_amplitude,
    x_ray_wavelength, AnalysisError, BeamConfig, StrainConfig,
};

fn assert_close(actual: f64, expected: f64, relative: f64) {
    assert!(
        (actual - expected).abs() <= relative * expected.abs(),
        "expected {expected}, got {actual}"
    );
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_peak_series_analysis() {
    init_logger();

    // 同一衍射峰在加载过程中的 2θ 位置
    let two_theta = array![5.210, 5.211, 5.209, 5.205, 5.198, 5.190];
    let beam = BeamConfig::default();

    let d = beam.d_spacing(&two_theta).unwrap();
    assert_eq!(d.len(), two_theta.len());
    // 2θ 越小 d 越大
    assert!(d[5] > d[0]);

    let strain = StrainConfig { zero_range: 3 }.apply(&two_theta).unwrap();
    assert_eq!(strain.len(), two_theta.len());
    // 2θ 减小对应拉伸应变
    assert!(strain[5] > 0.0);
    assert!(strain[5] > strain[4]);

    // 小应变时 -(Δθ)/tanθ ≈ Δd/d₀
    let d_0 = d.slice(ndarray::s![..3]).mean().unwrap();
    let strain_from_d = (d[5] - d_0) / d_0;
    assert_close(strain[5], strain_from_d, 1e-2);
}

#[test]
fn test_wavelength_and_dspacing_consistent() {
    let wl = x_ray_wavelength(89.07).unwrap();
    assert_close(wl, 1.392e-11, 1e-3);
    assert_close(
        calc_dspacing(90.0, 89.07).unwrap(),
        wl / std::f64::consts::SQRT_2,
        1e-12,
    );
}

#[test]
fn test_baseline_reported() {
    init_logger();
    let (strain, theta_0) = calc_strain_with_baseline(&array![10.0, 10.0, 12.0], 2).unwrap();
    assert_close(theta_0, 5f64.to_radians(), 1e-12);
    assert_eq!(strain, calc_strain(&array![10.0, 10.0, 12.0], 2).unwrap());
}

#[test]
fn test_amplitude_and_colours_for_plot() {
    let amplitude: Array1<f64> = array![120.0, 118.0, 110.0, 96.0];
    let rel = relative_amplitude(&amplitude).unwrap();
    assert_eq!(rel[0], 1.0);
    assert_close(rel[3], 0.8, 1e-12);

    let colours = colour_range(rel.len(), "viridis").unwrap();
    assert_eq!(colours.len(), rel.len());
    assert_eq!(colours.first().map(String::as_str), Some("#fde725"));
    assert_eq!(colours.last().map(String::as_str), Some("#440154"));
}

#[test]
fn test_errors_surface_at_call_site() {
    assert!(matches!(
        colour_range(9, "rainbow-unicorn"),
        Err(AnalysisError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        relative_amplitude(&array![0.0, 5.0]),
        Err(AnalysisError::ArithmeticDegenerate { .. })
    ));
    assert!(matches!(
        calc_dspacing(0.0, 89.07),
        Err(AnalysisError::ArithmeticDegenerate { .. })
    ));
    assert!(matches!(
        x_ray_wavelength(0.0),
        Err(AnalysisError::ArithmeticDegenerate { .. })
    ));
}
