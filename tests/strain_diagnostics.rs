//! 应变计算的日志诊断：基线 θ₀ 与 zero_range 截断警告

use ndarray::array;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use xrd_analysis::calc_strain_with_baseline;

/// 收集日志输出的共享缓冲区
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_strain_logs_baseline_and_clamp_warning() {
    let buffer = SharedBuffer::default();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .target(env_logger::Target::Pipe(Box::new(buffer.clone())))
        .try_init()
        .expect("logger installed once for this test binary");

    let (_, theta_0) = calc_strain_with_baseline(&array![10.0, 10.0, 12.0], 2).unwrap();
    let logged = buffer.contents();
    assert!(
        logged.contains(&format!("DEBUG strain baseline θ₀ = {} rad", theta_0)),
        "missing baseline line in:\n{}",
        logged
    );
    assert!(!logged.contains("WARN"));

    calc_strain_with_baseline(&array![10.0, 12.0], 5).unwrap();
    let logged = buffer.contents();
    assert!(
        logged.contains("WARN zero_range 5 exceeds series length 2"),
        "missing clamp warning in:\n{}",
        logged
    );
}
