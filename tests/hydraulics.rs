//! 유체역학 기본식 테스트.
use pipe_sizing_toolbox::hydraulics::{
    darcy_weisbach_pressure_drop, reynolds_number, velocity_from_flow,
};

#[test]
fn velocity_from_continuity() {
    // D=0.1 m → A = π/4·0.01, Q = 2A → v = 2 m/s
    let area = std::f64::consts::FRAC_PI_4 * 0.1 * 0.1;
    let v = velocity_from_flow(2.0 * area, 0.1);
    assert!((v - 2.0).abs() < 1e-12);
}

#[test]
fn reynolds_is_zero_at_zero_velocity() {
    assert_eq!(reynolds_number(998.21, 0.0, 0.05, 0.001002), 0.0);
    assert_eq!(reynolds_number(1000.0, 0.0, 0.6, 0.0), 0.0);
}

#[test]
fn reynolds_known_value() {
    // Re = ρvD/μ = 998.21·1.5·0.05/0.001002
    let re = reynolds_number(998.21, 1.5, 0.05, 0.001002);
    assert!((re - 998.21 * 1.5 * 0.05 / 0.001002).abs() < 1e-6);
}

#[test]
fn pressure_drop_is_zero_at_zero_velocity() {
    assert_eq!(darcy_weisbach_pressure_drop(0.02, 100.0, 0.05, 998.21, 0.0), 0.0);
}

#[test]
fn pressure_drop_known_value() {
    // ΔP = f·(L/D)·(ρv²/2) = 0.02·(100/0.05)·(998.21·4/2)
    let dp = darcy_weisbach_pressure_drop(0.02, 100.0, 0.05, 998.21, 2.0);
    assert!((dp - 0.02 * (100.0 / 0.05) * (998.21 * 4.0 / 2.0)).abs() < 1e-9);
}

#[test]
fn pressure_drop_scales_linearly_with_length() {
    let dp1 = darcy_weisbach_pressure_drop(0.02, 1.0, 0.05, 998.21, 1.5);
    let dp100 = darcy_weisbach_pressure_drop(0.02, 100.0, 0.05, 998.21, 1.5);
    assert!((dp100 - dp1 * 100.0).abs() < 1e-9);
}
