//! 단위 변환 회귀 테스트.
use pipe_sizing_toolbox::conversion::*;

#[test]
fn known_constants() {
    assert!((liters_per_sec_to_m3_per_sec(2.0) - 0.002).abs() < 1e-15);
    assert!((gpm_to_m3_per_sec(1.0) - 6.30902e-5).abs() < 1e-12);
    assert!((feet_to_meters(1.0) - 0.3048).abs() < 1e-15);
    assert!((inches_to_mm(1.0) - 25.4).abs() < 1e-12);
    assert!((fps_to_mps(1.0) - 0.3048).abs() < 1e-15);
    assert!((psi_to_pa(1.0) - 6894.757).abs() < 1e-9);
}

#[test]
fn feet_meters_roundtrip() {
    for x in [0.001, 1.0, 3.2808, 100.0, 12345.6] {
        let back = meters_to_feet(feet_to_meters(x));
        assert!(((back - x) / x).abs() < 1e-6, "x={x}, back={back}");
    }
}

#[test]
fn gpm_roundtrip() {
    for gpm in [0.5, 30.0, 1000.0] {
        let back = m3_per_sec_to_gpm(gpm_to_m3_per_sec(gpm));
        assert!(((back - gpm) / gpm).abs() < 1e-4, "gpm={gpm}, back={back}");
    }
}

#[test]
fn liters_roundtrip() {
    let back = m3_per_sec_to_liters_per_sec(liters_per_sec_to_m3_per_sec(7.3));
    assert!((back - 7.3).abs() < 1e-12);
}

#[test]
fn pressure_gradient_is_compound_of_length_and_pressure() {
    // 1 psi/100ft = 6894.757 Pa / 30.48 m
    let pa_per_m = psi_per_100ft_to_pa_per_m(1.0);
    assert!((pa_per_m - 6894.757 / 30.48).abs() < 1e-9);

    let back = pa_per_m_to_psi_per_100ft(pa_per_m);
    assert!((back - 1.0).abs() < 1e-12);
}

#[test]
fn inches_mm_roundtrip() {
    let back = mm_to_inches(inches_to_mm(2.5));
    assert!((back - 2.5).abs() < 1e-12);
}
