//! 물성 테이블 조회/보간 테스트.
use pipe_sizing_toolbox::water_properties::water_properties;

#[test]
fn tabulated_values_are_returned_exactly() {
    let p = water_properties(20.0);
    assert!((p.density_kg_per_m3 - 998.21).abs() < 1e-12);
    assert!((p.viscosity_pa_s - 0.001002).abs() < 1e-15);

    let p = water_properties(0.0);
    assert!((p.density_kg_per_m3 - 999.84).abs() < 1e-12);
    assert!((p.viscosity_pa_s - 0.001792).abs() < 1e-15);

    let p = water_properties(100.0);
    assert!((p.density_kg_per_m3 - 958.37).abs() < 1e-12);
    assert!((p.viscosity_pa_s - 0.000282).abs() < 1e-15);
}

#[test]
fn out_of_range_is_clamped() {
    let cold = water_properties(-15.0);
    let zero = water_properties(0.0);
    assert_eq!(cold.density_kg_per_m3, zero.density_kg_per_m3);
    assert_eq!(cold.viscosity_pa_s, zero.viscosity_pa_s);

    let hot = water_properties(150.0);
    let hundred = water_properties(100.0);
    assert_eq!(hot.density_kg_per_m3, hundred.density_kg_per_m3);
    assert_eq!(hot.viscosity_pa_s, hundred.viscosity_pa_s);
}

#[test]
fn interpolates_between_samples() {
    // 22.5 °C는 20 °C와 25 °C 샘플의 정중앙
    let p = water_properties(22.5);
    assert!((p.density_kg_per_m3 - (998.21 + 997.05) / 2.0).abs() < 1e-9);
    assert!((p.viscosity_pa_s - (0.001002 + 0.000890) / 2.0).abs() < 1e-12);
}

#[test]
fn density_and_viscosity_decrease_with_temperature() {
    let mut prev = water_properties(5.0);
    for t in [15.0, 25.0, 40.0, 60.0, 80.0, 100.0] {
        let cur = water_properties(t);
        assert!(cur.density_kg_per_m3 < prev.density_kg_per_m3, "t={t}");
        assert!(cur.viscosity_pa_s < prev.viscosity_pa_s, "t={t}");
        prev = cur;
    }
}
