//! 마찰계수 솔버 테스트.
use pipe_sizing_toolbox::friction::{friction_factor, swamee_jain};

#[test]
fn laminar_is_64_over_re_regardless_of_roughness() {
    for re in [100.0, 1000.0, 2300.0] {
        for (eps, d) in [(0.000045, 0.05), (0.0003, 0.1), (0.0, 0.02)] {
            let f = friction_factor(re, eps, d);
            assert_eq!(f, 64.0 / re, "re={re}, eps={eps}, d={d}");
        }
    }
}

#[test]
fn turbulent_moderate_roughness_matches_moody_chart() {
    // Re=1e5, ε/D=0.001 → Moody 선도에서 f ≈ 0.022
    let f = friction_factor(100_000.0, 0.00005, 0.05);
    assert!(f > 0.018 && f < 0.025, "f={f}");
}

#[test]
fn turbulent_solution_satisfies_colebrook_white() {
    for (re, eps, d) in [
        (5_000.0, 0.000045, 0.05),
        (100_000.0, 0.00005, 0.05),
        (1.0e6, 0.00015, 0.1),
        (1.0e8, 0.0000015, 0.3),
    ] {
        let f = friction_factor(re, eps, d);
        assert!(f > 0.0);
        let sqrt_f = f.sqrt();
        let residual = 1.0 / sqrt_f + 2.0 * (eps / d / 3.7 + 2.51 / (re * sqrt_f)).log10();
        assert!(residual.abs() < 1e-6, "re={re}: residual={residual}");
    }
}

#[test]
fn newton_refines_swamee_jain_seed() {
    let re = 50_000.0;
    let eps = 0.000045;
    let d = 0.05;
    let seed = swamee_jain(re, eps, d);
    let f = friction_factor(re, eps, d);
    // 근사 초기값과 수렴해는 같은 자릿수에서 근접해야 한다.
    assert!((f - seed).abs() / f < 0.05, "seed={seed}, f={f}");
}

#[test]
fn smooth_pipe_friction_decreases_with_reynolds() {
    let eps = 0.0000015;
    let d = 0.1;
    let f1 = friction_factor(10_000.0, eps, d);
    let f2 = friction_factor(100_000.0, eps, d);
    let f3 = friction_factor(1.0e7, eps, d);
    assert!(f1 > f2 && f2 > f3, "f1={f1}, f2={f2}, f3={f3}");
}
