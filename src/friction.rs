//! Darcy 마찰계수 솔버.
//! 층류는 64/Re 폐형식, 난류는 Swamee-Jain 초기값 + Colebrook-White 뉴턴 반복.

/// Swamee-Jain 명시적 근사식.
/// Colebrook-White 반복의 초기값으로 사용한다.
/// 유효 범위: 5000 ≤ Re ≤ 1e8, 1e-6 ≤ ε/D ≤ 0.05 (범위 밖도 그대로 계산한다).
pub fn swamee_jain(re: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    let rel_roughness = roughness_m / diameter_m;
    let term = (rel_roughness / 3.7 + 5.74 / re.powf(0.9)).log10();
    0.25 / (term * term)
}

/// Darcy 마찰계수를 계산한다.
///
/// - 층류 (Re ≤ 2300): f = 64/Re
/// - 난류: Colebrook-White 음함수 `1/√f = -2·log10(ε/(3.7D) + 2.51/(Re·√f))`를
///   뉴턴-랩슨으로 푼다. 최대 50회, 상대 허용오차 1e-10.
///
/// 뉴턴 스텝이 f ≤ 0으로 벗어나면 현재 추정값을 절반으로 줄여 같은 반복을 계속한다.
/// 반복 한도 내에 수렴하지 못하면 마지막 추정값을 그대로 반환한다(베스트 에포트).
pub fn friction_factor(re: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    if re <= 2300.0 {
        return 64.0 / re;
    }

    let a = roughness_m / diameter_m / 3.7;

    let mut f = swamee_jain(re, roughness_m, diameter_m);

    const MAX_ITER: usize = 50;
    const TOLERANCE: f64 = 1e-10;

    // g(f) = 1/√f + 2·log10(a + 2.51/(Re·√f)) 의 근을 찾는다.
    for _ in 0..MAX_ITER {
        let sqrt_f = f.sqrt();
        let inv_sqrt_f = 1.0 / sqrt_f;
        let b = 2.51 / (re * sqrt_f);
        let log_arg = a + b;
        let g = inv_sqrt_f + 2.0 * log_arg.log10();

        // 해석적 도함수 dg/df
        let d_inv_sqrt_f = -0.5 / (f * sqrt_f);
        let db = -0.5 * 2.51 / (re * f * sqrt_f);
        let dg = d_inv_sqrt_f + 2.0 * db / (log_arg * std::f64::consts::LN_10);

        let f_new = f - g / dg;

        if f_new <= 0.0 {
            f /= 2.0;
            continue;
        }

        if ((f_new - f) / f).abs() < TOLERANCE {
            return f_new;
        }

        f = f_new;
    }

    f
}
