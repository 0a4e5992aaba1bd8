//! 유체역학 기본 계산. 입력과 출력은 모두 SI 단위이다.

/// 연속방정식으로 유량에서 유속을 구한다: v = Q / (π/4·D²)
/// - `flow_m3_per_s`: 체적 유량 [m³/s]
/// - `diameter_m`: 내경 [m]
pub fn velocity_from_flow(flow_m3_per_s: f64, diameter_m: f64) -> f64 {
    let area = std::f64::consts::FRAC_PI_4 * diameter_m * diameter_m;
    flow_m3_per_s / area
}

/// 레이놀즈수: Re = ρvD/μ. 유속이 0이면 0으로 정의한다.
/// - `density`: 밀도 [kg/m³]
/// - `velocity`: 유속 [m/s]
/// - `diameter`: 내경 [m]
/// - `viscosity`: 동점도 [Pa·s]
pub fn reynolds_number(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> f64 {
    if velocity == 0.0 {
        return 0.0;
    }
    density * velocity * diameter / viscosity
}

/// Darcy-Weisbach 압력손실: ΔP = f · (L/D) · (ρv²/2)  [Pa]
/// - `friction_factor`: Darcy 마찰계수 (무차원)
/// - `length_m`: 길이 [m]
/// - `diameter_m`: 내경 [m]
pub fn darcy_weisbach_pressure_drop(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    density: f64,
    velocity: f64,
) -> f64 {
    friction_factor * (length_m / diameter_m) * (density * velocity * velocity / 2.0)
}
