//! 단위 변환 모듈. 계산 엔진은 SI 단위로만 동작하며,
//! 입력/표시 값과 SI 사이의 환산은 전부 여기서 담당한다.
//!
//! 모든 함수는 고정 상수 곱/나눗셈뿐인 순수 함수이며 반올림이나 검증을 하지 않는다.

/// US GPM → m³/s 환산 상수.
const M3_PER_S_PER_GPM: f64 = 6.30902e-5;
/// ft → m 환산 상수.
const M_PER_FT: f64 = 0.3048;
/// in → mm 환산 상수.
const MM_PER_IN: f64 = 25.4;
/// psi → Pa 환산 상수.
const PA_PER_PSI: f64 = 6894.757;

/// 유량: L/s → m³/s
pub fn liters_per_sec_to_m3_per_sec(lps: f64) -> f64 {
    lps / 1000.0
}

/// 유량: m³/s → L/s
pub fn m3_per_sec_to_liters_per_sec(m3ps: f64) -> f64 {
    m3ps * 1000.0
}

/// 유량: US GPM → m³/s
pub fn gpm_to_m3_per_sec(gpm: f64) -> f64 {
    gpm * M3_PER_S_PER_GPM
}

/// 유량: m³/s → US GPM
pub fn m3_per_sec_to_gpm(m3ps: f64) -> f64 {
    m3ps / M3_PER_S_PER_GPM
}

/// 길이: ft → m
pub fn feet_to_meters(ft: f64) -> f64 {
    ft * M_PER_FT
}

/// 길이: m → ft
pub fn meters_to_feet(m: f64) -> f64 {
    m / M_PER_FT
}

/// 구경: in → mm
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_IN
}

/// 구경: mm → in
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_IN
}

/// 유속: ft/s → m/s
pub fn fps_to_mps(fps: f64) -> f64 {
    fps * M_PER_FT
}

/// 유속: m/s → ft/s
pub fn mps_to_fps(mps: f64) -> f64 {
    mps / M_PER_FT
}

/// 압력: psi → Pa
pub fn psi_to_pa(psi: f64) -> f64 {
    psi * PA_PER_PSI
}

/// 압력: Pa → psi
pub fn pa_to_psi(pa: f64) -> f64 {
    pa / PA_PER_PSI
}

/// 압력구배: Pa/m → psi/100ft
pub fn pa_per_m_to_psi_per_100ft(pa_per_m: f64) -> f64 {
    pa_per_m * M_PER_FT * 100.0 / PA_PER_PSI
}

/// 압력구배: psi/100ft → Pa/m
pub fn psi_per_100ft_to_pa_per_m(psi_per_100ft: f64) -> f64 {
    psi_per_100ft * PA_PER_PSI / (M_PER_FT * 100.0)
}
