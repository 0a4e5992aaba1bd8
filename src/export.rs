//! 결과 표 내보내기 어댑터.
//! 엔진의 SI 결과를 표시 단위계로 재환산해 TSV/CSV 문자열로 직렬화한다.
//! 파일 저장 여부는 호출자(프레젠테이션 계층)가 결정한다.

use crate::conversion;
use crate::sizing::{SizeRow, SizingResult, UnitSystem};

/// 값을 유효숫자 n자리로 반올림한다.
pub fn round_sig_figs(value: f64, sig_figs: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let magnitude = value.abs().log10().floor() as i32 + 1;
    let factor = 10f64.powi(sig_figs - magnitude);
    (value * factor).round() / factor
}

/// 결과 표를 TSV로 직렬화한다. 스프레드시트 붙여넣기용.
pub fn table_tsv(result: &SizingResult, unit_system: UnitSystem) -> String {
    let mut lines = vec![headers(unit_system).join("\t")];
    for (i, row) in result.all_sizes.iter().enumerate() {
        lines.push(cells(row, i == result.recommended_index, unit_system).join("\t"));
    }
    lines.join("\n")
}

/// 결과 표를 CSV로 직렬화한다.
pub fn table_csv(result: &SizingResult, unit_system: UnitSystem) -> String {
    let mut lines = vec![headers(unit_system).join(",")];
    for (i, row) in result.all_sizes.iter().enumerate() {
        lines.push(cells(row, i == result.recommended_index, unit_system).join(","));
    }
    lines.join("\n")
}

fn headers(unit_system: UnitSystem) -> Vec<String> {
    let (id_unit, vel_unit, dp_unit, dp_total_unit) = match unit_system {
        UnitSystem::Metric => ("mm", "m/s", "Pa/m", "Pa"),
        UnitSystem::Imperial => ("in", "ft/s", "psi/100ft", "psi"),
    };
    vec![
        "NPS".to_string(),
        "DN".to_string(),
        format!("내경 ({id_unit})"),
        format!("유속 ({vel_unit})"),
        "Re".to_string(),
        "f".to_string(),
        format!("ΔP ({dp_unit})"),
        format!("ΔP 합계 ({dp_total_unit})"),
        "판정".to_string(),
        "추천".to_string(),
    ]
}

fn cells(row: &SizeRow, recommended: bool, unit_system: UnitSystem) -> Vec<String> {
    let (id, velocity, dp, dp_total) = match unit_system {
        UnitSystem::Metric => (
            row.inner_diameter_mm,
            row.velocity_m_per_s,
            row.pressure_drop_per_meter,
            row.pressure_drop_total,
        ),
        UnitSystem::Imperial => (
            conversion::mm_to_inches(row.inner_diameter_mm),
            conversion::mps_to_fps(row.velocity_m_per_s),
            conversion::pa_per_m_to_psi_per_100ft(row.pressure_drop_per_meter),
            conversion::pa_to_psi(row.pressure_drop_total),
        ),
    };
    let marker = if recommended { "*" } else { "" };
    vec![
        row.nps.to_string(),
        row.dn.to_string(),
        round_sig_figs(id, 4).to_string(),
        round_sig_figs(velocity, 3).to_string(),
        format!("{:.0}", row.reynolds_number.round()),
        round_sig_figs(row.friction_factor, 4).to_string(),
        round_sig_figs(dp, 4).to_string(),
        round_sig_figs(dp_total, 4).to_string(),
        row.velocity_flag.as_str().to_string(),
        marker.to_string(),
    ]
}
