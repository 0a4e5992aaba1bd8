//! 배관 사이징 오케스트레이터.
//! 유량과 조건을 받아 모든 표준 구경에 대해 수력 계산을 수행하고 추천 구경을 정한다.

use serde::{Deserialize, Serialize};

use crate::conversion;
use crate::friction::friction_factor;
use crate::hydraulics::{darcy_weisbach_pressure_drop, reynolds_number, velocity_from_flow};
use crate::material_db;
use crate::pipe_catalog;
use crate::water_properties::{self, WaterProperties};

/// 입력 단위계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 유량 L/s, 길이 m
    Metric,
    /// 유량 US GPM, 길이 ft
    Imperial,
}

impl UnitSystem {
    /// 해당 단위계의 유량 단위 표기.
    pub fn flow_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "L/s",
            UnitSystem::Imperial => "GPM",
        }
    }

    /// 해당 단위계의 길이 단위 표기.
    pub fn length_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

/// 단위계 문자열 파싱 오류.
#[derive(Debug)]
pub struct ParseUnitSystemError(pub String);

impl std::fmt::Display for ParseUnitSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 단위계: {} (metric 또는 imperial)", self.0)
    }
}

impl std::error::Error for ParseUnitSystemError {}

/// 유속 판정 구간. 기준은 SI(m/s)이며 경계값 포함 여부까지 고정이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityFlag {
    /// v < 0.5
    Low,
    /// 0.5 ≤ v < 1.0
    AcceptableLow,
    /// 1.0 ≤ v ≤ 2.5
    Optimal,
    /// 2.5 < v ≤ 3.5
    AcceptableHigh,
    /// v > 3.5
    High,
}

impl VelocityFlag {
    /// 내보내기용 식별 문자열.
    pub fn as_str(self) -> &'static str {
        match self {
            VelocityFlag::Low => "low",
            VelocityFlag::AcceptableLow => "acceptable-low",
            VelocityFlag::Optimal => "optimal",
            VelocityFlag::AcceptableHigh => "acceptable-high",
            VelocityFlag::High => "high",
        }
    }
}

/// 유속 판정 기준 [m/s].
mod thresholds {
    pub const LOW: f64 = 0.5;
    pub const OPTIMAL_LOW: f64 = 1.0;
    pub const OPTIMAL_HIGH: f64 = 2.5;
    pub const HIGH: f64 = 3.5;
}

/// 최적 구간 중앙값 [m/s]. 최적 구경이 없을 때의 폴백 기준.
const OPTIMAL_MID_VELOCITY: f64 = 1.5;

/// 유속[m/s]을 판정 구간으로 분류한다.
/// 경계 포함 여부 고정: `<0.5` 낮음, `[0.5,1.0)` 다소 낮음, `[1.0,2.5]` 최적,
/// `(2.5,3.5]` 다소 높음, `>3.5` 높음.
pub fn classify_velocity(velocity: f64) -> VelocityFlag {
    if velocity < thresholds::LOW {
        VelocityFlag::Low
    } else if velocity < thresholds::OPTIMAL_LOW {
        VelocityFlag::AcceptableLow
    } else if velocity <= thresholds::OPTIMAL_HIGH {
        VelocityFlag::Optimal
    } else if velocity <= thresholds::HIGH {
        VelocityFlag::AcceptableHigh
    } else {
        VelocityFlag::High
    }
}

/// 사이징 입력. SI로 정규화되기 전의 값이며 단위계는 `unit_system`이 결정한다.
#[derive(Debug, Clone)]
pub struct SizingInput {
    /// 유량 (Metric: L/s, Imperial: GPM)
    pub flow_rate: f64,
    /// 물 온도 [°C]
    pub fluid_temperature_c: f64,
    /// 배관 재질 id (material_db 참조)
    pub pipe_material: String,
    /// 배관 길이 (Metric: m, Imperial: ft)
    pub pipe_length: f64,
    pub unit_system: UnitSystem,
}

/// 표준 구경 하나에 대한 계산 결과 행.
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub nps: &'static str,
    pub dn: u32,
    /// 외경 [mm]
    pub outer_diameter_mm: f64,
    /// Schedule 40 두께 [mm]
    pub wall_thickness_mm: f64,
    /// 내경 [mm]
    pub inner_diameter_mm: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    /// 단위길이 압력손실 [Pa/m]
    pub pressure_drop_per_meter: f64,
    /// 총 압력손실 [Pa]
    pub pressure_drop_total: f64,
    pub velocity_flag: VelocityFlag,
}

/// 입력값 요약 (SI 변환 전 원본 값과 단위 표기).
#[derive(Debug, Clone)]
pub struct InputSummary {
    pub flow_rate: f64,
    pub flow_rate_unit: &'static str,
    pub fluid_temperature_c: f64,
    pub pipe_material: String,
    pub pipe_roughness_mm: f64,
    pub pipe_length: f64,
    pub pipe_length_unit: &'static str,
    pub unit_system: UnitSystem,
}

/// 사이징 결과 스냅샷. 동일 입력에 대해 수치가 항상 재현된다.
#[derive(Debug, Clone)]
pub struct SizingResult {
    /// 추천 구경 (정확히 하나)
    pub recommended: SizeRow,
    /// `all_sizes`에서 추천 행의 위치
    pub recommended_index: usize,
    /// 카탈로그 순서(내경 오름차순)의 전체 행
    pub all_sizes: Vec<SizeRow>,
    pub fluid_properties: WaterProperties,
    /// 가정/참고 목록 (순서 고정)
    pub assumptions: Vec<String>,
    pub calculator_version: &'static str,
    /// 생성 시각 (RFC 3339, UTC)
    pub timestamp: String,
    pub input_summary: InputSummary,
}

/// 사이징 계산 오류.
#[derive(Debug)]
pub enum SizingError {
    /// 재질 id를 찾지 못한 경우. 행을 하나도 만들기 전에 전체 계산을 중단한다.
    UnknownMaterial(String),
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::UnknownMaterial(id) => write!(f, "알 수 없는 배관 재질: {id}"),
        }
    }
}

impl std::error::Error for SizingError {}

/// 배관 사이징을 수행한다.
///
/// 1. 입력을 SI로 정규화
/// 2. 재질 조도/물성 해석 (재질 미해석 시 즉시 중단)
/// 3. 표준 구경별 유속·Re·마찰계수·압력손실 계산
/// 4. 첫 번째 최적(optimal) 구경 추천, 없으면 유속이 1.5 m/s에 가장 가까운 구경
pub fn calculate_pipe_sizing(input: SizingInput) -> Result<SizingResult, SizingError> {
    let flow_m3_s = match input.unit_system {
        UnitSystem::Metric => conversion::liters_per_sec_to_m3_per_sec(input.flow_rate),
        UnitSystem::Imperial => conversion::gpm_to_m3_per_sec(input.flow_rate),
    };
    let pipe_length_m = match input.unit_system {
        UnitSystem::Metric => input.pipe_length,
        UnitSystem::Imperial => conversion::feet_to_meters(input.pipe_length),
    };

    let material = material_db::find_material(&input.pipe_material)
        .ok_or_else(|| SizingError::UnknownMaterial(input.pipe_material.clone()))?;
    let roughness_m = material.roughness_mm / 1000.0;

    let fluid = water_properties::water_properties(input.fluid_temperature_c);

    let all_sizes: Vec<SizeRow> = pipe_catalog::pipe_sizes()
        .iter()
        .map(|pipe| {
            let diameter_m = pipe.inner_diameter_mm / 1000.0;
            let velocity = velocity_from_flow(flow_m3_s, diameter_m);
            let re = reynolds_number(
                fluid.density_kg_per_m3,
                velocity,
                diameter_m,
                fluid.viscosity_pa_s,
            );
            let f = if re > 0.0 {
                friction_factor(re, roughness_m, diameter_m)
            } else {
                0.0
            };
            let dp_per_meter = if diameter_m > 0.0 && velocity > 0.0 {
                darcy_weisbach_pressure_drop(f, 1.0, diameter_m, fluid.density_kg_per_m3, velocity)
            } else {
                0.0
            };
            let dp_total = dp_per_meter * pipe_length_m;

            SizeRow {
                nps: pipe.nps,
                dn: pipe.dn,
                outer_diameter_mm: pipe.outer_diameter_mm,
                wall_thickness_mm: pipe.wall_thickness_mm,
                inner_diameter_mm: pipe.inner_diameter_mm,
                velocity_m_per_s: velocity,
                reynolds_number: re,
                friction_factor: f,
                pressure_drop_per_meter: dp_per_meter,
                pressure_drop_total: dp_total,
                velocity_flag: classify_velocity(velocity),
            }
        })
        .collect();

    // 추천: 내경 오름차순에서 첫 번째 최적 구경.
    // 최적이 없으면 유속이 1.5 m/s에 가장 가까운 구경 (동률이면 먼저 나온 쪽).
    let recommended_index = match all_sizes
        .iter()
        .position(|row| row.velocity_flag == VelocityFlag::Optimal)
    {
        Some(i) => i,
        None => {
            let mut best = 0;
            for (i, current) in all_sizes.iter().enumerate().skip(1) {
                if (current.velocity_m_per_s - OPTIMAL_MID_VELOCITY).abs()
                    < (all_sizes[best].velocity_m_per_s - OPTIMAL_MID_VELOCITY).abs()
                {
                    best = i;
                }
            }
            best
        }
    };
    let recommended = all_sizes[recommended_index].clone();

    let mut assumptions = vec![
        "배관 스케줄: Schedule 40 (ASME B36.10M)".to_string(),
        format!(
            "배관 재질: {} (ε = {} mm)",
            material.name, material.roughness_mm
        ),
        format!("물 온도: {} °C", input.fluid_temperature_c),
        format!("물 밀도: {:.2} kg/m³", fluid.density_kg_per_m3),
        format!("물 점도: {:.1} × 10⁻⁶ Pa·s", fluid.viscosity_pa_s * 1e6),
        "계산 방법: Darcy-Weisbach + Colebrook-White 마찰계수".to_string(),
        "최적 유속 범위: 1.0–2.5 m/s".to_string(),
        "압력손실은 직관 기준 (피팅·밸브 제외)".to_string(),
    ];

    let transitional: Vec<&str> = all_sizes
        .iter()
        .filter(|row| row.reynolds_number > 2300.0 && row.reynolds_number < 4000.0)
        .map(|row| row.nps)
        .collect();
    if !transitional.is_empty() {
        assumptions.push(format!(
            "참고: 일부 구경({})의 레이놀즈수가 천이영역(2300–4000)에 있어 결과 정확도가 낮을 수 있습니다.",
            transitional.join(", ")
        ));
    }

    Ok(SizingResult {
        recommended,
        recommended_index,
        all_sizes,
        fluid_properties: fluid,
        assumptions,
        calculator_version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        input_summary: InputSummary {
            flow_rate: input.flow_rate,
            flow_rate_unit: input.unit_system.flow_unit(),
            fluid_temperature_c: input.fluid_temperature_c,
            pipe_material: input.pipe_material,
            pipe_roughness_mm: material.roughness_mm,
            pipe_length: input.pipe_length,
            pipe_length_unit: input.unit_system.length_unit(),
            unit_system: input.unit_system,
        },
    })
}
