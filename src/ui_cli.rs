use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::export;
use crate::material_db;
use crate::sizing::{self, SizingInput, SizingResult, UnitSystem, VelocityFlag};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PipeSizing,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Pipe Sizing Toolbox ===");
    println!("1) 배관 사이징 계산");
    println!("2) 단위 변환기");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PipeSizing),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 배관 사이징 메뉴를 처리한다.
pub fn handle_pipe_sizing(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 배관 사이징 (물, Schedule 40) --");
    let flow_unit = cfg.unit_system.flow_unit();
    let length_unit = cfg.unit_system.length_unit();

    let flow_rate = read_f64_or(&format!("유량 [{flow_unit}] (기본 2.0): "), 2.0)?;
    let temperature = read_f64_or("물 온도 [°C] (기본 20): ", 20.0)?;
    let material = read_material()?;
    let length = read_f64_or(&format!("배관 길이 [{length_unit}] (기본 100): "), 100.0)?;

    let result = sizing::calculate_pipe_sizing(SizingInput {
        flow_rate,
        fluid_temperature_c: temperature,
        pipe_material: material.to_string(),
        pipe_length: length,
        unit_system: cfg.unit_system,
    })?;

    print_result(&result, cfg.unit_system);

    let path = read_line("CSV로 저장할 경로 (건너뛰려면 엔터): ")?;
    let path = path.trim();
    if !path.is_empty() {
        let csv = export::table_csv(&result, cfg.unit_system);
        std::fs::write(path, csv)?;
        println!("저장 완료: {path}");
    }
    Ok(())
}

fn read_material() -> Result<&'static str, AppError> {
    println!("배관 재질:");
    for (i, m) in material_db::materials().iter().enumerate() {
        println!("{}) {} (ε = {} mm)", i + 1, m.name, m.roughness_mm);
    }
    loop {
        let sel = read_line("재질 번호 (기본 1): ")?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(material_db::materials()[0].id);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= material_db::materials().len() {
                return Ok(material_db::materials()[n - 1].id);
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

/// 사이징 결과를 표와 함께 출력한다.
pub fn print_result(result: &SizingResult, unit_system: UnitSystem) {
    let rec = &result.recommended;
    println!("\n추천 구경: NPS {} (DN {})", rec.nps, rec.dn);
    println!(
        "유속 {:.2} m/s, Re={:.3e}, f={:.4}",
        rec.velocity_m_per_s, rec.reynolds_number, rec.friction_factor
    );
    println!(
        "압력손실 {:.1} Pa/m, 합계 {:.3} kPa",
        rec.pressure_drop_per_meter,
        rec.pressure_drop_total / 1000.0
    );
    println!(
        "물성: 밀도 {:.2} kg/m³, 점도 {:.6} Pa·s",
        result.fluid_properties.density_kg_per_m3, result.fluid_properties.viscosity_pa_s
    );

    let (id_unit, vel_unit, dp_unit, dp_total_unit) = match unit_system {
        UnitSystem::Metric => ("mm", "m/s", "Pa/m", "Pa"),
        UnitSystem::Imperial => ("in", "ft/s", "psi/100ft", "psi"),
    };
    println!(
        "\n{:<6} {:>4} {:>10} {:>10} {:>12} {:>8} {:>12} {:>12}  판정",
        "NPS",
        "DN",
        format!("ID[{id_unit}]"),
        format!("v[{vel_unit}]"),
        "Re",
        "f",
        format!("ΔP[{dp_unit}]"),
        format!("ΔP계[{dp_total_unit}]"),
    );
    for (i, row) in result.all_sizes.iter().enumerate() {
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
        let marker = if i == result.recommended_index { "*" } else { " " };
        println!(
            "{marker}{:<5} {:>4} {:>10.2} {:>10.3} {:>12.0} {:>8.4} {:>12.4} {:>12.1}  {}",
            row.nps,
            row.dn,
            id,
            velocity,
            row.reynolds_number,
            row.friction_factor,
            dp,
            dp_total,
            flag_label(row.velocity_flag),
        );
    }

    println!("\n가정 및 참고:");
    for note in &result.assumptions {
        println!("- {note}");
    }
}

fn flag_label(flag: VelocityFlag) -> &'static str {
    match flag {
        VelocityFlag::Low => "낮음",
        VelocityFlag::AcceptableLow => "다소 낮음",
        VelocityFlag::Optimal => "최적",
        VelocityFlag::AcceptableHigh => "다소 높음",
        VelocityFlag::High => "높음",
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(_cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!(" 1) L/s → m³/s        2) m³/s → L/s");
    println!(" 3) GPM → m³/s        4) m³/s → GPM");
    println!(" 5) ft → m            6) m → ft");
    println!(" 7) in → mm           8) mm → in");
    println!(" 9) ft/s → m/s       10) m/s → ft/s");
    println!("11) psi → Pa         12) Pa → psi");
    println!("13) psi/100ft → Pa/m 14) Pa/m → psi/100ft");
    let sel = read_line("항목 번호를 입력: ")?;
    let convert: fn(f64) -> f64 = match sel.trim() {
        "1" => conversion::liters_per_sec_to_m3_per_sec,
        "2" => conversion::m3_per_sec_to_liters_per_sec,
        "3" => conversion::gpm_to_m3_per_sec,
        "4" => conversion::m3_per_sec_to_gpm,
        "5" => conversion::feet_to_meters,
        "6" => conversion::meters_to_feet,
        "7" => conversion::inches_to_mm,
        "8" => conversion::mm_to_inches,
        "9" => conversion::fps_to_mps,
        "10" => conversion::mps_to_fps,
        "11" => conversion::psi_to_pa,
        "12" => conversion::pa_to_psi,
        "13" => conversion::psi_per_100ft_to_pa_per_m,
        "14" => conversion::pa_per_m_to_psi_per_100ft,
        _ => {
            println!("지원하지 않는 번호입니다.");
            return Ok(());
        }
    };
    let value = read_f64("값 입력: ")?;
    println!("변환 결과: {}", convert(value));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 단위계: {:?}", cfg.unit_system);
    println!("1) Metric (L/s, m)  2) Imperial (GPM, ft)");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::Metric,
        "2" => UnitSystem::Imperial,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            cfg.unit_system
        }
    };
    println!("단위계가 {:?} 로 설정되었습니다.", cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_or(prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
