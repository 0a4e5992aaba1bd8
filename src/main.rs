use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pipe_sizing_toolbox::{app, config, export, sizing, ui_cli};

#[derive(Parser)]
#[command(name = "pipe_sizing_toolbox", about = "물 배관 사이징 계산기")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 한 번에 사이징을 계산한다.
    Size {
        /// 유량 (metric: L/s, imperial: GPM)
        #[arg(long)]
        flow: f64,
        /// 물 온도 [°C]
        #[arg(long, default_value_t = 20.0)]
        temp: f64,
        /// 배관 재질 id (예: commercial-steel)
        #[arg(long, default_value = "commercial-steel")]
        material: String,
        /// 배관 길이 (metric: m, imperial: ft)
        #[arg(long)]
        length: f64,
        /// 단위계 (metric | imperial). 생략 시 config.toml 값 사용.
        #[arg(long)]
        units: Option<String>,
        /// 결과 표를 CSV로 저장할 경로
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command {
        Some(Command::Size {
            flow,
            temp,
            material,
            length,
            units,
            csv,
        }) => {
            let unit_system = match units {
                Some(s) => s.parse()?,
                None => cfg.unit_system,
            };
            let result = sizing::calculate_pipe_sizing(sizing::SizingInput {
                flow_rate: flow,
                fluid_temperature_c: temp,
                pipe_material: material,
                pipe_length: length,
                unit_system,
            })?;
            ui_cli::print_result(&result, unit_system);
            if let Some(path) = csv {
                std::fs::write(&path, export::table_csv(&result, unit_system))?;
                println!("저장 완료: {}", path.display());
            }
        }
        None => app::run(&mut cfg)?,
    }
    Ok(())
}
