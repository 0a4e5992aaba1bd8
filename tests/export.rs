//! 결과 표 내보내기 테스트.
use pipe_sizing_toolbox::export::{round_sig_figs, table_csv, table_tsv};
use pipe_sizing_toolbox::sizing::{calculate_pipe_sizing, SizingInput, UnitSystem};

fn result(unit_system: UnitSystem) -> pipe_sizing_toolbox::sizing::SizingResult {
    calculate_pipe_sizing(SizingInput {
        flow_rate: 2.0,
        fluid_temperature_c: 20.0,
        pipe_material: "commercial-steel".to_string(),
        pipe_length: 100.0,
        unit_system,
    })
    .expect("sizing")
}

#[test]
fn round_sig_figs_basics() {
    assert_eq!(round_sig_figs(0.0, 4), 0.0);
    assert_eq!(round_sig_figs(123.456, 4), 123.5);
    assert_eq!(round_sig_figs(0.0012345, 3), 0.00123);
    assert!((round_sig_figs(-987.65, 2) + 990.0).abs() < 1e-9);
}

#[test]
fn csv_has_header_and_one_line_per_size() {
    let csv = table_csv(&result(UnitSystem::Metric), UnitSystem::Metric);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].starts_with("NPS,DN,"));
    assert!(lines[0].contains("mm"));
    assert!(lines[0].contains("Pa/m"));
}

#[test]
fn exactly_one_row_is_marked_recommended() {
    let csv = table_csv(&result(UnitSystem::Metric), UnitSystem::Metric);
    let marked = csv.lines().skip(1).filter(|l| l.ends_with(",*")).count();
    assert_eq!(marked, 1);

    let tsv = table_tsv(&result(UnitSystem::Metric), UnitSystem::Metric);
    let marked = tsv.lines().skip(1).filter(|l| l.ends_with("\t*")).count();
    assert_eq!(marked, 1);
}

#[test]
fn imperial_export_reconverts_units() {
    let res = result(UnitSystem::Imperial);
    let csv = table_csv(&res, UnitSystem::Imperial);
    let header = csv.lines().next().expect("header");
    assert!(header.contains("in"));
    assert!(header.contains("ft/s"));
    assert!(header.contains("psi/100ft"));

    // 첫 행의 내경은 15.76 mm ≈ 0.6205 in
    let first = csv.lines().nth(1).expect("row");
    let id_in: f64 = first.split(',').nth(2).expect("id").parse().expect("f64");
    assert!((id_in - 0.6205).abs() < 0.001, "id_in={id_in}");
}

#[test]
fn classification_column_uses_closed_vocabulary() {
    let csv = table_csv(&result(UnitSystem::Metric), UnitSystem::Metric);
    for line in csv.lines().skip(1) {
        let flag = line.split(',').nth(8).expect("flag");
        assert!(
            matches!(
                flag,
                "low" | "acceptable-low" | "optimal" | "acceptable-high" | "high"
            ),
            "flag={flag}"
        );
    }
}
