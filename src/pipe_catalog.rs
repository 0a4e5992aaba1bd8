//! ASME B36.10M (탄소강) Schedule 40 표준 배관 치수 카탈로그.
//! NPS 1/2" ~ 24" (DN 15 ~ DN 600)을 내경 오름차순으로 수록한다.

/// 표준 배관 한 규격.
#[derive(Debug, Clone, Copy)]
pub struct StandardPipeSize {
    /// NPS 호칭 (예: "1-1/4")
    pub nps: &'static str,
    /// DN 호칭 [mm]
    pub dn: u32,
    /// 외경 [mm]
    pub outer_diameter_mm: f64,
    /// Schedule 40 두께 [mm]
    pub wall_thickness_mm: f64,
    /// 내경 [mm] (OD - 2t, 표준표 값 그대로 수록)
    pub inner_diameter_mm: f64,
}

const fn ps(
    nps: &'static str,
    dn: u32,
    outer_diameter_mm: f64,
    wall_thickness_mm: f64,
    inner_diameter_mm: f64,
) -> StandardPipeSize {
    StandardPipeSize {
        nps,
        dn,
        outer_diameter_mm,
        wall_thickness_mm,
        inner_diameter_mm,
    }
}

const STANDARD_PIPE_SIZES: &[StandardPipeSize] = &[
    ps("1/2", 15, 21.3, 2.77, 15.76),
    ps("3/4", 20, 26.7, 2.87, 20.96),
    ps("1", 25, 33.4, 3.38, 26.64),
    ps("1-1/4", 32, 42.2, 3.56, 35.08),
    ps("1-1/2", 40, 48.3, 3.68, 40.94),
    ps("2", 50, 60.3, 3.91, 52.48),
    ps("2-1/2", 65, 73.0, 5.16, 62.68),
    ps("3", 80, 88.9, 5.49, 77.92),
    ps("3-1/2", 90, 101.6, 5.74, 90.12),
    ps("4", 100, 114.3, 6.02, 102.26),
    ps("5", 125, 141.3, 6.55, 128.20),
    ps("6", 150, 168.3, 7.11, 154.08),
    ps("8", 200, 219.1, 8.18, 202.74),
    ps("10", 250, 273.1, 9.27, 254.56),
    ps("12", 300, 323.9, 10.31, 303.28),
    ps("14", 350, 355.6, 11.13, 333.34),
    ps("16", 400, 406.4, 12.70, 381.00),
    ps("18", 450, 457.2, 14.27, 428.66),
    ps("20", 500, 508.0, 15.09, 477.82),
    ps("24", 600, 609.6, 17.48, 574.64),
];

/// 표준 배관 카탈로그를 내경 오름차순으로 반환한다.
/// 순회 순서가 곧 "가장 작은 적합 배관 우선" 선택 규칙의 근거이다.
pub fn pipe_sizes() -> &'static [StandardPipeSize] {
    STANDARD_PIPE_SIZES
}
