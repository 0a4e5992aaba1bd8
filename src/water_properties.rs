//! 물 물성(밀도, 동점도) 테이블과 선형 보간.
//! 출처: NIST Standard Reference Data, 대기압 기준 0~100 °C.

/// 온도별 물성 샘플 한 점.
#[derive(Debug, Clone, Copy)]
pub struct WaterSample {
    pub temp_c: f64,
    pub density_kg_per_m3: f64,
    pub viscosity_pa_s: f64,
}

impl WaterSample {
    pub const fn new(temp_c: f64, density_kg_per_m3: f64, viscosity_pa_s: f64) -> Self {
        Self {
            temp_c,
            density_kg_per_m3,
            viscosity_pa_s,
        }
    }
}

/// 특정 온도에서 보간된 물 물성.
#[derive(Debug, Clone, Copy)]
pub struct WaterProperties {
    /// 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    /// 동점도 [Pa·s]
    pub viscosity_pa_s: f64,
}

const WATER_TABLE: &[WaterSample] = &[
    ws(0.0, 999.84, 0.001792),
    ws(5.0, 999.97, 0.001519),
    ws(10.0, 999.70, 0.001307),
    ws(15.0, 999.10, 0.001138),
    ws(20.0, 998.21, 0.001002),
    ws(25.0, 997.05, 0.000890),
    ws(30.0, 995.65, 0.000798),
    ws(35.0, 994.03, 0.000720),
    ws(40.0, 992.22, 0.000653),
    ws(45.0, 990.21, 0.000596),
    ws(50.0, 988.07, 0.000547),
    ws(55.0, 985.69, 0.000504),
    ws(60.0, 983.20, 0.000467),
    ws(65.0, 980.55, 0.000434),
    ws(70.0, 977.76, 0.000404),
    ws(75.0, 974.84, 0.000378),
    ws(80.0, 971.79, 0.000355),
    ws(85.0, 968.61, 0.000334),
    ws(90.0, 965.31, 0.000315),
    ws(95.0, 961.89, 0.000298),
    ws(100.0, 958.37, 0.000282),
];

const fn ws(temp_c: f64, density_kg_per_m3: f64, viscosity_pa_s: f64) -> WaterSample {
    WaterSample::new(temp_c, density_kg_per_m3, viscosity_pa_s)
}

/// 물성 테이블 전체를 반환한다.
pub fn samples() -> &'static [WaterSample] {
    WATER_TABLE
}

/// 주어진 온도의 물 밀도/점도를 선형 보간으로 구한다.
/// 온도는 테이블 범위 [0, 100] °C로 클램프한다.
pub fn water_properties(temp_c: f64) -> WaterProperties {
    let t = temp_c.clamp(0.0, 100.0);

    let first = WATER_TABLE[0];
    let last = WATER_TABLE[WATER_TABLE.len() - 1];
    if t <= first.temp_c {
        return props_of(first);
    }
    if t >= last.temp_c {
        return props_of(last);
    }

    for win in WATER_TABLE.windows(2) {
        let lo = win[0];
        let hi = win[1];
        if t >= lo.temp_c && t <= hi.temp_c {
            // 샘플 온도와 일치하면 보간 없이 테이블 값을 그대로 반환한다.
            if t == lo.temp_c {
                return props_of(lo);
            }
            let frac = (t - lo.temp_c) / (hi.temp_c - lo.temp_c);
            return WaterProperties {
                density_kg_per_m3: lo.density_kg_per_m3
                    + frac * (hi.density_kg_per_m3 - lo.density_kg_per_m3),
                viscosity_pa_s: lo.viscosity_pa_s
                    + frac * (hi.viscosity_pa_s - lo.viscosity_pa_s),
            };
        }
    }

    // 클램프 이후에는 도달 불가. 혹시 모를 경우 마지막 샘플로 귀결한다.
    props_of(last)
}

fn props_of(sample: WaterSample) -> WaterProperties {
    WaterProperties {
        density_kg_per_m3: sample.density_kg_per_m3,
        viscosity_pa_s: sample.viscosity_pa_s,
    }
}
