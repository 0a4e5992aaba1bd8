//! 배관 재질별 절대조도(ε) 테이블.
//! 값은 Cameron Hydraulic Data, Crane TP-410 등 일반 참고문헌 기준이다.

/// 배관 재질 한 항목.
#[derive(Debug, Clone, Copy)]
pub struct PipeMaterial {
    pub id: &'static str,
    pub name: &'static str,
    /// 절대조도 [mm]
    pub roughness_mm: f64,
}

const MATERIALS: &[PipeMaterial] = &[
    PipeMaterial {
        id: "commercial-steel",
        name: "Commercial Steel / Welded Steel",
        roughness_mm: 0.045,
    },
    PipeMaterial {
        id: "galvanized-steel",
        name: "Galvanized Steel",
        roughness_mm: 0.15,
    },
    PipeMaterial {
        id: "cast-iron",
        name: "Cast Iron",
        roughness_mm: 0.26,
    },
    PipeMaterial {
        id: "ductile-iron",
        name: "Ductile Iron (lined)",
        roughness_mm: 0.025,
    },
    PipeMaterial {
        id: "copper",
        name: "Copper / Brass",
        roughness_mm: 0.0015,
    },
    PipeMaterial {
        id: "stainless-steel",
        name: "Stainless Steel",
        roughness_mm: 0.015,
    },
    PipeMaterial {
        id: "pvc",
        name: "PVC / Plastic",
        roughness_mm: 0.0015,
    },
    PipeMaterial {
        id: "concrete",
        name: "Concrete",
        roughness_mm: 0.3,
    },
];

/// 재질 테이블 전체를 반환한다.
pub fn materials() -> &'static [PipeMaterial] {
    MATERIALS
}

/// id로 재질을 찾는다. 일치하는 항목이 없으면 `None`을 반환하며,
/// 기본값으로 대체하지 않는다.
pub fn find_material(id: &str) -> Option<&'static PipeMaterial> {
    MATERIALS.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}
