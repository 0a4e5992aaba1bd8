//! 물 배관 사이징 계산 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 추후 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod export;
pub mod friction;
pub mod hydraulics;
pub mod material_db;
pub mod pipe_catalog;
pub mod sizing;
pub mod ui_cli;
pub mod water_properties;
