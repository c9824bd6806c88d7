//! Loading the source tables from disk and answering requests over them.

use std::fs;
use std::path::Path;

use carematch::config::{DatasetPaths, EngineConfig};
use carematch::error::{CarematchError, Result};
use carematch::recommend::{RecommendRequest, Recommender};
use tempfile::TempDir;

const HOSPITALS: &str = "\
번호,사업장명,의료기관종별명,진료과목내용명,도로명전체주소,상세영업상태명
1,관저신경과의원,의원,\"신경과,재활의학과\",대전광역시 서구 관저동 99,영업중
2,관저옛날신경과의원,의원,신경과,대전광역시 서구 관저동 98,폐업
3,충남대학교병원,상급종합병원,\"내과,신경과\",대전광역시 중구 문화로 282,영업중
";

const DISEASES: &str = "\
질병명,주요 증상,추천 진료과
편두통,\"두통, 구토\",\"신경과(두통), 내과\"
";

const SYNONYMS: &str = "\
표준 증상명,유사어 예시
두통,\"머리아픔, 골치\"
";

fn write_tables(dir: &Path) -> DatasetPaths {
    let paths = DatasetPaths {
        hospitals: dir.join("hospital_data.csv"),
        diseases: dir.join("disease_name.csv"),
        synonyms: dir.join("synonym_normalized.csv"),
    };
    fs::write(&paths.hospitals, HOSPITALS).unwrap();
    fs::write(&paths.diseases, format!("\u{feff}{DISEASES}")).unwrap();
    fs::write(&paths.synonyms, SYNONYMS).unwrap();
    paths
}

#[test]
fn test_from_config_loads_active_hospitals() -> Result<()> {
    let dir = TempDir::new()?;
    let config = EngineConfig {
        datasets: write_tables(dir.path()),
        ..EngineConfig::default()
    };

    let recommender = Recommender::from_config(&config)?;
    assert_eq!(recommender.repository().hospitals().len(), 2);
    assert_eq!(recommender.repository().diseases().len(), 1);
    assert!(recommender.repository().synonyms().contains("골치"));

    let response = recommender.recommend(&RecommendRequest::new("골치", "대전 서구 관저동"));
    let names: Vec<_> = response
        .recommendations()
        .iter()
        .filter_map(|r| r.name.as_deref())
        .collect();
    assert_eq!(names, vec!["관저신경과의원"]);

    Ok(())
}

#[test]
fn test_config_file_with_scores() -> Result<()> {
    let dir = TempDir::new()?;
    let datasets = write_tables(dir.path());
    let scores = dir.path().join("scores.json");
    fs::write(&scores, r#"{"머리아픔": 1.0}"#)?;

    let config_path = dir.path().join("carematch.json");
    let config = EngineConfig {
        datasets,
        tokenizer_scores: Some(scores),
        ..EngineConfig::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    let loaded = EngineConfig::load(&config_path)?;
    assert_eq!(loaded, config);

    let recommender = Recommender::from_config(&loaded)?;
    let departments = recommender.resolve_departments("머리아픔이 있어요")?;
    assert!(departments.contains("신경과"));
    assert!(departments.contains("내과"));

    Ok(())
}

#[test]
fn test_missing_table_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let mut datasets = write_tables(dir.path());
    datasets.synonyms = dir.path().join("missing.csv");

    let config = EngineConfig {
        datasets,
        ..EngineConfig::default()
    };
    match Recommender::from_config(&config) {
        Err(CarematchError::Dataset(message)) => assert!(message.contains("missing.csv")),
        other => panic!("expected dataset error, got {other:?}"),
    }
}

#[test]
fn test_custom_active_status() -> Result<()> {
    let dir = TempDir::new()?;
    let config = EngineConfig {
        datasets: write_tables(dir.path()),
        active_status: "폐업".to_string(),
        ..EngineConfig::default()
    };

    let recommender = Recommender::from_config(&config)?;
    assert_eq!(recommender.repository().hospitals().len(), 1);
    assert_eq!(
        recommender.repository().hospitals()[0].name,
        "관저옛날신경과의원"
    );
    Ok(())
}
