//! CSV loaders for the three source tables.
//!
//! Each table is UTF-8 CSV with a header row; columns are matched by header
//! name and extra columns are ignored:
//!
//! ```csv
//! 사업장명,의료기관종별명,진료과목내용명,도로명전체주소,상세영업상태명
//! 한빛의원,의원,"내과,가정의학과",대전광역시 서구 관저동 99,영업중
//! ```

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::dataset::record::{DiseaseRecord, HospitalRecord};
use crate::error::{CarematchError, Result};
use crate::synonym::SynonymEntry;

#[derive(Debug, Deserialize)]
struct HospitalRow {
    #[serde(rename = "사업장명", default)]
    name: String,
    #[serde(rename = "의료기관종별명", default)]
    facility_type: String,
    #[serde(rename = "진료과목내용명", default)]
    departments: String,
    #[serde(rename = "도로명전체주소", default)]
    location: String,
    #[serde(rename = "상세영업상태명", default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct DiseaseRow {
    #[serde(rename = "주요 증상", default)]
    symptoms: String,
    #[serde(rename = "추천 진료과", default)]
    departments: String,
}

#[derive(Debug, Deserialize)]
struct SynonymRow {
    #[serde(rename = "표준 증상명", default)]
    standard: String,
    #[serde(rename = "유사어 예시", default)]
    similar_terms: String,
}

/// Deserialize every row of a CSV table.
fn read_rows<T: DeserializeOwned, R: Read>(mut reader: R, table: &str) -> Result<Vec<T>> {
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(|e| {
        CarematchError::dataset(format!("Failed to read {table} table as UTF-8: {e}"))
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (line, record) in csv_reader.deserialize().enumerate() {
        let row: T = record.map_err(|e| {
            CarematchError::dataset(format!("Invalid {table} row {}: {e}", line + 1))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Attach the file path to dataset errors raised while parsing `path`.
fn in_file(path: &Path) -> impl FnOnce(CarematchError) -> CarematchError + '_ {
    move |e| match e {
        CarematchError::Dataset(message) => {
            CarematchError::dataset(format!("{message} in '{}'", path.display()))
        }
        other => other,
    }
}

fn open(path: &Path, table: &str) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| {
        CarematchError::dataset(format!(
            "Failed to open {table} table '{}': {e}",
            path.display()
        ))
    })
}

/// Load hospitals, keeping only rows whose status equals `active_status`.
pub fn load_hospitals<R: Read>(reader: R, active_status: &str) -> Result<Vec<HospitalRecord>> {
    let rows: Vec<HospitalRow> = read_rows(reader, "hospital")?;
    let total = rows.len();

    let hospitals: Vec<HospitalRecord> = rows
        .into_iter()
        .filter(|row| row.status.trim() == active_status)
        .map(|row| {
            HospitalRecord::from_raw(&row.name, &row.facility_type, &row.departments, &row.location)
        })
        .collect();

    debug!(
        "Dropped {} hospitals not in status '{active_status}'",
        total - hospitals.len()
    );
    Ok(hospitals)
}

/// Load the disease-to-department table.
pub fn load_diseases<R: Read>(reader: R) -> Result<Vec<DiseaseRecord>> {
    let rows: Vec<DiseaseRow> = read_rows(reader, "disease")?;
    Ok(rows
        .iter()
        .map(|row| DiseaseRecord::from_raw(&row.symptoms, &row.departments))
        .collect())
}

/// Load the synonym table.
pub fn load_synonyms<R: Read>(reader: R) -> Result<Vec<SynonymEntry>> {
    let rows: Vec<SynonymRow> = read_rows(reader, "synonym")?;
    Ok(rows
        .into_iter()
        .map(|row| SynonymEntry::new(row.standard, row.similar_terms))
        .collect())
}

/// Load hospitals from a file.
pub fn read_hospitals<P: AsRef<Path>>(path: P, active_status: &str) -> Result<Vec<HospitalRecord>> {
    let path = path.as_ref();
    let hospitals =
        load_hospitals(open(path, "hospital")?, active_status).map_err(in_file(path))?;
    info!("Loaded {} active hospitals from {}", hospitals.len(), path.display());
    Ok(hospitals)
}

/// Load the disease table from a file.
pub fn read_diseases<P: AsRef<Path>>(path: P) -> Result<Vec<DiseaseRecord>> {
    let path = path.as_ref();
    let diseases = load_diseases(open(path, "disease")?).map_err(in_file(path))?;
    info!("Loaded {} disease records from {}", diseases.len(), path.display());
    Ok(diseases)
}

/// Load the synonym table from a file.
pub fn read_synonyms<P: AsRef<Path>>(path: P) -> Result<Vec<SynonymEntry>> {
    let path = path.as_ref();
    let synonyms = load_synonyms(open(path, "synonym")?).map_err(in_file(path))?;
    info!("Loaded {} synonym rows from {}", synonyms.len(), path.display());
    Ok(synonyms)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const HOSPITALS: &str = "\u{feff}번호,사업장명,의료기관종별명,진료과목내용명,도로명전체주소,상세영업상태명\n\
        1,한빛의원,의원,\"내과(일반),가정의학과\",대전광역시 서구 관저동 99,영업중\n\
        2,닫힌의원,의원,내과,대전광역시 서구 관저동 1,폐업\n\
        3,충남대학교병원,상급종합병원,\"내과,외과\",대전광역시 중구 문화로 282,영업중\n";

    #[test]
    fn test_load_hospitals_filters_status() {
        let hospitals = load_hospitals(HOSPITALS.as_bytes(), "영업중").unwrap();

        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].name, "한빛의원");
        assert_eq!(hospitals[0].facility_type, "의원");
        assert_eq!(
            hospitals[0].departments,
            BTreeSet::from(["내과".to_string(), "가정의학과".to_string()])
        );
        assert_eq!(hospitals[0].raw_location, "대전광역시 서구 관저동 99");
        assert_eq!(hospitals[1].name, "충남대학교병원");
    }

    #[test]
    fn test_load_diseases() {
        let csv = "질병명,주요 증상,추천 진료과\n편두통,\"두통, 구토\",\"신경과(두통클리닉), 내과\"\n";
        let diseases = load_diseases(csv.as_bytes()).unwrap();

        assert_eq!(diseases.len(), 1);
        assert_eq!(diseases[0].symptoms, vec!["두통", "구토"]);
        assert!(diseases[0].departments.contains("신경과"));
    }

    #[test]
    fn test_load_synonyms_missing_cell() {
        let csv = "표준 증상명,유사어 예시\n두통,\"머리아픔, 골치\"\n기침,\n";
        let synonyms = load_synonyms(csv.as_bytes()).unwrap();

        assert_eq!(synonyms.len(), 2);
        assert_eq!(synonyms[0].terms().collect::<Vec<_>>(), vec!["머리아픔", "골치"]);
        assert_eq!(synonyms[1].terms().count(), 0);
    }

    #[test]
    fn test_ragged_row_is_dataset_error() {
        let csv = "표준 증상명,유사어 예시\n두통,머리아픔,extra\n";
        let result = load_synonyms(csv.as_bytes());
        assert!(matches!(result, Err(CarematchError::Dataset(_))));
    }

    #[test]
    fn test_non_utf8_file_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hospital_data_cp949.csv");
        // "사업장명" in CP949.
        std::fs::write(&path, b"\xbb\xe7\xbe\xf7\xc0\xe5\xb8\xed\n").unwrap();

        let err = read_hospitals(&path, "영업중").unwrap_err();
        assert!(matches!(err, CarematchError::Dataset(_)));
        assert!(err.to_string().contains("hospital_data_cp949.csv"));
    }

    #[test]
    fn test_bad_row_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("synonym_normalized.csv");
        std::fs::write(&path, "표준 증상명,유사어 예시\n두통,머리아픔,extra\n").unwrap();

        let err = read_synonyms(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"));
        assert!(err.to_string().contains("synonym_normalized.csv"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_diseases("/nonexistent/disease_name.csv").unwrap_err();
        assert!(err.to_string().contains("disease_name.csv"));
    }
}
