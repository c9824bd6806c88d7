//! Immutable repository of the loaded tables.

use log::info;

use crate::config::DatasetPaths;
use crate::dataset::loader;
use crate::dataset::record::{DiseaseRecord, HospitalRecord};
use crate::error::Result;
use crate::synonym::{SynonymEntry, SynonymIndex};

/// All source data the engine reads, built once at startup.
///
/// The repository is never mutated after construction and is shared by
/// reference across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    diseases: Vec<DiseaseRecord>,
    hospitals: Vec<HospitalRecord>,
    synonyms: SynonymIndex,
}

impl Repository {
    /// Assemble a repository from already-loaded records.
    pub fn new(
        diseases: Vec<DiseaseRecord>,
        hospitals: Vec<HospitalRecord>,
        synonym_entries: &[SynonymEntry],
    ) -> Self {
        Repository {
            diseases,
            hospitals,
            synonyms: SynonymIndex::from_entries(synonym_entries),
        }
    }

    /// Load all three tables from disk.
    pub fn load(paths: &DatasetPaths, active_status: &str) -> Result<Self> {
        let hospitals = loader::read_hospitals(&paths.hospitals, active_status)?;
        let diseases = loader::read_diseases(&paths.diseases)?;
        let synonyms = loader::read_synonyms(&paths.synonyms)?;

        let repository = Self::new(diseases, hospitals, &synonyms);
        info!(
            "Repository ready: {} hospitals, {} diseases, {} synonym terms",
            repository.hospitals.len(),
            repository.diseases.len(),
            repository.synonyms.len()
        );
        Ok(repository)
    }

    pub fn diseases(&self) -> &[DiseaseRecord] {
        &self.diseases
    }

    pub fn hospitals(&self) -> &[HospitalRecord] {
        &self.hospitals
    }

    pub fn synonyms(&self) -> &SynonymIndex {
        &self.synonyms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_synonym_index() {
        let repository = Repository::new(
            vec![DiseaseRecord::from_raw("두통", "신경과")],
            vec![],
            &[SynonymEntry::new("두통", "머리아픔, 골치")],
        );

        assert_eq!(repository.diseases().len(), 1);
        assert!(repository.hospitals().is_empty());
        assert!(repository.synonyms().contains("골치"));
    }

    #[test]
    fn test_load_propagates_missing_table() {
        let paths = DatasetPaths {
            hospitals: "/nonexistent/hospital_data.csv".into(),
            diseases: "/nonexistent/disease_name.csv".into(),
            synonyms: "/nonexistent/synonym_normalized.csv".into(),
        };
        assert!(Repository::load(&paths, "영업중").is_err());
    }
}
