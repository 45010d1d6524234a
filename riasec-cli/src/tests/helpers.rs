//! Test helpers for laying out answers and catalog files on disk.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use riasec_core::partition::{self, QUESTION_COUNT};
use riasec_core::{Catalog, Category, OccupationRecord, ReferenceProfile, ReferenceTable};
use tempfile::TempDir;

pub(super) const CARPENTER: &str = "47-2031.00";
pub(super) const BOOKKEEPER: &str = "43-3031.00";
pub(super) const COUNSELOR: &str = "21-1012.00";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory addressed through a UTF-8 path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Answers that strongly like every realistic item and dislike the rest.
pub(super) fn realistic_answers() -> Vec<i64> {
    let mut answers = vec![0; QUESTION_COUNT];
    for &position in partition::positions(Category::Realistic) {
        if let Some(slot) = answers.get_mut(position - 1) {
            *slot = 4;
        }
    }
    answers
}

pub(super) fn write_answers(path: &Utf8Path, answers: &[i64]) {
    let payload = serde_json::to_vec(answers).expect("serialise answers");
    write_utf8(path, &payload);
}

/// Three occupations leaning realistic, conventional and social.
pub(super) fn sample_records() -> Vec<OccupationRecord> {
    vec![
        OccupationRecord {
            code: BOOKKEEPER.to_owned(),
            profile: ReferenceProfile::new([1.3, 2.0, 1.0, 1.7, 3.1, 6.8]),
            title: "Bookkeeping, Accounting, and Auditing Clerks".to_owned(),
            description: "Compute, classify, and record numerical data.".to_owned(),
        },
        OccupationRecord {
            code: CARPENTER.to_owned(),
            profile: ReferenceProfile::new([6.9, 2.3, 1.7, 1.5, 2.0, 3.0]),
            title: "Carpenters".to_owned(),
            description: "Construct and repair wooden structures.".to_owned(),
        },
        OccupationRecord {
            code: COUNSELOR.to_owned(),
            profile: ReferenceProfile::new([1.0, 3.2, 2.6, 6.9, 2.5, 2.1]),
            title: "Substance Abuse Counselors".to_owned(),
            description: "Counsel individuals with alcohol or drug problems.".to_owned(),
        },
    ]
}

pub(super) fn sample_catalog() -> Catalog {
    Catalog::from_records(sample_records()).expect("valid sample catalog")
}

/// Write the sample catalog as the two JSON tables `import` reads.
pub(super) fn write_catalog_json(references: &Utf8Path, occupations: &Utf8Path) {
    let catalog = sample_catalog();
    let reference_rows = serde_json::to_vec(catalog.references().references())
        .expect("serialise reference rows");
    let metadata: Vec<_> = catalog.metadata().iter().collect();
    let metadata_rows = serde_json::to_vec(&metadata).expect("serialise metadata rows");
    write_utf8(references, &reference_rows);
    write_utf8(occupations, &metadata_rows);
}

/// Serves a fixed in-memory catalog regardless of path.
pub(super) struct StubCatalogLoader {
    pub(super) catalog: Catalog,
}

impl CatalogLoader for StubCatalogLoader {
    fn load(&self, _path: &Utf8Path) -> Result<Catalog, CliError> {
        Ok(self.catalog.clone())
    }
}

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
