//! SQLite-backed catalog loaded into memory once at start-up.
//!
//! The database holds two tables keyed by occupation code:
//!
//! - `occupation_interests(code, realistic, investigative, artistic, social,
//!   enterprising, conventional)`, read in `rowid` order;
//! - `occupation_data(code, title, description)`.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, params};
use thiserror::Error;

use super::{CatalogError, MetadataCatalog, MetadataTable, ReferenceCatalog, ReferenceTable};
use crate::{OccupationMetadata, OccupationReference, ReferenceProfile};

const SELECT_REFERENCES: &str = "SELECT code, realistic, investigative, artistic, social, \
     enterprising, conventional FROM occupation_interests ORDER BY rowid";
const SELECT_METADATA: &str = "SELECT code, title, description FROM occupation_data";

const CREATE_SCHEMA: &str = "
    DROP TABLE IF EXISTS occupation_interests;
    DROP TABLE IF EXISTS occupation_data;
    CREATE TABLE occupation_interests (
        code TEXT PRIMARY KEY NOT NULL,
        realistic REAL NOT NULL,
        investigative REAL NOT NULL,
        artistic REAL NOT NULL,
        social REAL NOT NULL,
        enterprising REAL NOT NULL,
        conventional REAL NOT NULL
    );
    CREATE TABLE occupation_data (
        code TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL
    );
";

/// Errors raised while reading or writing a SQLite catalog.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite catalog at {path}: {source}")]
    OpenDatabase {
        /// Location of the database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a statement failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Rows read from the database failed table validation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read-only catalog backed by a SQLite database.
///
/// Both tables are read into memory by [`SqliteCatalog::open`]; the
/// connection is closed afterwards.
pub struct SqliteCatalog {
    references: ReferenceCatalog,
    metadata: MetadataCatalog,
}

impl fmt::Debug for SqliteCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalog")
            .field("references", &self.references.len())
            .field("metadata", &self.metadata.len())
            .finish_non_exhaustive()
    }
}

impl SqliteCatalog {
    /// Open the database read-only and load both tables.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogError`] when the database cannot be opened or
    /// queried, or when its rows fail validation.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteCatalogError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteCatalogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let references = ReferenceCatalog::new(load_references(&connection)?)?;
        let metadata = MetadataCatalog::new(load_metadata(&connection)?)?;
        log::debug!(
            "loaded {} reference rows and {} metadata rows from {}",
            references.len(),
            metadata.len(),
            path.display()
        );
        if references.len() != metadata.len() {
            log::warn!(
                "catalog at {} has {} reference rows but {} metadata rows",
                path.display(),
                references.len(),
                metadata.len()
            );
        }
        Ok(Self {
            references,
            metadata,
        })
    }

    /// Split the catalog into its two in-memory tables.
    #[must_use]
    pub fn into_tables(self) -> (ReferenceCatalog, MetadataCatalog) {
        (self.references, self.metadata)
    }
}

impl ReferenceTable for SqliteCatalog {
    fn references(&self) -> &[OccupationReference] {
        self.references.references()
    }
}

impl MetadataTable for SqliteCatalog {
    fn metadata(&self, code: &str) -> Option<&OccupationMetadata> {
        self.metadata.metadata(code)
    }
}

fn query_error(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> SqliteCatalogError {
    move |source| SqliteCatalogError::Query { operation, source }
}

fn load_references(
    connection: &Connection,
) -> Result<Vec<OccupationReference>, SqliteCatalogError> {
    let mut statement = connection
        .prepare(SELECT_REFERENCES)
        .map_err(query_error("prepare reference selection"))?;
    let rows = statement
        .query_map([], |row| {
            let code: String = row.get(0)?;
            let values = [
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
            ];
            Ok(OccupationReference::new(code, ReferenceProfile::new(values)))
        })
        .map_err(query_error("query reference rows"))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(query_error("read reference row"))
}

fn load_metadata(connection: &Connection) -> Result<Vec<OccupationMetadata>, SqliteCatalogError> {
    let mut statement = connection
        .prepare(SELECT_METADATA)
        .map_err(query_error("prepare metadata selection"))?;
    let rows = statement
        .query_map([], |row| {
            Ok(OccupationMetadata {
                code: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
            })
        })
        .map_err(query_error("query metadata rows"))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(query_error("read metadata row"))
}

/// Create or replace the catalog tables at `database_path`.
///
/// Existing catalog tables are dropped first. All rows are written in one
/// transaction; reference rows keep their table order.
///
/// # Errors
/// Returns [`SqliteCatalogError`] when the database cannot be opened or any
/// statement fails.
pub fn write_sqlite_catalog<P>(
    database_path: P,
    references: &ReferenceCatalog,
    metadata: &MetadataCatalog,
) -> Result<(), SqliteCatalogError>
where
    P: AsRef<Path>,
{
    let path = database_path.as_ref();
    let mut connection =
        Connection::open(path).map_err(|source| SqliteCatalogError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        })?;
    let transaction = connection
        .transaction()
        .map_err(query_error("begin catalog transaction"))?;
    transaction
        .execute_batch(CREATE_SCHEMA)
        .map_err(query_error("create catalog schema"))?;
    {
        let mut insert_reference = transaction
            .prepare(
                "INSERT INTO occupation_interests (code, realistic, investigative, artistic, \
                 social, enterprising, conventional) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .map_err(query_error("prepare reference insert"))?;
        for row in references.references() {
            let p = &row.profile;
            insert_reference
                .execute(params![
                    row.code,
                    p.realistic,
                    p.investigative,
                    p.artistic,
                    p.social,
                    p.enterprising,
                    p.conventional
                ])
                .map_err(query_error("insert reference row"))?;
        }

        let mut insert_metadata = transaction
            .prepare("INSERT INTO occupation_data (code, title, description) VALUES (?1, ?2, ?3)")
            .map_err(query_error("prepare metadata insert"))?;
        for row in metadata.iter() {
            insert_metadata
                .execute(params![row.code, row.title, row.description])
                .map_err(query_error("insert metadata row"))?;
        }
    }
    transaction
        .commit()
        .map_err(query_error("commit catalog transaction"))?;
    log::debug!(
        "wrote {} reference rows and {} metadata rows to {}",
        references.len(),
        metadata.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{metadata_for, reference_catalog};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    #[rstest]
    fn write_then_open_preserves_rows(workspace: TempDir) {
        let path = workspace.path().join("catalog.db");
        let references = reference_catalog(&[
            ("29-1141.00", [1.0, 3.2, 1.5, 6.6, 2.4, 3.1]),
            ("13-2011.00", [1.3, 3.3, 1.1, 1.7, 3.1, 6.8]),
            ("27-1024.00", [2.0, 2.1, 6.9, 1.7, 3.0, 2.4]),
        ]);
        let metadata = metadata_for(&references);
        write_sqlite_catalog(&path, &references, &metadata).expect("write catalog");

        let catalog = SqliteCatalog::open(&path).expect("open catalog");
        let codes: Vec<_> = catalog.references().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["29-1141.00", "13-2011.00", "27-1024.00"]);
        assert_eq!(
            catalog.references().first().map(|r| r.profile.social),
            Some(6.6)
        );
        assert_eq!(
            catalog.metadata("27-1024.00").map(|m| m.title.as_str()),
            Some("Title 27-1024.00")
        );
    }

    #[rstest]
    fn rewriting_replaces_previous_rows(workspace: TempDir) {
        let path = workspace.path().join("catalog.db");
        let first = reference_catalog(&[("A", [1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]);
        write_sqlite_catalog(&path, &first, &metadata_for(&first)).expect("first write");
        let second = reference_catalog(&[("B", [6.0, 5.0, 4.0, 3.0, 2.0, 1.0])]);
        write_sqlite_catalog(&path, &second, &metadata_for(&second)).expect("second write");

        let (references, metadata) = SqliteCatalog::open(&path).expect("open").into_tables();
        assert_eq!(references, second);
        assert!(metadata.metadata("A").is_none());
    }

    #[rstest]
    fn missing_database_reports_path(workspace: TempDir) {
        let path = workspace.path().join("absent.db");
        let err = SqliteCatalog::open(&path).expect_err("missing database");
        match err {
            SqliteCatalogError::OpenDatabase { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected OpenDatabase, found {other:?}"),
        }
    }

    #[rstest]
    fn missing_tables_surface_query_errors(workspace: TempDir) {
        let path = workspace.path().join("empty.db");
        Connection::open(&path)
            .and_then(|c| c.execute_batch("CREATE TABLE unrelated (id INTEGER)"))
            .expect("create unrelated table");
        let err = SqliteCatalog::open(&path).expect_err("schema missing");
        assert!(matches!(err, SqliteCatalogError::Query { .. }));
    }

    #[rstest]
    fn duplicate_codes_fail_validation(workspace: TempDir) {
        let path = workspace.path().join("dupes.db");
        let connection = Connection::open(&path).expect("open");
        connection.execute_batch(CREATE_SCHEMA).expect("schema");
        connection
            .execute_batch(
                "ALTER TABLE occupation_data RENAME TO old_data;
                 CREATE TABLE occupation_data (code TEXT, title TEXT, description TEXT);
                 INSERT INTO occupation_data VALUES ('A', 'one', ''), ('A', 'two', '');",
            )
            .expect("insert duplicates");
        drop(connection);

        let err = SqliteCatalog::open(&path).expect_err("duplicates rejected");
        assert!(matches!(
            err,
            SqliteCatalogError::Catalog(CatalogError::DuplicateOccupation { .. })
        ));
    }
}
