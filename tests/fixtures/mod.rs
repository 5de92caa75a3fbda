//! AddressBook-shaped SQLite fixtures.
//!
//! Builds real database files with the tables and columns the contact
//! sources query, inside temporary source directories.

#![allow(dead_code)]

use contacts_mcp_server::sources::schema::DEFAULT_DB_FILE_NAME;
use rusqlite::{params, Connection};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &str = "
    CREATE TABLE ZABCDRECORD (
        Z_PK INTEGER PRIMARY KEY,
        ZFIRSTNAME VARCHAR,
        ZLASTNAME VARCHAR,
        ZORGANIZATION VARCHAR,
        ZNICKNAME VARCHAR
    );
    CREATE TABLE ZABCDPHONENUMBER (
        Z_PK INTEGER PRIMARY KEY,
        ZOWNER INTEGER,
        ZFULLNUMBER VARCHAR
    );
    CREATE TABLE ZABCDEMAILADDRESS (
        Z_PK INTEGER PRIMARY KEY,
        ZOWNER INTEGER,
        ZADDRESS VARCHAR
    );
";

/// One record to insert.
#[derive(Debug, Clone, Default)]
pub struct RecordFixture {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub organization: Option<&'static str>,
    pub nickname: Option<&'static str>,
    pub phones: Vec<Option<&'static str>>,
    pub emails: Vec<Option<&'static str>>,
}

impl RecordFixture {
    pub fn person(first: &'static str, last: &'static str) -> Self {
        Self {
            first_name: Some(first),
            last_name: Some(last),
            ..Default::default()
        }
    }

    pub fn organization(name: &'static str) -> Self {
        Self {
            organization: Some(name),
            ..Default::default()
        }
    }

    pub fn nickname(mut self, nickname: &'static str) -> Self {
        self.nickname = Some(nickname);
        self
    }

    pub fn phone(mut self, phone: &'static str) -> Self {
        self.phones.push(Some(phone));
        self
    }

    pub fn null_phone(mut self) -> Self {
        self.phones.push(None);
        self
    }

    pub fn email(mut self, email: &'static str) -> Self {
        self.emails.push(Some(email));
        self
    }
}

/// Create an AddressBook database file at `path` holding `records`.
pub fn write_address_book(path: &Path, records: &[RecordFixture]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();

    for record in records {
        conn.execute(
            "INSERT INTO ZABCDRECORD (ZFIRSTNAME, ZLASTNAME, ZORGANIZATION, ZNICKNAME) VALUES (?1, ?2, ?3, ?4)",
            params![record.first_name, record.last_name, record.organization, record.nickname],
        )
        .unwrap();
        let owner = conn.last_insert_rowid();

        for phone in &record.phones {
            conn.execute(
                "INSERT INTO ZABCDPHONENUMBER (ZOWNER, ZFULLNUMBER) VALUES (?1, ?2)",
                params![owner, phone],
            )
            .unwrap();
        }
        for email in &record.emails {
            conn.execute(
                "INSERT INTO ZABCDEMAILADDRESS (ZOWNER, ZADDRESS) VALUES (?1, ?2)",
                params![owner, email],
            )
            .unwrap();
        }
    }
}

/// A temporary sources directory with one subdirectory per source.
pub struct SourcesDir {
    dir: TempDir,
}

impl SourcesDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add `<name>/AddressBook-v22.abcddb` holding `records`.
    pub fn add_source(&self, name: &str, records: &[RecordFixture]) -> PathBuf {
        let source_dir = self.dir.path().join(name);
        fs::create_dir_all(&source_dir).unwrap();

        let db_path = source_dir.join(DEFAULT_DB_FILE_NAME);
        write_address_book(&db_path, records);
        db_path
    }

    /// Add a subdirectory without a database.
    pub fn add_empty_candidate(&self, name: &str) {
        fs::create_dir_all(self.dir.path().join(name)).unwrap();
    }
}
