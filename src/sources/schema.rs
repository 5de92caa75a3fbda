//! AddressBook storage layout.
//!
//! Table and column names of the `AddressBook-v22.abcddb` SQLite file. The
//! record table is always aliased `r` in query text.

/// Default file name of the database inside each source directory.
pub const DEFAULT_DB_FILE_NAME: &str = "AddressBook-v22.abcddb";

pub const RECORD_TABLE: &str = "ZABCDRECORD";
pub const RECORD_PK: &str = "Z_PK";
pub const FIRST_NAME: &str = "r.ZFIRSTNAME";
pub const LAST_NAME: &str = "r.ZLASTNAME";
pub const ORGANIZATION: &str = "r.ZORGANIZATION";
pub const NICKNAME: &str = "r.ZNICKNAME";

pub const PHONE_TABLE: &str = "ZABCDPHONENUMBER";
pub const PHONE_VALUE: &str = "ZFULLNUMBER";

pub const EMAIL_TABLE: &str = "ZABCDEMAILADDRESS";
pub const EMAIL_VALUE: &str = "ZADDRESS";

/// Foreign key from a handle row to its record.
pub const OWNER: &str = "ZOWNER";
