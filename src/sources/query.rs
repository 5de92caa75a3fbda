//! Query text for the phone/email handle union.

use super::schema::*;
use crate::search::SearchPredicate;
use rusqlite::types::Value;

/// The phone-arm ∪ email-arm query built around one predicate.
///
/// Both arms embed the same predicate expression, so parameters are always
/// taken through [`SearchPredicate::bind_twice`]. Counting and fetching wrap
/// the same union, which keeps the count equal to the number of fetchable
/// rows.
#[derive(Debug, Clone)]
pub struct HandleUnionQuery<'a> {
    predicate: &'a SearchPredicate,
}

impl<'a> HandleUnionQuery<'a> {
    pub fn new(predicate: &'a SearchPredicate) -> Self {
        Self { predicate }
    }

    /// `SELECT COUNT(*)` over the union.
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM ({})", self.union_sql())
    }

    /// One ordered page of the union. Expects [`Self::page_parameters`].
    pub fn page_sql(&self) -> String {
        format!(
            "SELECT first_name, last_name, organization, handle, kind FROM ({}) \
             ORDER BY last_name ASC NULLS FIRST, first_name ASC NULLS FIRST, \
             handle ASC, kind ASC \
             LIMIT ? OFFSET ?",
            self.union_sql()
        )
    }

    /// Parameters for [`Self::count_sql`].
    pub fn count_parameters(&self) -> Vec<Value> {
        self.predicate
            .bind_twice()
            .map(|p| Value::Text(p.to_string()))
            .collect()
    }

    /// Parameters for [`Self::page_sql`].
    pub fn page_parameters(&self, limit: usize, offset: usize) -> Vec<Value> {
        let mut params = self.count_parameters();
        params.push(Value::Integer(to_sql_int(limit)));
        params.push(Value::Integer(to_sql_int(offset)));
        params
    }

    fn union_sql(&self) -> String {
        let predicate = self.predicate.expression();
        format!(
            "{phone} UNION ALL {email}",
            phone = arm(PHONE_TABLE, PHONE_VALUE, "phone", predicate),
            email = arm(EMAIL_TABLE, EMAIL_VALUE, "email", predicate),
        )
    }
}

fn arm(table: &str, value: &str, kind: &str, predicate: &str) -> String {
    format!(
        "SELECT {FIRST_NAME} AS first_name, {LAST_NAME} AS last_name, \
         {ORGANIZATION} AS organization, h.{value} AS handle, '{kind}' AS kind \
         FROM {RECORD_TABLE} r JOIN {table} h ON h.{OWNER} = r.{RECORD_PK} \
         WHERE h.{value} IS NOT NULL AND ({predicate})"
    )
}

fn to_sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
