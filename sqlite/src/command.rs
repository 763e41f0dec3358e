//! Executing compiled statements through rusqlite

use rusqlite::{Connection, ToSql};
use sqlforge_core::{Param, ParamList, ParameterSink, Result};
use sqlforge_types::sqlite::ddl::TableSchema;

use crate::row::{Record, materialize};
use crate::values::SQLiteValue;

/// A statement's parameters, bound against one connection.
///
/// `Command` is a [`ParameterSink`]: compile predicates into it, then run the
/// SQL with every accumulated `@P<n>` parameter bound by name.
///
/// ```
/// # use rusqlite::Connection;
/// # use sqlforge_sqlite::command::Command;
/// # use sqlforge_sqlite::predicate::{Comparison, Predicate};
/// let conn = Connection::open_in_memory().unwrap();
/// conn.execute_batch("CREATE TABLE t (n INTEGER); INSERT INTO t VALUES (1), (5), (9);").unwrap();
///
/// let mut command = Command::new(&conn);
/// let condition = Predicate::from(Comparison::gt("n", 4))
///     .where_clause(Some(&mut command))
///     .unwrap();
/// let deleted = command.execute(&format!("DELETE FROM t {condition}")).unwrap();
/// assert_eq!(deleted, 2);
/// ```
pub struct Command<'c, 'a> {
    conn: &'c Connection,
    params: ParamList<'a>,
}

impl<'c, 'a> Command<'c, 'a> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            params: ParamList::new(),
        }
    }

    pub fn params(&self) -> &ParamList<'a> {
        &self.params
    }

    /// Run a statement that returns no rows; yields the number of rows changed
    pub fn execute(&self, sql: &str) -> Result<usize> {
        sqlforge_core::sqlforge_trace_sql!("execute", sql, self.params.len());
        let mut stmt = self.conn.prepare(sql)?;
        let names = self.names();
        let bound = self.bound(&names);
        Ok(stmt.execute(bound.as_slice())?)
    }

    /// Run a query and materialize every row against `schema`
    pub fn query(&self, sql: &str, schema: &TableSchema) -> Result<Vec<Record>> {
        sqlforge_core::sqlforge_trace_sql!("query", sql, self.params.len());
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let names = self.names();
        let bound = self.bound(&names);

        let mut rows = stmt.query(bound.as_slice())?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let values = columns
                .iter()
                .enumerate()
                .map(|(i, name)| Ok((name.as_str(), SQLiteValue::from(row.get_ref(i)?))))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            records.push(materialize(schema, values)?);
        }
        Ok(records)
    }

    fn names(&self) -> Vec<String> {
        self.params.iter().map(Param::name).collect()
    }

    fn bound<'n>(&'n self, names: &'n [String]) -> Vec<(&'n str, &'n dyn ToSql)> {
        names
            .iter()
            .zip(self.params.iter())
            .map(|(name, param)| (name.as_str(), &param.value as &dyn ToSql))
            .collect()
    }
}

impl<'c, 'a> ParameterSink<'a> for Command<'c, 'a> {
    fn parameter_count(&self) -> usize {
        self.params.len()
    }

    fn add_parameter(&mut self, param: Param<'a>) {
        self.params.add_parameter(param);
    }
}
