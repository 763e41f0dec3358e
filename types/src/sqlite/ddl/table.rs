//! SQLite table schema descriptor
//!
//! [`TableSchema`] is the immutable description of one entity's table. It is
//! produced by [`TableSchemaBuilder`], which is where the descriptor's
//! invariants are enforced; consumers assume they hold.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_vec_from_strings};

use super::{Column, ForeignKey, SchemaError, UniqueConstraint};

/// Table schema descriptor.
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::ddl::{Column, TableSchema};
///
/// let schema = TableSchema::builder("users")
///     .column(Column::typed::<i64>("id").primary_key().autoincrement())
///     .column(Column::typed::<String>("name"))
///     .build()
///     .unwrap();
///
/// assert!(schema.has_single_primary_key());
/// assert_eq!(schema.primary_key_column().map(|c| c.name()), Some("id"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TableSchema {
    /// Table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Columns in declaration order
    pub columns: Vec<Column>,

    /// Table-level primary key columns; empty when a single column is the key
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_vec_from_strings")
    )]
    pub composite_primary_key: Vec<Cow<'static, str>>,

    /// Named multi-column unique constraints
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique_constraints: Vec<UniqueConstraint>,

    /// Foreign keys
    #[cfg_attr(feature = "serde", serde(default))]
    pub foreign_keys: Vec<ForeignKey>,

    /// Is this a WITHOUT ROWID table?
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "std::ops::Not::not")
    )]
    pub without_rowid: bool,
}

impl TableSchema {
    /// Start building a schema for `name`
    #[must_use]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> TableSchemaBuilder {
        TableSchemaBuilder::new(name)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff exactly one column carries the primary key flag and no
    /// composite key is declared.
    #[must_use]
    pub fn has_single_primary_key(&self) -> bool {
        self.composite_primary_key.is_empty()
            && self.columns.iter().filter(|c| c.primary_key).count() == 1
    }

    /// The inline primary key column, if the table has one
    #[must_use]
    pub fn primary_key_column(&self) -> Option<&Column> {
        if !self.has_single_primary_key() {
            return None;
        }
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Look a column up by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`TableSchema`].
///
/// Two or more columns flagged with [`Column::primary_key`] and no explicit
/// composite key fold into a composite key in column order.
#[derive(Clone, Debug)]
pub struct TableSchemaBuilder {
    name: Cow<'static, str>,
    columns: Vec<Column>,
    composite_primary_key: Vec<Cow<'static, str>>,
    unique_constraints: Vec<UniqueConstraint>,
    foreign_keys: Vec<ForeignKey>,
    without_rowid: bool,
}

impl TableSchemaBuilder {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            composite_primary_key: Vec::new(),
            unique_constraints: Vec::new(),
            foreign_keys: Vec::new(),
            without_rowid: false,
        }
    }

    /// Append a column
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Declare a table-level (composite) primary key
    #[must_use]
    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.composite_primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a named unique group
    #[must_use]
    pub fn unique<I, S>(mut self, name: impl Into<Cow<'static, str>>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.unique_constraints
            .push(UniqueConstraint::new(name, columns));
        self
    }

    /// Add a foreign key
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Set WITHOUT ROWID mode
    #[must_use]
    pub fn without_rowid(mut self) -> Self {
        self.without_rowid = true;
        self
    }

    /// Validate and produce the descriptor
    pub fn build(self) -> Result<TableSchema, SchemaError> {
        let Self {
            name,
            mut columns,
            mut composite_primary_key,
            unique_constraints,
            foreign_keys,
            without_rowid,
        } = self;

        if name.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        if columns.is_empty() {
            return Err(SchemaError::NoColumns {
                table: name.to_string(),
            });
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(SchemaError::DuplicateColumn {
                    table: name.to_string(),
                    column: column.name.to_string(),
                });
            }
        }

        let flagged: Vec<Cow<'static, str>> = columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.clone())
            .collect();

        if !composite_primary_key.is_empty() {
            if let Some(column) = flagged.first() {
                return Err(SchemaError::ConflictingPrimaryKey {
                    table: name.to_string(),
                    column: column.to_string(),
                });
            }
        } else if flagged.len() > 1 {
            composite_primary_key = flagged;
            for column in columns.iter_mut() {
                column.primary_key = false;
            }
        }

        // Folded and explicit composite keys leave no column flagged.
        if let Some(column) = columns.iter().find(|c| c.autoincrement && !c.primary_key) {
            return Err(SchemaError::AutoincrementOutsidePrimaryKey {
                table: name.to_string(),
                column: column.name.to_string(),
            });
        }

        if without_rowid
            && composite_primary_key.is_empty()
            && !columns.iter().any(|c| c.primary_key)
        {
            return Err(SchemaError::WithoutRowidNeedsPrimaryKey {
                table: name.to_string(),
            });
        }

        let known = |column: &str| columns.iter().any(|c| c.name() == column);
        let unknown = |column: &Cow<'static, str>| SchemaError::UnknownColumn {
            table: name.to_string(),
            column: column.to_string(),
        };

        if let Some(column) = composite_primary_key.iter().find(|c| !known(c)) {
            return Err(unknown(column));
        }

        for group in &unique_constraints {
            if group.columns.is_empty() {
                return Err(SchemaError::EmptyUniqueConstraint {
                    table: name.to_string(),
                    name: group.name.to_string(),
                });
            }
            if let Some(column) = group.columns.iter().find(|c| !known(c)) {
                return Err(unknown(column));
            }
        }

        for fk in &foreign_keys {
            if fk.columns.is_empty() || fk.columns.len() != fk.columns_to.len() {
                return Err(SchemaError::ForeignKeyArity {
                    table: name.to_string(),
                    parent: fk.table_to.to_string(),
                    local: fk.columns.len(),
                    referenced: fk.columns_to.len(),
                });
            }
            if let Some(column) = fk.columns.iter().find(|c| !known(c)) {
                return Err(unknown(column));
            }
        }

        Ok(TableSchema {
            name,
            columns,
            composite_primary_key,
            unique_constraints,
            foreign_keys,
            without_rowid,
        })
    }
}
