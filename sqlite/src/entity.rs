//! Per-type table schemas, built once and cached for the process lifetime

use std::any::TypeId;
use std::sync::{OnceLock, RwLock};

use hashbrown::HashMap;
use sqlforge_types::sqlite::ddl::TableSchema;

/// A Rust type persisted as one table.
///
/// ```
/// use sqlforge_sqlite::entity::{Entity, schema_of};
/// use sqlforge_types::sqlite::ddl::{Column, TableSchema};
///
/// struct User;
///
/// impl Entity for User {
///     fn table_schema() -> TableSchema {
///         TableSchema::builder("users")
///             .column(Column::typed::<i64>("id").primary_key())
///             .build()
///             .expect("valid schema")
///     }
/// }
///
/// let schema = schema_of::<User>();
/// assert_eq!(schema.name(), "users");
/// assert!(std::ptr::eq(schema, schema_of::<User>()));
/// ```
pub trait Entity: 'static {
    /// Describe the table. Called at most once per type by [`schema_of`].
    fn table_schema() -> TableSchema;
}

type SchemaCache = RwLock<HashMap<TypeId, &'static TableSchema>>;

fn cache() -> &'static SchemaCache {
    static CACHE: OnceLock<SchemaCache> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// The cached schema for `E`, building it on first use.
pub fn schema_of<E: Entity>() -> &'static TableSchema {
    let key = TypeId::of::<E>();

    {
        let schemas = cache().read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(&schema) = schemas.get(&key) {
            return schema;
        }
    }

    let mut schemas = cache().write().unwrap_or_else(|poisoned| poisoned.into_inner());
    // Another thread may have filled the slot between the two locks.
    *schemas.entry(key).or_insert_with(|| {
        let schema: &'static TableSchema = Box::leak(Box::new(E::table_schema()));
        sqlforge_core::sqlforge_trace_schema!("fill", schema.name());
        schema
    })
}
