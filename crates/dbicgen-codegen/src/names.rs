use dbicgen_core::{schema::Schema, Error, Namespace, Result};
use std::collections::HashSet;

/// Names tried, in order, for the aggregate schema module.
pub const SCHEMA_NAME_CANDIDATES: [&str; 6] = [
    "DBIC_Scheme",
    "Database",
    "DBIC",
    "MyScheme",
    "MyDatabase",
    "DBIxClass_Scheme",
];

/// Pick the first schema module name that no table uses.
pub fn pick_schema_name<'a>(table_names: impl IntoIterator<Item = &'a str>) -> Result<&'static str> {
    let taken = table_names.into_iter().collect::<HashSet<_>>();

    SCHEMA_NAME_CANDIDATES
        .into_iter()
        .find(|candidate| !taken.contains(candidate))
        .ok_or_else(Error::no_schema_name)
}

/// Module names computed for a single run.
#[derive(Debug)]
pub(crate) struct Names<'a> {
    pub(crate) namespace: &'a Namespace,

    /// Aggregate schema module name, relative to the namespace
    pub(crate) schema_name: &'static str,

    /// Table module names, relative to the schema module, in registration
    /// order
    pub(crate) tables: Vec<&'a str>,
}

impl<'a> Names<'a> {
    pub(crate) fn from_schema(schema: &'a Schema, namespace: &'a Namespace) -> Result<Names<'a>> {
        let tables = schema.table_names().collect::<Vec<_>>();
        let schema_name = pick_schema_name(tables.iter().copied())?;

        log::debug!("schema module `{schema_name}` loads {} classes", tables.len());

        Ok(Names {
            namespace,
            schema_name,
            tables,
        })
    }

    /// Fully qualified name of the aggregate schema module
    pub(crate) fn schema_module(&self) -> String {
        self.namespace.join([self.schema_name])
    }

    /// Fully qualified name of the class generated for `table`
    pub(crate) fn class_module(&self, table: &str) -> String {
        self.namespace.join([self.schema_name, table])
    }
}
