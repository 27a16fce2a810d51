use super::ForeignKeyPair;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the table, unique within a schema
    pub name: String,

    /// Column names in declaration order
    pub columns: Vec<String>,

    /// Primary key columns in declaration order
    pub primary_key: Vec<String>,

    /// Foreign keys declared on this table, keyed by the referenced table.
    pub foreign_keys: IndexMap<String, Vec<ForeignKeyPair>>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key: vec![],
            foreign_keys: IndexMap::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Append a primary key column. The column is not added to `columns`.
    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key.push(name.into());
        self
    }

    /// Declare that `local` in this table references `foreign` in `target`.
    pub fn foreign_key(
        mut self,
        target: impl Into<String>,
        foreign: impl Into<String>,
        local: impl Into<String>,
    ) -> Self {
        self.add_foreign_key(target, ForeignKeyPair::new(foreign, local));
        self
    }

    pub fn add_foreign_key(&mut self, target: impl Into<String>, pair: ForeignKeyPair) {
        self.foreign_keys.entry(target.into()).or_default().push(pair);
    }

    /// Iterate the referenced tables along with their column pairs.
    pub fn references(&self) -> impl Iterator<Item = (&str, &[ForeignKeyPair])> + '_ {
        self.foreign_keys
            .iter()
            .map(|(target, pairs)| (target.as_str(), pairs.as_slice()))
    }
}
