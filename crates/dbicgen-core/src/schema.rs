mod fk;
pub use fk::ForeignKeyPair;

mod reader;
pub use reader::{from_file, from_str};

mod table;
pub use table::Table;

/// Ordered set of tables produced by the schema reader.
///
/// Table order is the order in which tables were declared in the source
/// document. It drives the order of the aggregate schema module's load list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.iter()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.iter().map(|table| table.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
