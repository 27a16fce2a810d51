use dbicgen_core::schema::Table;

pub struct Output<'a> {
    /// The aggregate schema module
    pub schema: SchemaOutput,

    /// Per-table output, in table registration order
    pub classes: Vec<ClassOutput<'a>>,
}

/// Generated code for the aggregate schema module
#[derive(Debug)]
pub struct SchemaOutput {
    /// Name chosen for the schema module, relative to the namespace
    pub name: &'static str,

    /// Fully qualified module name
    pub module_name: String,

    pub source: String,
}

/// Generated code for a single table
#[derive(Debug)]
pub struct ClassOutput<'a> {
    /// Table the output is associated with
    pub table: &'a Table,

    /// Fully qualified module name
    pub module_name: String,

    pub source: String,
}

/// A module ready to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedFile<'a> {
    pub module_name: &'a str,
    pub source: &'a str,
}

impl<'a> Output<'a> {
    /// Every generated module: per-table classes first, then the schema.
    pub fn files(&self) -> impl Iterator<Item = GeneratedFile<'_>> + '_ {
        self.classes
            .iter()
            .map(|class| GeneratedFile {
                module_name: &class.module_name,
                source: &class.source,
            })
            .chain(std::iter::once(GeneratedFile {
                module_name: &self.schema.module_name,
                source: &self.schema.source,
            }))
    }

    pub fn class(&self, table: &str) -> Option<&ClassOutput<'a>> {
        self.classes.iter().find(|class| class.table.name == table)
    }
}
