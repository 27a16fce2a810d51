mod emit;

mod names;
pub use names::{pick_schema_name, SCHEMA_NAME_CANDIDATES};

mod out;
pub use out::{ClassOutput, GeneratedFile, Output, SchemaOutput};

pub mod relations;
pub use relations::{RelationSet, Relations};

use dbicgen_core::{Namespace, Result, Schema};
use names::Names;

/// Generate the `DBIx::Class` modules for a schema.
///
/// All text is produced in memory. Nothing is written to disk, so a failure
/// here never leaves a partial set of files behind.
pub fn generate<'a>(schema: &'a Schema, namespace: &Namespace) -> Result<Output<'a>> {
    // Register every table's module name and pick the aggregate schema name
    // before emitting anything; class modules are nested under it.
    let names = Names::from_schema(schema, namespace)?;
    let relations = Relations::from_schema(schema);

    let classes = schema
        .tables()
        .map(|table| emit::class(table, relations.get(&table.name), &names))
        .collect();

    Ok(Output {
        schema: emit::schema(&names),
        classes,
    })
}
