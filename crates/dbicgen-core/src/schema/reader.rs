//! Reader for DBDesigner 4 model files.
//!
//! Only the parts of the document needed to derive classes are read: table
//! names, column names, primary key flags and the `RELATIONS` section.

use super::{ForeignKeyPair, Schema, Table};
use crate::{Error, Result};

use roxmltree::Node;
use std::collections::HashMap;
use std::path::Path;

/// Read a schema from a DBDesigner 4 XML file.
pub fn from_file(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();

    log::debug!("reading schema from `{}`", path.display());

    let src = std::fs::read_to_string(path)
        .map_err(|err| Error::reader(format!("failed to read `{}`: {err}", path.display())))?;

    from_str(&src).map_err(|err| err.context(crate::err!("in `{}`", path.display())))
}

/// Read a schema from the text of a DBDesigner 4 XML document.
pub fn from_str(src: &str) -> Result<Schema> {
    let doc = roxmltree::Document::parse(src)?;
    let root = doc.root_element();

    if !root.has_tag_name("DBMODEL") {
        return Err(Error::reader(format!(
            "expected `DBMODEL` root element, found `{}`",
            root.tag_name().name()
        )));
    }

    let mut reader = Reader::default();

    for node in root.descendants().filter(|node| node.has_tag_name("TABLE")) {
        reader.read_table(node)?;
    }

    for node in root
        .descendants()
        .filter(|node| node.has_tag_name("RELATION"))
    {
        reader.read_relation(node)?;
    }

    log::debug!("read {} tables", reader.tables.len());

    Ok(Schema::new(reader.tables))
}

#[derive(Default)]
struct Reader<'a> {
    tables: Vec<Table>,

    /// Maps DBDesigner object IDs to positions in `tables`
    ids: HashMap<&'a str, usize>,
}

impl<'a> Reader<'a> {
    fn read_table(&mut self, node: Node<'a, '_>) -> Result<()> {
        let name = required(node, "TABLE", "Tablename")?;

        if name.is_empty() {
            return Err(Error::reader("table with an empty `Tablename`"));
        }

        if self.tables.iter().any(|table| table.name == name) {
            return Err(Error::reader(format!("duplicate table `{name}`")));
        }

        let id = required(node, "TABLE", "ID")
            .map_err(|err| err.context(crate::err!("table `{name}`")))?;

        let mut table = Table::new(name);

        for column in node
            .descendants()
            .filter(|node| node.has_tag_name("COLUMN"))
        {
            let column_name = required(column, "COLUMN", "ColName")
                .map_err(|err| err.context(crate::err!("table `{name}`")))?;

            table.columns.push(column_name.to_string());

            if column.attribute("PrimaryKey") == Some("1") {
                table.primary_key.push(column_name.to_string());
            }
        }

        log::trace!(
            "table `{}`: {} columns, primary key {:?}",
            table.name,
            table.columns.len(),
            table.primary_key
        );

        self.ids.insert(id, self.tables.len());
        self.tables.push(table);

        Ok(())
    }

    /// A relation points from the referenced table (`SrcTable`) to the table
    /// holding the foreign key (`DestTable`).
    fn read_relation(&mut self, node: Node<'a, '_>) -> Result<()> {
        let relation = node.attribute("RelationName").unwrap_or("<unnamed>");
        let context = || crate::err!("relation `{relation}`");

        let src = required(node, "RELATION", "SrcTable")
            .and_then(|id| self.lookup(id))
            .map_err(|err| err.context(context()))?;
        let dest = required(node, "RELATION", "DestTable")
            .and_then(|id| self.lookup(id))
            .map_err(|err| err.context(context()))?;
        let fields = required(node, "RELATION", "FKFields").map_err(|err| err.context(context()))?;

        let target = self.tables[src].name.clone();

        for entry in fk_entries(fields) {
            let Some((foreign, local)) = entry.split_once('=') else {
                return Err(Error::reader(format!(
                    "malformed `FKFields` entry `{entry}`, expected `column=column`"
                ))
                .context(context()));
            };

            self.tables[dest].add_foreign_key(
                target.as_str(),
                ForeignKeyPair::new(foreign.trim(), local.trim()),
            );
        }

        Ok(())
    }

    fn lookup(&self, id: &str) -> Result<usize> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| Error::reader(format!("unknown table ID `{id}`")))
    }
}

fn required<'a>(node: Node<'a, '_>, element: &str, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute).ok_or_else(|| {
        Error::reader(format!(
            "`{element}` element without `{attribute}` attribute"
        ))
    })
}

/// `FKFields` entries are separated by an escaped `\n` sequence. Real line
/// breaks are accepted as well.
fn fk_entries(fields: &str) -> impl Iterator<Item = &str> {
    fields
        .split("\\n")
        .flat_map(|chunk| chunk.lines())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}
