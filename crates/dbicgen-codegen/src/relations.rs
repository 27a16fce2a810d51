//! Derives has-many / belongs-to associations from declared foreign keys.
//!
//! A foreign key declared on table `T` referencing table `R` is seen from
//! both ends: `R` has many `T`, and `T` belongs to `R`. Both sides share the
//! same column pairs.

use dbicgen_core::schema::{ForeignKeyPair, Schema};
use indexmap::IndexMap;

/// Associations of a single table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelationSet {
    /// Tables this table has many rows in, keyed by the other table
    pub outgoing: IndexMap<String, Vec<ForeignKeyPair>>,

    /// Tables this table belongs to, keyed by the other table
    pub incoming: IndexMap<String, Vec<ForeignKeyPair>>,
}

impl RelationSet {
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }
}

/// Relation sets of every table in a schema.
#[derive(Debug, Default)]
pub struct Relations {
    sets: IndexMap<String, RelationSet>,

    /// Returned for tables that take part in no relation
    empty: RelationSet,
}

impl Relations {
    pub fn from_schema(schema: &Schema) -> Relations {
        let mut relations = Relations::default();

        for table in schema.tables() {
            relations.sets.entry(table.name.clone()).or_default();
        }

        for table in schema.tables() {
            for (target, pairs) in table.references() {
                if schema.table(target).is_none() {
                    log::warn!(
                        "table `{}` references unknown table `{target}`",
                        table.name
                    );
                }

                relations
                    .sets
                    .entry(target.to_string())
                    .or_default()
                    .outgoing
                    .entry(table.name.clone())
                    .or_default()
                    .extend_from_slice(pairs);

                relations
                    .sets
                    .entry(table.name.clone())
                    .or_default()
                    .incoming
                    .entry(target.to_string())
                    .or_default()
                    .extend_from_slice(pairs);
            }
        }

        log::debug!(
            "derived relations for {} tables ({} with associations)",
            relations.sets.len(),
            relations.sets.values().filter(|set| !set.is_empty()).count()
        );

        relations
    }

    /// Relation set for `table`. Unknown tables have no relations.
    pub fn get(&self, table: &str) -> &RelationSet {
        self.sets.get(table).unwrap_or(&self.empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelationSet)> + '_ {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }
}
