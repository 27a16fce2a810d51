use super::{footer, header, word_list};
use crate::names::Names;
use crate::{ClassOutput, RelationSet};

use dbicgen_core::schema::{ForeignKeyPair, Table};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy)]
enum Association {
    HasMany,
    BelongsTo,
}

impl Association {
    fn method(self) -> &'static str {
        match self {
            Association::HasMany => "has_many",
            Association::BelongsTo => "belongs_to",
        }
    }
}

/// Generate the class module for one table.
pub(crate) fn generate<'a>(
    table: &'a Table,
    relations: &RelationSet,
    names: &Names<'_>,
) -> ClassOutput<'a> {
    let module_name = names.class_module(&table.name);

    let mut gen = Generator {
        table,
        names,
        dst: String::new(),
    };

    gen.gen_header(&module_name);
    gen.gen_columns();
    gen.gen_primary_key();
    gen.gen_associations(Association::HasMany, &relations.outgoing);
    gen.gen_associations(Association::BelongsTo, &relations.incoming);
    footer(&mut gen.dst);

    log::trace!("generated `{module_name}`");

    ClassOutput {
        table,
        module_name,
        source: gen.dst,
    }
}

struct Generator<'a> {
    /// Table being generated
    table: &'a Table,

    names: &'a Names<'a>,

    /// Where to write the module source
    dst: String,
}

impl Generator<'_> {
    fn gen_header(&mut self, module_name: &str) {
        header(&mut self.dst, module_name, "qw(DBIx::Class)");

        self.dst
            .push_str("__PACKAGE__->load_components( qw/PK::Auto Core/ );\n");
        self.dst.push_str("__PACKAGE__->table( '");
        self.dst.push_str(&self.table.name);
        self.dst.push_str("' );\n");
    }

    fn gen_columns(&mut self) {
        self.dst.push_str("__PACKAGE__->add_columns( qw/\n");
        word_list(&mut self.dst, self.table.columns.iter().map(String::as_str));
        self.dst.push_str("/);\n");
    }

    /// A table without a primary key still gets the declaration, with an
    /// empty column list.
    fn gen_primary_key(&mut self) {
        self.dst.push_str("__PACKAGE__->set_primary_key( qw/ ");
        self.dst.push_str(&self.table.primary_key.join(" "));
        self.dst.push_str(" / );\n");
    }

    /// One statement per column pair, named after the local column. Pairs
    /// sharing a local column produce statements with the same name.
    fn gen_associations(
        &mut self,
        association: Association,
        targets: &IndexMap<String, Vec<ForeignKeyPair>>,
    ) {
        for (target, pairs) in targets {
            let target_module = self.names.class_module(target);

            for pair in pairs {
                self.gen_association(association, &target_module, pair);
            }
        }
    }

    fn gen_association(&mut self, association: Association, target: &str, pair: &ForeignKeyPair) {
        self.dst.push_str("\n__PACKAGE__->");
        self.dst.push_str(association.method());
        self.dst.push('(');
        self.dst.push_str(&pair.local);
        self.dst.push_str(" => '");
        self.dst.push_str(target);
        self.dst.push_str("',\n             { 'foreign.");
        self.dst.push_str(&pair.foreign);
        self.dst.push_str("' => 'self.");
        self.dst.push_str(&pair.local);
        self.dst.push_str("' });\n");
    }
}
