use super::{footer, header, word_list};
use crate::names::Names;
use crate::SchemaOutput;

/// Generate the aggregate schema module loading every table class.
pub(crate) fn generate(names: &Names<'_>) -> SchemaOutput {
    let module_name = names.schema_module();
    let mut dst = String::new();

    header(&mut dst, &module_name, "qw/DBIx::Class::Schema/");

    dst.push_str("__PACKAGE__->load_classes(qw/\n");
    word_list(&mut dst, names.tables.iter().copied());
    dst.push_str("/);\n");

    footer(&mut dst);

    log::trace!("generated `{module_name}`");

    SchemaOutput {
        name: names.schema_name,
        module_name,
        source: dst,
    }
}
