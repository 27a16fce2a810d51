mod class;
pub(crate) use class::generate as class;

mod schema;
pub(crate) use schema::generate as schema;

/// Indentation of entries inside a `qw/ ... /` list
const INDENT: &str = "    ";

/// Appends `package <module>;` followed by the pragmas every generated
/// module starts with.
fn header(dst: &mut String, module_name: &str, base: &str) {
    dst.push_str("package ");
    dst.push_str(module_name);
    dst.push_str(";\n\nuse strict;\nuse warnings;\nuse base ");
    dst.push_str(base);
    dst.push_str(";\n\n");
}

/// Appends one indented line per entry.
fn word_list<'a>(dst: &mut String, words: impl IntoIterator<Item = &'a str>) {
    for word in words {
        dst.push_str(INDENT);
        dst.push_str(word);
        dst.push('\n');
    }
}

/// Modules must end with a true value.
fn footer(dst: &mut String) {
    dst.push_str("\n1;\n");
}
