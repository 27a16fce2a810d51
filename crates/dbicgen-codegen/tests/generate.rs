use dbicgen_codegen::generate;
use dbicgen_core::{
    schema::{Schema, Table},
    Namespace,
};
use pretty_assertions::assert_eq;

fn author_book() -> Schema {
    Schema::new(vec![
        Table::new("Author")
            .column("id")
            .column("name")
            .primary_key("id"),
        Table::new("Book")
            .column("id")
            .column("title")
            .column("author_id")
            .primary_key("id")
            .foreign_key("Author", "id", "author_id"),
    ])
}

fn namespace(src: &str) -> Namespace {
    Namespace::parse(src).unwrap()
}

#[test]
fn author_book_end_to_end() {
    let schema = author_book();
    let ns = namespace("MyApp::DB");
    let out = generate(&schema, &ns).unwrap();

    assert_eq!(out.schema.name, "DBIC_Scheme");
    assert_eq!(out.schema.module_name, "MyApp::DB::DBIC_Scheme");
    assert_eq!(
        out.schema.source,
        "\
package MyApp::DB::DBIC_Scheme;

use strict;
use warnings;
use base qw/DBIx::Class::Schema/;

__PACKAGE__->load_classes(qw/
    Author
    Book
/);

1;
"
    );

    let author = out.class("Author").unwrap();
    assert_eq!(author.module_name, "MyApp::DB::DBIC_Scheme::Author");
    assert_eq!(
        author.source,
        "\
package MyApp::DB::DBIC_Scheme::Author;

use strict;
use warnings;
use base qw(DBIx::Class);

__PACKAGE__->load_components( qw/PK::Auto Core/ );
__PACKAGE__->table( 'Author' );
__PACKAGE__->add_columns( qw/
    id
    name
/);
__PACKAGE__->set_primary_key( qw/ id / );

__PACKAGE__->has_many(author_id => 'MyApp::DB::DBIC_Scheme::Book',
             { 'foreign.id' => 'self.author_id' });

1;
"
    );

    let book = out.class("Book").unwrap();
    assert_eq!(book.module_name, "MyApp::DB::DBIC_Scheme::Book");
    assert_eq!(
        book.source,
        "\
package MyApp::DB::DBIC_Scheme::Book;

use strict;
use warnings;
use base qw(DBIx::Class);

__PACKAGE__->load_components( qw/PK::Auto Core/ );
__PACKAGE__->table( 'Book' );
__PACKAGE__->add_columns( qw/
    id
    title
    author_id
/);
__PACKAGE__->set_primary_key( qw/ id / );

__PACKAGE__->belongs_to(author_id => 'MyApp::DB::DBIC_Scheme::Author',
             { 'foreign.id' => 'self.author_id' });

1;
"
    );
}

#[test]
fn files_lists_classes_then_schema() {
    let schema = author_book();
    let ns = namespace("MyApp::DB");
    let out = generate(&schema, &ns).unwrap();

    let modules = out.files().map(|file| file.module_name).collect::<Vec<_>>();
    assert_eq!(
        modules,
        [
            "MyApp::DB::DBIC_Scheme::Author",
            "MyApp::DB::DBIC_Scheme::Book",
            "MyApp::DB::DBIC_Scheme",
        ]
    );
}

#[test]
fn root_namespace_has_no_leading_separator() {
    let schema = author_book();
    let out = generate(&schema, &Namespace::root()).unwrap();

    assert_eq!(out.schema.module_name, "DBIC_Scheme");
    assert_eq!(out.class("Book").unwrap().module_name, "DBIC_Scheme::Book");
    assert!(out
        .class("Author")
        .unwrap()
        .source
        .starts_with("package DBIC_Scheme::Author;\n"));
    assert!(out
        .class("Author")
        .unwrap()
        .source
        .contains("__PACKAGE__->has_many(author_id => 'DBIC_Scheme::Book',"));
}

#[test]
fn no_foreign_keys_means_no_associations() {
    let schema = Schema::new(vec![
        Table::new("Tag").column("id").column("label").primary_key("id"),
        Table::new("Setting")
            .column("key")
            .column("value")
            .primary_key("key"),
    ]);
    let ns = namespace("App");
    let out = generate(&schema, &ns).unwrap();

    for class in &out.classes {
        assert!(!class.source.contains("has_many"));
        assert!(!class.source.contains("belongs_to"));
        assert!(class.source.contains("__PACKAGE__->add_columns( qw/\n"));
        assert!(class.source.contains("__PACKAGE__->set_primary_key("));
    }

    assert_eq!(
        out.class("Tag").unwrap().source,
        "\
package App::DBIC_Scheme::Tag;

use strict;
use warnings;
use base qw(DBIx::Class);

__PACKAGE__->load_components( qw/PK::Auto Core/ );
__PACKAGE__->table( 'Tag' );
__PACKAGE__->add_columns( qw/
    id
    label
/);
__PACKAGE__->set_primary_key( qw/ id / );

1;
"
    );
}

#[test]
fn self_reference_emits_both_directions() {
    let schema = Schema::new(vec![Table::new("Category")
        .column("id")
        .column("parent_id")
        .primary_key("id")
        .foreign_key("Category", "id", "parent_id")]);
    let ns = namespace("Shop");
    let out = generate(&schema, &ns).unwrap();
    let source = &out.class("Category").unwrap().source;

    assert!(source.contains(
        "__PACKAGE__->has_many(parent_id => 'Shop::DBIC_Scheme::Category',\n             { 'foreign.id' => 'self.parent_id' });"
    ));
    assert!(source.contains(
        "__PACKAGE__->belongs_to(parent_id => 'Shop::DBIC_Scheme::Category',\n             { 'foreign.id' => 'self.parent_id' });"
    ));
    assert!(source.find("has_many").unwrap() < source.find("belongs_to").unwrap());
}

#[test]
fn relationship_symmetry() {
    let schema = Schema::new(vec![
        Table::new("User").column("id").primary_key("id"),
        Table::new("Message")
            .column("id")
            .column("sender_id")
            .column("recipient_id")
            .primary_key("id")
            .foreign_key("User", "id", "sender_id")
            .foreign_key("User", "id", "recipient_id"),
    ]);
    let ns = namespace("Chat");
    let out = generate(&schema, &ns).unwrap();

    let user = &out.class("User").unwrap().source;
    let message = &out.class("Message").unwrap().source;

    for local in ["sender_id", "recipient_id"] {
        assert!(user.contains(&format!(
            "__PACKAGE__->has_many({local} => 'Chat::DBIC_Scheme::Message',\n             {{ 'foreign.id' => 'self.{local}' }});"
        )));
        assert!(message.contains(&format!(
            "__PACKAGE__->belongs_to({local} => 'Chat::DBIC_Scheme::User',\n             {{ 'foreign.id' => 'self.{local}' }});"
        )));
    }

    assert_eq!(user.matches("has_many").count(), 2);
    assert_eq!(message.matches("belongs_to").count(), 2);
    assert!(user.find("sender_id").unwrap() < user.find("recipient_id").unwrap());
}

#[test]
fn duplicate_local_columns_are_emitted_as_is() {
    let schema = Schema::new(vec![
        Table::new("Account").column("id").column("code").primary_key("id"),
        Table::new("Entry")
            .column("ref")
            .foreign_key("Account", "id", "ref")
            .foreign_key("Account", "code", "ref"),
    ]);
    let out = generate(&schema, &Namespace::root()).unwrap();
    let entry = &out.class("Entry").unwrap().source;

    assert_eq!(entry.matches("__PACKAGE__->belongs_to(ref => ").count(), 2);
    assert!(entry.contains("{ 'foreign.id' => 'self.ref' }"));
    assert!(entry.contains("{ 'foreign.code' => 'self.ref' }"));
}

#[test]
fn composite_primary_key_is_space_joined() {
    let schema = Schema::new(vec![Table::new("Membership")
        .column("user_id")
        .column("group_id")
        .primary_key("user_id")
        .primary_key("group_id")]);
    let out = generate(&schema, &Namespace::root()).unwrap();

    assert!(out
        .class("Membership")
        .unwrap()
        .source
        .contains("__PACKAGE__->set_primary_key( qw/ user_id group_id / );\n"));
}

#[test]
fn table_without_primary_key() {
    let schema = Schema::new(vec![Table::new("Log").column("line")]);
    let out = generate(&schema, &Namespace::root()).unwrap();

    let source = &out.class("Log").unwrap().source;
    assert!(source.contains(
        "__PACKAGE__->add_columns( qw/\n    line\n/);\n__PACKAGE__->set_primary_key( qw/  / );\n"
    ));
}

#[test]
fn schema_name_skips_colliding_tables() {
    let schema = Schema::new(vec![Table::new("DBIC_Scheme"), Table::new("Database")]);
    let ns = namespace("MyApp");
    let out = generate(&schema, &ns).unwrap();

    assert_eq!(out.schema.name, "DBIC");
    assert_eq!(out.schema.module_name, "MyApp::DBIC");
    assert_eq!(
        out.class("Database").unwrap().module_name,
        "MyApp::DBIC::Database"
    );
}

#[test]
fn no_available_schema_name() {
    let schema = Schema::new(
        dbicgen_codegen::SCHEMA_NAME_CANDIDATES
            .iter()
            .map(|name| Table::new(*name))
            .collect(),
    );
    let err = generate(&schema, &Namespace::root()).err().unwrap();

    assert!(err.is_configuration());
    assert!(err.is_no_schema_name());
}

#[test]
fn empty_schema_has_empty_load_list() {
    let schema = Schema::default();
    let ns = namespace("MyApp");
    let out = generate(&schema, &ns).unwrap();

    assert!(out.classes.is_empty());
    assert_eq!(
        out.schema.source,
        "\
package MyApp::DBIC_Scheme;

use strict;
use warnings;
use base qw/DBIx::Class::Schema/;

__PACKAGE__->load_classes(qw/
/);

1;
"
    );
}

#[test]
fn load_list_follows_registration_order() {
    let schema = Schema::new(vec![
        Table::new("Zebra"),
        Table::new("Apple"),
        Table::new("Mango"),
    ]);
    let out = generate(&schema, &Namespace::root()).unwrap();

    assert!(out
        .schema
        .source
        .contains("qw/\n    Zebra\n    Apple\n    Mango\n/);"));
}

#[test]
fn generation_is_idempotent() {
    let schema = Schema::new(vec![
        Table::new("A").column("id").primary_key("id"),
        Table::new("B")
            .column("a_id")
            .column("c_id")
            .foreign_key("A", "id", "a_id")
            .foreign_key("C", "id", "c_id"),
        Table::new("C")
            .column("id")
            .column("a_id")
            .primary_key("id")
            .foreign_key("A", "id", "a_id"),
    ]);
    let ns = namespace("X::Y");

    let first = generate(&schema, &ns).unwrap();
    let second = generate(&schema, &ns).unwrap();

    assert_eq!(
        first.files().collect::<Vec<_>>(),
        second.files().collect::<Vec<_>>()
    );
}
