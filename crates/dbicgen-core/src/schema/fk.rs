/// One column pairing of a foreign key.
///
/// `foreign` is the column in the referenced table, `local` the column in
/// the table declaring the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKeyPair {
    pub foreign: String,
    pub local: String,
}

impl ForeignKeyPair {
    pub fn new(foreign: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            foreign: foreign.into(),
            local: local.into(),
        }
    }
}
