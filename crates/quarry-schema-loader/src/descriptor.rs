use std::fmt;

/// A column as described by the system catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub schema: String,
    pub table: String,
    pub column: String,
    pub nullable: bool,

    /// Type name as stored in the catalog, e.g. `varchar`
    pub declared_type: String,

    /// Default value expression, untouched
    pub default_value: Option<String>,

    pub length: Option<i64>,
    pub scale: Option<i64>,

    /// Declared type including length and scale where the vendor expects
    /// them, e.g. `varchar(40)`
    pub full_type: String,
}

/// One column of a key constraint.
///
/// A composite key yields one descriptor per column, all sharing the same
/// constraint name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDescriptor {
    pub constraint_name: String,
    pub schema: String,
    pub table: String,
    pub column: String,

    pub referenced_schema: Option<String>,
    pub referenced_table: Option<String>,
    pub referenced_column: Option<String>,
}

impl ConstraintDescriptor {
    /// Name loaders give primary key constraints
    pub const PRIMARY: &'static str = "PRIMARY";

    pub fn is_primary_key(&self) -> bool {
        self.constraint_name == Self::PRIMARY
    }

    pub fn is_foreign_key(&self) -> bool {
        self.referenced_table.is_some()
    }
}

impl fmt::Display for ConstraintDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_primary_key() {
            write!(f, "{} PK", self.table)
        } else {
            f.write_str(&self.constraint_name)
        }
    }
}
