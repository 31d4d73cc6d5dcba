//! Method bodies and the debug tables attached to them.
use crate::{macros::see_jvm_spec, types::field_type::FieldType};

/// The body of a method.
/// The instructions are kept as the raw `code` array and never interpreted.
#[doc = see_jvm_spec!(4, 7, 3)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodBody {
    /// The maximum number of values on the operand stack of the method.
    pub max_stack: u16,
    /// The maximum number of local variables in the method.
    pub max_locals: u16,
    /// The raw bytes of the instructions.
    pub code: Vec<u8>,
    /// The line number table.
    pub line_number_table: Option<Vec<LineNumberTableEntry>>,
    /// The local variable table, merged with the local variable type table.
    pub local_variable_table: Option<LocalVariableTable>,
    /// Unrecognized JVM attributes.
    pub free_attributes: Vec<(String, Vec<u8>)>,
}

/// An entry in the line number table.
#[doc = see_jvm_spec!(4, 7, 12)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumberTableEntry {
    /// The start of the code range.
    pub start_pc: u16,
    /// The line number in the source file.
    pub line_number: u16,
}

/// The local variables of a method, as recorded by the `LocalVariableTable`
/// and `LocalVariableTypeTable` attributes.
#[doc = see_jvm_spec!(4, 7, 13)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalVariableTable {
    entries: Vec<LocalVariableTableEntry>,
}

impl LocalVariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LocalVariableTableEntry> for LocalVariableTable {
    fn from_iter<T: IntoIterator<Item = LocalVariableTableEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A local variable with its live range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariableTableEntry {
    /// The first instruction where the variable is live.
    pub start_pc: u16,
    /// The length of the live range.
    pub length: u16,
    /// The name of the variable.
    pub name: String,
    /// The type of the variable, from `LocalVariableTable`.
    pub var_type: Option<FieldType>,
    /// The generic signature of the variable, from `LocalVariableTypeTable`.
    pub signature: Option<String>,
    /// The index of the variable in the local variable array.
    pub index: u16,
}
