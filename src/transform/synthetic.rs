//! Classifies classes by the synthetic parameters their constructors receive.
//!
//! `javac` prepends parameters to two kinds of constructors:
//! - enum constructors take the constant name and its ordinal;
//! - constructors of non-static inner classes take the enclosing instance.
//!
//! Local and anonymous classes may also capture variables through extra
//! parameters, but their layout depends on the compiler, so they are not
//! classified here.

use std::fmt::Display;

use crate::{
    jvm::{
        class::{AccessFlags, Class, NestedClassAccessFlags},
        references::ClassRef,
    },
    types::field_type::{FieldType, PrimitiveType},
};

/// The outcome of classifying a [`Class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The class is an enum.
    Enum,
    /// The class is a named, non-static inner class of `outer`.
    InnerClass {
        /// The enclosing class.
        outer: ClassRef,
    },
    /// The class has no inner class record for itself.
    NotInnerClass,
    /// The class is a static nested class or a nested interface.
    StaticOrInterface,
    /// The class is anonymous.
    Anonymous,
    /// The class is named but has no enclosing class, i.e., it is a local class.
    Local,
}

impl Classification {
    /// Classifies the given class from its access flags and its own inner class record.
    #[must_use]
    pub fn of(class: &Class) -> Self {
        if class.access_flags.contains(AccessFlags::ENUM) {
            return Self::Enum;
        }
        let Some(info) = class.inner_class_info() else {
            return Self::NotInnerClass;
        };
        if info
            .inner_class_access_flags
            .intersects(NestedClassAccessFlags::STATIC | NestedClassAccessFlags::INTERFACE)
        {
            return Self::StaticOrInterface;
        }
        if info.is_anonymous() {
            return Self::Anonymous;
        }
        match &info.outer_class {
            Some(outer) => Self::InnerClass {
                outer: outer.clone(),
            },
            None => Self::Local,
        }
    }

    /// Returns the types of the leading synthetic parameters of the constructors,
    /// or `None` if the constructors are not expected to have any.
    #[must_use]
    pub fn synthetic_parameters(&self) -> Option<Vec<FieldType>> {
        match self {
            Self::Enum => Some(vec![FieldType::string(), FieldType::Base(PrimitiveType::Int)]),
            Self::InnerClass { outer } => Some(vec![FieldType::Object(outer.clone())]),
            Self::NotInnerClass | Self::StaticOrInterface | Self::Anonymous | Self::Local => None,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum => write!(f, "it is an enum"),
            Self::InnerClass { outer } => write!(f, "it is an inner class of {outer}"),
            Self::NotInnerClass => write!(f, "it is not an inner class"),
            Self::StaticOrInterface => write!(f, "it is an interface or static"),
            Self::Anonymous => write!(f, "it is anonymous"),
            Self::Local => write!(f, "it is a local class"),
        }
    }
}

/// Returns the types of the synthetic parameters expected at the start of every
/// constructor of the given class, or `None` if there are none.
#[must_use]
pub fn expected_synthetic_parameters(class: &Class) -> Option<Vec<FieldType>> {
    Classification::of(class).synthetic_parameters()
}
