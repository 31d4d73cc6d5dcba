//! Module for the APIs for the annotation in JVM.
use crate::{
    macros::see_jvm_spec,
    types::{field_type::FieldType, method_descriptor::ReturnType},
};

/// An annotation attached to a class, a method, or a parameter.
#[doc = see_jvm_spec!(4, 7, 16)]
#[derive(Debug, PartialEq, Clone)]
pub struct Annotation {
    /// The type of the annotation.
    pub annotation_type: FieldType,
    /// The names and values of the annotation elements.
    pub element_value_pairs: Vec<(String, ElementValue)>,
}

impl Annotation {
    /// Creates an annotation of the given type without any element.
    #[must_use]
    pub fn marker(annotation_type: FieldType) -> Self {
        Self {
            annotation_type,
            element_value_pairs: Vec::new(),
        }
    }
}

/// A value of an annotation field.
#[doc = see_jvm_spec!(4, 7, 16, 1)]
#[derive(Debug, PartialEq, Clone)]
pub enum ElementValue {
    /// A `boolean` constant.
    Boolean(bool),
    /// An `int` constant, also used for `byte`, `char`, and `short`.
    Int(i32),
    /// A `long` constant.
    Long(i64),
    /// A `float` constant.
    Float(f32),
    /// A `double` constant.
    Double(f64),
    /// A constant value in String type.
    String(String),
    /// An enum constant.
    EnumConstant {
        /// The name of the enum type.
        enum_type_name: String,
        /// The name of the enum constant.
        const_name: String,
    },
    /// A class literal.
    Class {
        /// The descriptor of the class literal.
        return_descriptor: ReturnType,
    },
    /// Another annotation.
    AnnotationInterface(Annotation),
    /// An array of values.
    Array(Vec<ElementValue>),
}
