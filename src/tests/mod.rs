use proptest::prelude::*;

use crate::{
    jvm::{
        annotation::Annotation,
        class::{InnerClassInfo, NestedClassAccessFlags},
        code::LocalVariableTableEntry,
        method::{AccessFlags, AnnotationVisibility, Method, ParameterAnnotations},
        references::ClassRef,
    },
    types::field_type::{FieldType, PrimitiveType},
};

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident =
        prop::string::string_regex(r"[a-zA-Z][a-zA-Z0-9\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..10).prop_map(|v| v.join("/"))
}

pub(crate) fn arb_non_array_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(FieldType::Base),
        arb_class_name().prop_map(FieldType::object),
    ]
}

prop_compose! {
    fn arb_array_field_type()(
        t in arb_non_array_field_type(),
        dim in 1..=u8::MAX
    ) -> FieldType {
        FieldType::array_of(t, dim)
    }
}

pub(crate) fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![arb_non_array_field_type(), arb_array_field_type()]
}

prop_compose! {
    pub(crate) fn arb_inner_class_info()(
        inner in arb_class_name(),
        outer in prop::option::of(arb_class_name()),
        inner_name in prop::option::of("[A-Z][a-z]{0,8}"),
        flags in any::<u16>(),
    ) -> InnerClassInfo {
        InnerClassInfo {
            inner_class: ClassRef::new(inner),
            outer_class: outer.map(ClassRef::new),
            inner_name,
            inner_class_access_flags: NestedClassAccessFlags::from_bits_truncate(flags),
        }
    }
}

pub(crate) fn inner_class_record(
    inner: &str,
    outer: Option<&str>,
    inner_name: Option<&str>,
) -> InnerClassInfo {
    InnerClassInfo {
        inner_class: ClassRef::new(inner),
        outer_class: outer.map(ClassRef::new),
        inner_name: inner_name.map(str::to_owned),
        inner_class_access_flags: NestedClassAccessFlags::PUBLIC,
    }
}

pub(crate) fn constructor(owner: &str, descriptor: &str) -> Method {
    Method::new(
        ClassRef::new(owner),
        AccessFlags::PUBLIC,
        Method::CONSTRUCTOR_NAME,
        descriptor.parse().expect("Invalid method descriptor"),
    )
}

pub(crate) fn annotation(simple_name: &str) -> Annotation {
    Annotation::marker(FieldType::object(format!("org/pkg/{simple_name}")))
}

pub(crate) fn annotated(
    mut method: Method,
    visibility: AnnotationVisibility,
    parameters: Vec<Vec<Annotation>>,
) -> Method {
    *method.parameter_annotations_mut(visibility) =
        ParameterAnnotations::with_parameters(parameters);
    method
}

pub(crate) fn local_variable(name: &str, index: u16) -> LocalVariableTableEntry {
    LocalVariableTableEntry {
        start_pc: 0,
        length: 5,
        name: name.to_owned(),
        var_type: Some(FieldType::Base(PrimitiveType::Int)),
        signature: None,
        index,
    }
}
