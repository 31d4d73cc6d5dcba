//! JVM methods and their parameter annotations.
use bitflags::bitflags;

use crate::{
    macros::see_jvm_spec,
    types::{field_type::FieldType, method_descriptor::MethodDescriptor},
};

use super::{
    annotation::Annotation,
    code::MethodBody,
    references::{ClassRef, MethodRef},
};

/// A JVM method.
#[doc = see_jvm_spec!(4, 6)]
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// The access flags of the method.
    pub access_flags: AccessFlags,
    /// The name of the method.
    pub name: String,
    /// The descriptor of the method.
    pub descriptor: MethodDescriptor,
    /// The class containing the method.
    pub owner: ClassRef,
    /// The body of the method, absent for `native` and `abstract` methods.
    pub body: Option<MethodBody>,
    /// The `RuntimeVisibleParameterAnnotations` of the method.
    pub runtime_visible_parameter_annotations: ParameterAnnotations,
    /// The `RuntimeInvisibleParameterAnnotations` of the method.
    pub runtime_invisible_parameter_annotations: ParameterAnnotations,
}

impl Method {
    /// The name of the constructor method.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";

    /// Creates a method without body and parameter annotations.
    pub fn new<S: Into<String>>(
        owner: ClassRef,
        access_flags: AccessFlags,
        name: S,
        descriptor: MethodDescriptor,
    ) -> Self {
        Self {
            access_flags,
            name: name.into(),
            descriptor,
            owner,
            body: None,
            runtime_visible_parameter_annotations: ParameterAnnotations::default(),
            runtime_invisible_parameter_annotations: ParameterAnnotations::default(),
        }
    }

    /// Creates a [`MethodRef`] referring to the method.
    #[must_use]
    pub fn make_reference(&self) -> MethodRef {
        MethodRef {
            owner: self.owner.clone(),
            name: self.name.clone(),
            descriptor: self.descriptor.clone(),
        }
    }

    /// Checks if the method is an instance initializer.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR_NAME
    }

    /// Returns the types of the parameters.
    #[must_use]
    pub fn parameter_types(&self) -> &[FieldType] {
        &self.descriptor.parameters_types
    }

    /// Returns the parameter annotations of the given visibility.
    #[must_use]
    pub fn parameter_annotations(&self, visibility: AnnotationVisibility) -> &ParameterAnnotations {
        match visibility {
            AnnotationVisibility::Visible => &self.runtime_visible_parameter_annotations,
            AnnotationVisibility::Invisible => &self.runtime_invisible_parameter_annotations,
        }
    }

    /// Returns the parameter annotations of the given visibility for modification.
    pub fn parameter_annotations_mut(
        &mut self,
        visibility: AnnotationVisibility,
    ) -> &mut ParameterAnnotations {
        match visibility {
            AnnotationVisibility::Visible => &mut self.runtime_visible_parameter_annotations,
            AnnotationVisibility::Invisible => &mut self.runtime_invisible_parameter_annotations,
        }
    }
}

/// The annotations attached to the parameters of a method.
#[doc = see_jvm_spec!(4, 7, 18)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterAnnotations {
    /// The annotations of each parameter, indexed by position.
    /// `None` if the method does not have the attribute.
    pub parameters: Option<Vec<Vec<Annotation>>>,
    /// The `num_parameters` item of the attribute.
    /// Consumers use this value rather than the length of [`Self::parameters`].
    pub annotable_parameter_count: Option<u8>,
}

impl ParameterAnnotations {
    /// Creates parameter annotations whose count matches the given list.
    ///
    /// # Panics
    /// Panics if there are more than 255 parameters.
    #[must_use]
    pub fn with_parameters(parameters: Vec<Vec<Annotation>>) -> Self {
        let count = u8::try_from(parameters.len()).expect("A method has at most 255 parameters");
        Self {
            parameters: Some(parameters),
            annotable_parameter_count: Some(count),
        }
    }
}

/// The retention of a set of annotations in the class file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnnotationVisibility {
    /// Retained and visible at runtime through reflection.
    #[display("RuntimeVisibleParameterAnnotations")]
    Visible,
    /// Retained in the class file but invisible at runtime.
    #[display("RuntimeInvisibleParameterAnnotations")]
    Invisible,
}

impl AnnotationVisibility {
    /// Both visibilities, visible first.
    pub const ALL: [Self; 2] = [Self::Visible, Self::Invisible];
}

bitflags! {
    /// The access flags of a method.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct AccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class and other classes belonging to the same nest.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; must not be overridden.
        const FINAL = 0x0010;
        /// Declared `synchronized`; invocation is wrapped by a monitor use.
        const SYNCHRONIZED = 0x0020;
        /// A bridge method, generated by the compiler.
        const BRIDGE = 0x0040;
        /// Declared with variable number of arguments.
        const VARARGS = 0x0080;
        /// Declared `native`; implemented in a language other than Java.
        const NATIVE = 0x0100;
        /// Declared `abstract`; no implementation is provided.
        const ABSTRACT = 0x0400;
        /// In a `class` file whose major version is at least 46 and at most 60; Declared `strictfp`.
        const STRICT = 0x0800;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_names_the_attribute() {
        assert_eq!(
            AnnotationVisibility::Visible.to_string(),
            "RuntimeVisibleParameterAnnotations"
        );
        assert_eq!(
            AnnotationVisibility::Invisible.to_string(),
            "RuntimeInvisibleParameterAnnotations"
        );
    }

    #[test]
    fn channels_are_independent() {
        let mut method = Method::new(
            ClassRef::new("org/pkg/MyClass"),
            AccessFlags::PUBLIC,
            Method::CONSTRUCTOR_NAME,
            "(I)V".parse().unwrap(),
        );
        *method.parameter_annotations_mut(AnnotationVisibility::Invisible) =
            ParameterAnnotations::with_parameters(vec![Vec::new()]);
        assert!(method.is_constructor());
        assert_eq!(
            method.runtime_invisible_parameter_annotations.annotable_parameter_count,
            Some(1)
        );
        assert_eq!(
            method.parameter_annotations(AnnotationVisibility::Visible),
            &ParameterAnnotations::default()
        );
    }
}
