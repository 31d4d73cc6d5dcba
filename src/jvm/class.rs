//! Module for the APIs for the class in JVM.
use bitflags::bitflags;

use crate::{macros::see_jvm_spec, types::method_descriptor::MethodDescriptor};

use super::{method::Method, references::ClassRef};

/// A JVM class, as handed over by the host after parsing.
#[doc = see_jvm_spec!(4)]
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// The access modifiers of the class.
    pub access_flags: AccessFlags,
    /// The binary name of the class (e.g., `org/pkg/Outer$Inner`).
    pub binary_name: String,
    /// The records of the `InnerClasses` attribute.
    pub inner_classes: Vec<InnerClassInfo>,
    /// The methods declared in the class.
    pub methods: Vec<Method>,
}

impl Class {
    /// Creates a class without inner class records and methods.
    pub fn new<S: Into<String>>(access_flags: AccessFlags, binary_name: S) -> Self {
        Self {
            access_flags,
            binary_name: binary_name.into(),
            inner_classes: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Gets a method of the class by its name and descriptor.
    #[must_use]
    pub fn get_method(&self, name: &str, descriptor: &MethodDescriptor) -> Option<&Method> {
        self.methods
            .iter()
            .find(|m| m.name == name && &m.descriptor == descriptor)
    }

    /// Gets the inner class record describing this class itself, if any.
    /// The `InnerClasses` attribute also lists every nested type the class refers to,
    /// so only the record whose inner class is this class is returned.
    #[must_use]
    pub fn inner_class_info(&self) -> Option<&InnerClassInfo> {
        self.inner_classes
            .iter()
            .find(|it| it.inner_class.binary_name == self.binary_name)
    }
}

/// The information of an inner class.
#[doc = see_jvm_spec!(4, 7, 6)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerClassInfo {
    /// The inner class.
    pub inner_class: ClassRef,
    /// The outer class, absent for local and anonymous classes.
    pub outer_class: Option<ClassRef>,
    /// The simple name of the inner class, absent for anonymous classes.
    pub inner_name: Option<String>,
    /// The access flags of the inner class.
    pub inner_class_access_flags: NestedClassAccessFlags,
}

impl InnerClassInfo {
    /// Returns `true` if the record describes an anonymous class.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.inner_name.is_none()
    }
}

bitflags! {
    /// The access flags of a [`Class`].
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct AccessFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `final`; no subclasses allowed.
        const FINAL = 0x0010;
        /// Treat superclass methods specially when invoked by the invokespecial instruction.
        const SUPER = 0x0020;
        /// Is an interface, not a class.
        const INTERFACE = 0x0200;
        /// Declared `abstract`; must not be instantiated.
        const ABSTRACT = 0x0400;
        /// Declared synthetic; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an enum class.
        const ENUM = 0x4000;
        /// Is a module, not a class or interface.
        const MODULE = 0x8000;
    }
}

bitflags! {
    /// The access flags of a nested class.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct NestedClassAccessFlags: u16 {
        /// Marked or implicitly `public` in source.
        const PUBLIC = 0x0001;
        /// Marked `private` in source.
        const PRIVATE = 0x0002;
        /// Marked `protected` in source.
        const PROTECTED = 0x0004;
        /// Marked or implicitly `static` in source.
        const STATIC = 0x0008;
        /// Marked `final` in source.
        const FINAL = 0x0010;
        /// Was an `interface` in source.
        const INTERFACE = 0x0200;
        /// Marked or implicitly `abstract` in source.
        const ABSTRACT = 0x0400;
        /// Declared `synthetic`; not present in the source code.
        const SYNTHETIC = 0x1000;
        /// Declared as an annotation interface.
        const ANNOTATION = 0x2000;
        /// Declared as an enum class.
        const ENUM = 0x4000;
    }
}
