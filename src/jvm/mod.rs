//! Module containing the APIs for the JVM elements.
//!
//! The elements are the in-memory form of a parsed class file. Parsing and
//! serialization are done by the host; the passes in [`crate::transform`]
//! only read and mutate these structures.

pub mod annotation;
pub mod class;
pub mod code;
pub mod method;
pub mod references;

pub use annotation::{Annotation, ElementValue};
pub use class::{Class, InnerClassInfo};
pub use code::{LocalVariableTable, MethodBody};
pub use method::{AnnotationVisibility, Method, ParameterAnnotations};
