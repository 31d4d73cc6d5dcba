//! Normalization passes applied to classes after they have been remapped.
//!
//! - [`ParameterAnnotationFixer`]: drops the parameter annotations of synthetic
//!   constructor parameters (see [`synthetic`] for which constructors have them).
//! - [`LocalVariableTableStripper`]: removes local variable tables.
//!
//! The passes are composed by a [`Pipeline`], which runs them in order on one
//! class at a time. Nothing is shared between classes.
//!
//! # Example
//!
//! ```
//! use jvm_normalize::{
//!     jvm::class::{AccessFlags, Class},
//!     transform::{Pipeline, PipelineConfig},
//! };
//!
//! let pipeline = Pipeline::new(&PipelineConfig::default().with_verbose(true))?;
//! let mut class = Class::new(AccessFlags::PUBLIC | AccessFlags::SUPER, "org/pkg/MyClass");
//! let anomalies = pipeline.transform(&mut class);
//! assert!(anomalies.is_empty());
//! # Ok::<(), jvm_normalize::transform::SetupError>(())
//! ```

use bitflags::bitflags;

use crate::{jvm::class::Class, macros::verbose_log};

pub mod errors;
pub mod local_variables;
pub mod parameter_annotations;
pub mod synthetic;

pub use errors::{Anomaly, SetupError};
pub use local_variables::LocalVariableTableStripper;
pub use parameter_annotations::ParameterAnnotationFixer;

/// A pass that normalizes a [`Class`] in place.
pub trait ClassTransformer: std::fmt::Debug + Send + Sync {
    /// A short name of the pass for diagnostics.
    fn name(&self) -> &'static str;

    /// Transforms the class in place.
    /// Returns the anomalies the pass found and left untouched.
    fn transform(&self, class: &mut Class) -> Vec<Anomaly>;
}

bitflags! {
    /// What the host's class representation is able to store and write back.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct HostCapabilities: u8 {
        /// The `num_parameters` item of parameter annotation attributes is kept
        /// apart from the length of the annotation list.
        const ANNOTABLE_PARAMETER_COUNT = 0x01;
    }
}

/// The configuration shared by all passes of a [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Whether the passes log their decisions and the anomalies they find.
    pub verbose: bool,
    /// The capabilities of the host's class representation.
    pub host_capabilities: HostCapabilities,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            host_capabilities: HostCapabilities::all(),
        }
    }
}

impl PipelineConfig {
    /// Sets whether the passes log.
    #[must_use]
    pub fn with_verbose(self, verbose: bool) -> Self {
        Self { verbose, ..self }
    }

    /// Sets the capabilities of the host.
    #[must_use]
    pub fn with_host_capabilities(self, host_capabilities: HostCapabilities) -> Self {
        Self {
            host_capabilities,
            ..self
        }
    }
}

/// An ordered list of passes.
#[derive(Debug)]
pub struct Pipeline {
    verbose: bool,
    stages: Vec<Box<dyn ClassTransformer>>,
}

impl Pipeline {
    /// Creates a pipeline with the [`ParameterAnnotationFixer`] followed by the
    /// [`LocalVariableTableStripper`].
    ///
    /// # Errors
    /// See [`SetupError`].
    pub fn new(config: &PipelineConfig) -> Result<Self, SetupError> {
        Ok(Self::empty(config)
            .with_stage(ParameterAnnotationFixer::new(config)?)
            .with_stage(LocalVariableTableStripper::new(config)))
    }

    /// Creates a pipeline without any pass.
    #[must_use]
    pub fn empty(config: &PipelineConfig) -> Self {
        Self {
            verbose: config.verbose,
            stages: Vec::new(),
        }
    }

    /// Appends a pass to the pipeline.
    #[must_use]
    pub fn with_stage<T: ClassTransformer + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the names of the passes in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|it| it.name())
    }

    /// Runs every pass once on the class.
    /// Returns the anomalies found by all passes.
    pub fn transform(&self, class: &mut Class) -> Vec<Anomaly> {
        self.stages
            .iter()
            .flat_map(|stage| {
                verbose_log!(
                    self.verbose,
                    trace,
                    "Running {} on {}",
                    stage.name(),
                    class.binary_name
                );
                stage.transform(class)
            })
            .collect()
    }

    /// Runs the pipeline on each class in turn.
    pub fn transform_all(&self, classes: &mut [Class]) -> Vec<Anomaly> {
        classes
            .iter_mut()
            .flat_map(|class| self.transform(class))
            .collect()
    }

    /// Runs the pipeline on the classes in parallel.
    /// The anomalies are returned in the order of the classes.
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    pub fn transform_all_parallel(&self, classes: &mut [Class]) -> Vec<Anomaly> {
        use rayon::prelude::*;

        classes
            .par_iter_mut()
            .flat_map_iter(|class| self.transform(class))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        jvm::{class::AccessFlags, method::AnnotationVisibility},
        tests::{annotated, annotation, constructor, inner_class_record},
    };

    #[derive(Debug)]
    struct RenameClass(&'static str);

    impl ClassTransformer for RenameClass {
        fn name(&self) -> &'static str {
            "rename"
        }

        fn transform(&self, class: &mut Class) -> Vec<Anomaly> {
            class.binary_name = self.0.to_owned();
            Vec::new()
        }
    }

    #[test]
    fn default_pipeline_stages() {
        let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
        assert_eq!(
            pipeline.stage_names().collect::<Vec<_>>(),
            ["parameter-annotations", "local-variable-table"]
        );
    }

    #[test]
    fn setup_fails_before_any_class() {
        let config = PipelineConfig::default().with_host_capabilities(HostCapabilities::empty());
        assert_eq!(
            Pipeline::new(&config).unwrap_err(),
            SetupError::AnnotableParameterCountUnsupported
        );
    }

    #[test]
    fn stages_run_in_order() {
        let pipeline = Pipeline::empty(&PipelineConfig::default())
            .with_stage(RenameClass("Outer$Inner"))
            .with_stage(ParameterAnnotationFixer::new(&PipelineConfig::default()).unwrap());
        let mut class = Class::new(AccessFlags::SUPER, "Renamed");
        class
            .inner_classes
            .push(inner_class_record("Outer$Inner", Some("Outer"), Some("Inner")));
        class.methods.push(annotated(
            constructor("Outer$Inner", "(LOuter;)V"),
            AnnotationVisibility::Visible,
            vec![vec![annotation("A0")]],
        ));
        assert!(pipeline.transform(&mut class).is_empty());
        assert_eq!(
            class.methods[0].runtime_visible_parameter_annotations.parameters,
            Some(Vec::new())
        );
    }
}
