//! Aligns the parameter annotations of constructors with their source-level parameters.
//!
//! Compilers do not annotate synthetic parameters, and the `num_parameters` item of
//! `Runtime{Visible,Invisible}ParameterAnnotations` counts only the parameters that
//! appear in the source. After a class has been rewritten by an external tool, the
//! annotation lists may be padded with entries for the synthetic parameters. This
//! pass drops such entries and makes the annotable parameter count match the list.

use crate::{
    jvm::{
        class::Class,
        method::{AnnotationVisibility, Method, ParameterAnnotations},
        references::MethodRef,
    },
    macros::verbose_log,
    types::field_type::FieldType,
};

use super::{
    ClassTransformer, HostCapabilities, PipelineConfig,
    errors::{Anomaly, SetupError},
    synthetic::Classification,
};

/// Removes the parameter annotations of synthetic constructor parameters.
#[derive(Debug, Clone)]
pub struct ParameterAnnotationFixer {
    verbose: bool,
}

impl ParameterAnnotationFixer {
    /// Creates the pass.
    ///
    /// # Errors
    /// - [`SetupError::AnnotableParameterCountUnsupported`] if the host cannot keep the
    ///   annotable parameter count apart from the annotation list.
    pub fn new(config: &PipelineConfig) -> Result<Self, SetupError> {
        if !config
            .host_capabilities
            .contains(HostCapabilities::ANNOTABLE_PARAMETER_COUNT)
        {
            return Err(SetupError::AnnotableParameterCountUnsupported);
        }
        Ok(Self {
            verbose: config.verbose,
        })
    }

    /// Fixes a single constructor, given the synthetic parameters its class implies.
    /// Returns the anomalies found; the affected data is left as it was.
    pub fn fix_constructor(&self, method: &mut Method, synthetic: &[FieldType]) -> Vec<Anomaly> {
        let method_ref = method.make_reference();
        if !method.descriptor.parameters_start_with(synthetic) {
            let anomaly = Anomaly::SyntheticPrefixMismatch {
                method: method_ref,
                expected: synthetic.to_vec(),
            };
            verbose_log!(self.verbose, warn, "{anomaly}");
            return vec![anomaly];
        }
        let num_params = method.parameter_types().len();
        AnnotationVisibility::ALL
            .into_iter()
            .filter_map(|visibility| {
                self.align(
                    &method_ref,
                    visibility,
                    method.parameter_annotations_mut(visibility),
                    num_params,
                    synthetic.len(),
                )
            })
            .collect()
    }

    /// Aligns the annotations of one visibility.
    /// `num_synthetic` is never larger than `num_params` since the parameters start with them.
    fn align(
        &self,
        method: &MethodRef,
        visibility: AnnotationVisibility,
        annotations: &mut ParameterAnnotations,
        num_params: usize,
        num_synthetic: usize,
    ) -> Option<Anomaly> {
        let Some(parameters) = annotations.parameters.as_mut() else {
            verbose_log!(
                self.verbose,
                trace,
                "    {method} does not have a {visibility} attribute"
            );
            return None;
        };
        let count = parameters.len();
        let mut anomaly = if count == num_params {
            verbose_log!(
                self.verbose,
                info,
                "Found extra {visibility} entries in {method}: removing {num_synthetic}"
            );
            parameters.drain(..num_synthetic);
            None
        } else if count == num_params - num_synthetic {
            verbose_log!(
                self.verbose,
                info,
                "Number of {visibility} entries in {method} is already as we want"
            );
            None
        } else {
            Some(Anomaly::UnexpectedAnnotationCount {
                method: method.clone(),
                visibility,
                count,
            })
        };
        match u8::try_from(parameters.len()) {
            Ok(it) => annotations.annotable_parameter_count = Some(it),
            // More entries than a method can have parameters.
            Err(_) => {
                anomaly.get_or_insert_with(|| Anomaly::UnexpectedAnnotationCount {
                    method: method.clone(),
                    visibility,
                    count: parameters.len(),
                });
            }
        }
        if let Some(anomaly) = &anomaly {
            verbose_log!(self.verbose, warn, "{anomaly}");
        }
        anomaly
    }
}

impl ClassTransformer for ParameterAnnotationFixer {
    fn name(&self) -> &'static str {
        "parameter-annotations"
    }

    fn transform(&self, class: &mut Class) -> Vec<Anomaly> {
        let classification = Classification::of(class);
        let Some(synthetic) = classification.synthetic_parameters() else {
            verbose_log!(
                self.verbose,
                debug,
                "  Not considering {} for extra parameter annotations as {classification}",
                class.binary_name
            );
            return Vec::new();
        };
        verbose_log!(
            self.verbose,
            debug,
            "  Considering {} for extra parameter annotations as {classification}",
            class.binary_name
        );
        class
            .methods
            .iter_mut()
            .filter(|it| it.is_constructor())
            .flat_map(|it| self.fix_constructor(it, &synthetic))
            .collect()
    }
}
