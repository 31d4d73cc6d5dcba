//! Strips local variable tables from method bodies.
use crate::{jvm::class::Class, macros::verbose_log};

use super::{ClassTransformer, PipelineConfig, errors::Anomaly};

/// Removes the `LocalVariableTable` and `LocalVariableTypeTable` of every method.
/// The instructions and all other attributes are kept as they are.
#[derive(Debug, Clone)]
pub struct LocalVariableTableStripper {
    verbose: bool,
}

impl LocalVariableTableStripper {
    /// Creates the pass.
    #[must_use]
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            verbose: config.verbose,
        }
    }
}

impl ClassTransformer for LocalVariableTableStripper {
    fn name(&self) -> &'static str {
        "local-variable-table"
    }

    fn transform(&self, class: &mut Class) -> Vec<Anomaly> {
        for method in &mut class.methods {
            let Some(body) = method.body.as_mut() else {
                continue;
            };
            let stripped = body
                .local_variable_table
                .take_if(|it| !it.is_empty())
                .map(|it| it.len());
            if let Some(len) = stripped {
                verbose_log!(
                    self.verbose,
                    trace,
                    "    Removed {len} local variables from {}",
                    method.make_reference()
                );
            }
        }
        Vec::new()
    }
}
