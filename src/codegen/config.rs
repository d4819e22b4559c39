//! Configuration for the type generator.
//!
//! Controls text formatting of the emitted fragments, dependency tracking and the behaviour of
//! the batch driver.

/// Configuration for [`crate::codegen::TypeGenerator`] and [`crate::codegen::generate_units`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Indentation unit for one nesting level (default: a tab).
    pub indent: String,

    /// Emit `// ...` provenance annotations before structs, fields and methods (default: true).
    pub emit_provenance: bool,

    /// Add the base struct's name to the declaration dependencies (default: true).
    ///
    /// A derived struct can not be defined before its base is complete. Disable only when the
    /// downstream assembler orders inheritance itself.
    pub track_base_dependency: bool,

    /// Stop the batch driver at the first failing type (default: false).
    ///
    /// When disabled, failing types are logged, recorded in the report and skipped.
    pub fail_fast: bool,

    /// Generate types in parallel on the rayon thread pool (default: true).
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            emit_provenance: true,
            track_base_dependency: true,
            fail_fast: false,
            parallel: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for strict builds: stop at the first error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fail_fast: true,
            ..Self::default()
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Enables or disables provenance annotations.
    #[must_use]
    pub fn with_provenance(mut self, enabled: bool) -> Self {
        self.emit_provenance = enabled;
        self
    }

    /// Enables or disables tracking of the base struct as a declaration dependency.
    #[must_use]
    pub fn with_base_dependency(mut self, enabled: bool) -> Self {
        self.track_base_dependency = enabled;
        self
    }

    /// Enables or disables fail-fast batch generation.
    #[must_use]
    pub fn with_fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Enables or disables parallel batch generation.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.indent, "\t");
        assert!(config.emit_provenance);
        assert!(config.track_base_dependency);
        assert!(!config.fail_fast);
        assert!(config.parallel);
        assert_eq!(config, GeneratorConfig::new());
    }

    #[test]
    fn test_builders() {
        let config = GeneratorConfig::strict()
            .with_indent("    ")
            .with_provenance(false)
            .with_base_dependency(false)
            .with_parallel(false);

        assert!(config.fail_fast);
        assert_eq!(config.indent, "    ");
        assert!(!config.emit_provenance);
        assert!(!config.track_base_dependency);
        assert!(!config.parallel);
        assert!(!config.with_fail_fast(false).fail_fast);
    }
}
