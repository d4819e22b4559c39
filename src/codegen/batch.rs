//! Generation of many types at once.
//!
//! Types are independent of each other, so the batch driver fans them out over the rayon
//! thread pool. The registry and the method generator are shared by reference; results are
//! reported in input order regardless of which worker produced them.

use rayon::prelude::*;

use crate::{
    codegen::{CompileUnit, GeneratorConfig, MethodGenerator, TypeGenerator},
    metadata::{token::Token, typesystem::ManagedTypeRc},
    naming::NameRegistry,
    Error, Result,
};

/// A type whose generation failed
#[derive(Debug)]
pub struct GenerationFailure {
    /// Token of the type
    pub token: Token,
    /// Name key of the type
    pub type_name: String,
    /// Why generation failed
    pub error: Error,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Units of all types that generated successfully, in input order
    pub units: Vec<CompileUnit>,
    /// Types that were skipped, in input order
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    /// True if every type produced a unit
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generate the compile units of `types`.
///
/// ## Arguments
/// * 'types'    - The types to generate
/// * 'registry' - Name lookups shared by all workers
/// * 'methods'  - Method generator shared by all workers
/// * 'config'   - Generation settings, see [`GeneratorConfig::fail_fast`] and
///   [`GeneratorConfig::parallel`]
///
/// # Errors
/// With `fail_fast`, returns the error of the first failing type in input order. Otherwise
/// failures are collected in the report and this function does not fail.
pub fn generate_units(
    types: &[ManagedTypeRc],
    registry: &dyn NameRegistry,
    methods: &dyn MethodGenerator,
    config: &GeneratorConfig,
) -> Result<GenerationReport> {
    let generator = TypeGenerator::with_config(registry, methods, config.clone());

    let results: Vec<Result<CompileUnit>> = if config.parallel {
        types.par_iter().map(|ty| generator.generate(ty)).collect()
    } else {
        types.iter().map(|ty| generator.generate(ty)).collect()
    };

    let mut report = GenerationReport::default();
    for (ty, result) in types.iter().zip(results) {
        match result {
            Ok(unit) => report.units.push(unit),
            Err(error) if config.fail_fast => return Err(error),
            Err(error) => {
                log::warn!("skipping {} - {}", ty.name_key(), error);
                report.failures.push(GenerationFailure {
                    token: ty.token,
                    type_name: ty.name_key(),
                    error,
                });
            }
        }
    }

    log::debug!(
        "generated {} units, {} failures",
        report.units.len(),
        report.failures.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codegen::PrototypeGenerator,
        metadata::{attributes::TypeAttributes, signatures::TypeSignature, typesystem::TypeKind},
        test::factories::{add_field, core_types, insert_type, names},
    };

    fn fixture() -> (std::sync::Arc<crate::metadata::typesystem::TypeRegistry>, Vec<ManagedTypeRc>) {
        let types = core_types();
        let good = insert_type(&types, 30, "Demo", "Good", 0, TypeKind::empty());
        add_field(&good, 1, "value", TypeSignature::I4);
        let bad = insert_type(
            &types,
            31,
            "Demo",
            "Bad",
            TypeAttributes::EXPLICIT_LAYOUT,
            TypeKind::VALUE_TYPE,
        );
        let other = insert_type(&types, 32, "Demo", "Other", 0, TypeKind::empty());
        (types, vec![good, bad, other])
    }

    #[test]
    fn test_failures_skipped_and_reported() {
        let (types, batch) = fixture();
        let registry = names(&types);

        for parallel in [true, false] {
            let config = GeneratorConfig::default().with_parallel(parallel);
            let report = generate_units(&batch, &registry, &PrototypeGenerator, &config).unwrap();

            assert!(!report.is_complete());
            let names: Vec<_> = report.units.iter().map(|unit| unit.name.as_str()).collect();
            assert_eq!(names, vec!["cls_Demo_Good", "cls_Demo_Other"]);
            assert_eq!(report.failures.len(), 1);
            assert_eq!(report.failures[0].type_name, "Demo.Bad");
            assert!(matches!(
                report.failures[0].error,
                Error::UnsupportedLayout { .. }
            ));
        }
    }

    #[test]
    fn test_fail_fast() {
        let (types, batch) = fixture();
        let registry = names(&types);

        let result = generate_units(&batch, &registry, &PrototypeGenerator, &GeneratorConfig::strict());
        assert!(matches!(result, Err(Error::UnsupportedLayout { .. })));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let types = core_types();
        let registry = names(&types);
        let all = types.all_types();

        let parallel = generate_units(&all, &registry, &PrototypeGenerator, &GeneratorConfig::default()).unwrap();
        let sequential = generate_units(
            &all,
            &registry,
            &PrototypeGenerator,
            &GeneratorConfig::default().with_parallel(false),
        )
        .unwrap();

        assert!(parallel.is_complete());
        assert_eq!(parallel.units, sequential.units);
        assert_eq!(parallel.units.len(), types.len());
    }
}
