//! Definition document validation.
//!
//! Validation is a read-only pass over a decoded document. It reports every
//! problem it can find instead of stopping at the first one, so a `validate`
//! run gives a complete picture before any stub is written. Generation does
//! not depend on this pass; it fails fast on its own when it hits an
//! unsupported parameter.

use std::collections::HashSet;

use crate::def::{AiDef, QueryRecord};
use crate::error::{ValidationError, ValidationResult, ValidationWarning};
use crate::param::{storage_kind, ParamCategory, ParamEntry};

/// Validates a definition document and returns all errors and warnings.
///
/// Checked per non-system query:
/// - every parameter's declared type has a storage mapping in its category
///   (error; generation would abort on the same parameter),
/// - parameter names are unique within one category list (warning; the
///   generator assumes this and does not enforce it).
///
/// A document with no generatable queries at all gets a warning.
pub fn validate_def(def: &AiDef) -> ValidationResult {
    let mut result = ValidationResult::default();

    let mut generatable = 0usize;
    for (name, entry) in &def.querys {
        if entry.is_system() {
            continue;
        }
        generatable += 1;

        if let Some(record) = entry.record() {
            validate_record(name, record, &mut result);
        }
    }

    if generatable == 0 {
        result.add_warning(ValidationWarning::new(
            "document contains no generatable queries",
        ));
    }

    result
}

fn validate_record(query_name: &str, record: &QueryRecord, result: &mut ValidationResult) {
    let categories = [
        (ParamCategory::Static, record.static_params()),
        (ParamCategory::Dynamic, record.dynamic_params()),
        (ParamCategory::AiTreeVariable, record.tree_variables()),
    ];

    for (category, params) in categories {
        validate_params(query_name, category, params, result);
    }
}

fn validate_params(
    query_name: &str,
    category: ParamCategory,
    params: &[ParamEntry],
    result: &mut ValidationResult,
) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, param) in params.iter().enumerate() {
        let path = format!("Querys.{}.{}[{}]", query_name, category.list_key(), index);

        if let Err(err) = storage_kind(category, param.param_type) {
            result.add_error(ValidationError::with_path(
                format!("parameter \"{}\": {}", param.name, err),
                path.clone(),
            ));
        }

        if !seen.insert(param.name.as_str()) {
            result.add_warning(ValidationWarning::with_path(
                format!("duplicate parameter name \"{}\"", param.name),
                path,
            ));
        }
    }
}
