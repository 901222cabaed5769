//! Typed model of game AI definition documents.
//!
//! This crate decodes the YAML text form of the game's AI parameter archive
//! into an explicit schema and provides the pieces the stub generator builds
//! on:
//!
//! - [`AiDef`]: the decoded document, `Querys` entries in document order
//! - [`QueryRecord`] / [`ParamEntry`] / [`ParamType`]: the typed query shape
//! - [`storage_kind`]: exhaustive `(category, type)` → member-storage
//!   resolution
//! - [`sort_string_params_last`]: the stable string-last parameter ordering
//!   shared by declarations and loader bodies
//! - [`validate_def`]: a read-only diagnostic pass over a whole document
//!
//! Decoding is strict where it matters: an unknown declared type or a query
//! entry of the wrong shape fails the load. Fields the generator does not
//! model are preserved on the record for diagnostics rather than rejected,
//! since the game's own files carry more than the generator reads.
//!
//! # Example
//!
//! ```
//! use querygen_def::{AiDef, ParamCategory, storage_kind};
//!
//! let def = AiDef::from_yaml_str(
//!     "Querys:\n  doSomething:\n    DynamicInstParams:\n      - {Name: Target, Type: Int}\n",
//! )
//! .unwrap();
//!
//! let record = def.querys["doSomething"].record().unwrap();
//! let param = &record.dynamic_params()[0];
//! let storage = storage_kind(ParamCategory::Dynamic, param.param_type).unwrap();
//! assert_eq!(storage.cpp_type(), "int*");
//! ```

pub mod def;
pub mod error;
pub mod param;
pub mod validation;

pub use def::{capitalize_query_name, AiDef, QueryEntry, QueryRecord};
pub use error::{DefError, ValidationError, ValidationResult, ValidationWarning};
pub use param::{
    sort_string_params_last, storage_kind, ParamCategory, ParamEntry, ParamType, StorageKind,
    UnsupportedParam,
};
pub use validation::validate_def;
