//! Parameter types, categories, and member-storage resolution.
//!
//! Every query parameter carries a declared type from the document and
//! belongs to one of three categories, depending on which list of the query
//! record it appears in. The category and the declared type together decide
//! how the generated class stores the parameter; unsupported combinations
//! are an error, never a silently dropped parameter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared type of a query parameter, as spelled in the definition
/// document. Unknown spellings are rejected when the document is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    Bool,
    Int,
    Float,
    String,
    #[serde(rename = "AITreeVariablePointer")]
    AiTreeVariablePointer,
}

impl ParamType {
    /// Returns the type's document spelling. This is also the suffix used by
    /// the event-flow loader calls (`loadInt`, `loadString`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Bool => "Bool",
            ParamType::Int => "Int",
            ParamType::Float => "Float",
            ParamType::String => "String",
            ParamType::AiTreeVariablePointer => "AITreeVariablePointer",
        }
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which parameter list of a query record a parameter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamCategory {
    /// Resolved once at construction time (`StaticInstParams`).
    Static,
    /// Re-resolved on every load (`DynamicInstParams`).
    Dynamic,
    /// Bound to the external tree-variable store (`AITreeVariables`).
    AiTreeVariable,
}

impl ParamCategory {
    /// Returns the document key of the list this category corresponds to.
    pub fn list_key(&self) -> &'static str {
        match self {
            ParamCategory::Static => "StaticInstParams",
            ParamCategory::Dynamic => "DynamicInstParams",
            ParamCategory::AiTreeVariable => "AITreeVariables",
        }
    }
}

impl std::fmt::Display for ParamCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.list_key())
    }
}

/// A single `(Name, Type)` parameter entry from one of a query record's
/// parameter lists. Extra fields on an entry are ignored, matching what the
/// game's own definition files carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub param_type: ParamType,
}

/// How a generated class stores one parameter member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// `const bool*` (static).
    ConstBoolPtr,
    /// `const int*` (static).
    ConstIntPtr,
    /// `const float*` (static).
    ConstFloatPtr,
    /// `bool*` (dynamic).
    BoolPtr,
    /// `int*` (dynamic).
    IntPtr,
    /// `float*` (dynamic).
    FloatPtr,
    /// `sead::SafeString` by value (static or dynamic strings).
    SafeString,
    /// `sead::SafeString*` (tree-variable strings).
    SafeStringPtr,
    /// `void*` (tree-variable pointers).
    UntypedPtr,
}

impl StorageKind {
    /// Returns the C++ member type text for this storage kind.
    pub fn cpp_type(&self) -> &'static str {
        match self {
            StorageKind::ConstBoolPtr => "const bool*",
            StorageKind::ConstIntPtr => "const int*",
            StorageKind::ConstFloatPtr => "const float*",
            StorageKind::BoolPtr => "bool*",
            StorageKind::IntPtr => "int*",
            StorageKind::FloatPtr => "float*",
            StorageKind::SafeString => "sead::SafeString",
            StorageKind::SafeStringPtr => "sead::SafeString*",
            StorageKind::UntypedPtr => "void*",
        }
    }
}

/// A parameter whose declared type has no storage mapping in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("type {param_type} is not supported in {category}")]
pub struct UnsupportedParam {
    pub category: ParamCategory,
    pub param_type: ParamType,
}

/// Resolves the member storage for a `(category, declared type)` pair.
///
/// The match is exhaustive over both enums, so every unsupported combination
/// is an explicit arm rather than a lookup miss.
pub fn storage_kind(
    category: ParamCategory,
    param_type: ParamType,
) -> Result<StorageKind, UnsupportedParam> {
    use ParamCategory::*;
    use ParamType::*;

    match (category, param_type) {
        (Static, Bool) => Ok(StorageKind::ConstBoolPtr),
        (Static, Int) => Ok(StorageKind::ConstIntPtr),
        (Static, Float) => Ok(StorageKind::ConstFloatPtr),
        (Static, String) => Ok(StorageKind::SafeString),
        (Dynamic, Bool) => Ok(StorageKind::BoolPtr),
        (Dynamic, Int) => Ok(StorageKind::IntPtr),
        (Dynamic, Float) => Ok(StorageKind::FloatPtr),
        (Dynamic, String) => Ok(StorageKind::SafeString),
        (AiTreeVariable, String) => Ok(StorageKind::SafeStringPtr),
        (AiTreeVariable, AiTreeVariablePointer) => Ok(StorageKind::UntypedPtr),
        (Static | Dynamic, AiTreeVariablePointer) | (AiTreeVariable, Bool | Int | Float) => {
            Err(UnsupportedParam {
                category,
                param_type,
            })
        }
    }
}

/// Orders a parameter list so that every `String`-typed entry comes after
/// every non-`String` entry. The sort is stable: relative order within each
/// of the two groups is the document order.
///
/// The generated classes declare pointer/value members before string
/// members, and the loader bodies bind in the same order.
pub fn sort_string_params_last(params: &[ParamEntry]) -> Vec<&ParamEntry> {
    let mut sorted: Vec<&ParamEntry> = params.iter().collect();
    sorted.sort_by_key(|param| param.param_type == ParamType::String);
    sorted
}
