//! The AI definition document and its query entries.
//!
//! The document is the YAML text form of the game's AI parameter archive.
//! Only the top-level `Querys` mapping is modeled; other top-level sections
//! are ignored. Decoding is eager: a malformed entry or an unknown declared
//! type fails the whole load instead of surfacing later during rendering.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::DefError;
use crate::param::ParamEntry;

/// A decoded AI definition document.
///
/// Entry order of the `Querys` mapping is the document's own order, which is
/// also the order stubs are generated and reported in.
#[derive(Debug, Clone, Deserialize)]
pub struct AiDef {
    #[serde(rename = "Querys")]
    pub querys: IndexMap<String, QueryEntry>,
}

impl AiDef {
    /// Decodes a definition document from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, DefError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// One entry of the `Querys` mapping.
#[derive(Debug, Clone)]
pub enum QueryEntry {
    /// A placeholder with no parameter specification (`name: ""` or a null
    /// value in the document).
    Empty,
    /// A full query record.
    Record(QueryRecord),
}

impl QueryEntry {
    /// Returns the record, if this entry has one.
    pub fn record(&self) -> Option<&QueryRecord> {
        match self {
            QueryEntry::Empty => None,
            QueryEntry::Record(record) => Some(record),
        }
    }

    /// True when the entry is a record flagged as a system query. System
    /// queries are excluded from generation entirely.
    pub fn is_system(&self) -> bool {
        self.record().is_some_and(QueryRecord::is_system)
    }
}

impl<'de> Deserialize<'de> for QueryEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        match value {
            serde_yaml::Value::Null => Ok(QueryEntry::Empty),
            serde_yaml::Value::String(s) if s.is_empty() => Ok(QueryEntry::Empty),
            mapping @ serde_yaml::Value::Mapping(_) => serde_yaml::from_value(mapping)
                .map(QueryEntry::Record)
                .map_err(serde::de::Error::custom),
            other => Err(serde::de::Error::custom(format!(
                "query entry must be a record or an empty placeholder, got {}",
                value_kind(&other)
            ))),
        }
    }
}

fn value_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a bool",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// A structured query record.
///
/// All fields are optional and presence-preserving: a category list that is
/// present but empty is distinct from an absent one, because presence alone
/// decides whether the generated class declares a protected member block.
/// Fields outside the modeled set are kept for the driver's diagnostic
/// field-name union.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRecord {
    #[serde(rename = "SystemQuery")]
    pub system_query: Option<bool>,
    #[serde(rename = "StaticInstParams")]
    pub static_inst_params: Option<Vec<ParamEntry>>,
    #[serde(rename = "DynamicInstParams")]
    pub dynamic_inst_params: Option<Vec<ParamEntry>>,
    #[serde(rename = "AITreeVariables")]
    pub ai_tree_variables: Option<Vec<ParamEntry>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl QueryRecord {
    /// True when the record is flagged `SystemQuery: true`.
    pub fn is_system(&self) -> bool {
        self.system_query.unwrap_or(false)
    }

    /// True when any parameter category list is present, even if empty.
    pub fn has_params(&self) -> bool {
        self.static_inst_params.is_some()
            || self.dynamic_inst_params.is_some()
            || self.ai_tree_variables.is_some()
    }

    /// The static parameter list, absent treated as empty.
    pub fn static_params(&self) -> &[ParamEntry] {
        self.static_inst_params.as_deref().unwrap_or(&[])
    }

    /// The dynamic parameter list, absent treated as empty.
    pub fn dynamic_params(&self) -> &[ParamEntry] {
        self.dynamic_inst_params.as_deref().unwrap_or(&[])
    }

    /// The AI-tree-variable list, absent treated as empty.
    pub fn tree_variables(&self) -> &[ParamEntry] {
        self.ai_tree_variables.as_deref().unwrap_or(&[])
    }

    /// All top-level field names present on this record, modeled and
    /// unmodeled alike.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        let known = [
            self.system_query.is_some().then_some("SystemQuery"),
            self.static_inst_params
                .is_some()
                .then_some("StaticInstParams"),
            self.dynamic_inst_params
                .is_some()
                .then_some("DynamicInstParams"),
            self.ai_tree_variables.is_some().then_some("AITreeVariables"),
        ];
        known
            .into_iter()
            .flatten()
            .chain(self.extra.keys().map(String::as_str))
    }
}

/// Normalizes a query name into its class name by upper-casing the first
/// character only. The rest of the name keeps its document casing.
pub fn capitalize_query_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::param::ParamType;

    const EXAMPLE: &str = r#"
Querys:
  doSomething:
    DynamicInstParams:
      - {Name: Target, Type: Int}
      - {Name: Label, Type: String}
  attack: ""
  checkFlag:
    SystemQuery: true
    StaticInstParams:
      - {Name: FlagName, Type: String}
"#;

    #[test]
    fn decodes_entries_in_document_order() {
        let def = AiDef::from_yaml_str(EXAMPLE).unwrap();
        let names: Vec<&str> = def.querys.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["doSomething", "attack", "checkFlag"]);
    }

    #[test]
    fn decodes_record_and_placeholder_entries() {
        let def = AiDef::from_yaml_str(EXAMPLE).unwrap();

        let record = def.querys["doSomething"].record().unwrap();
        assert!(record.has_params());
        assert_eq!(record.dynamic_params().len(), 2);
        assert_eq!(record.dynamic_params()[0].name, "Target");
        assert_eq!(record.dynamic_params()[0].param_type, ParamType::Int);
        assert!(record.static_params().is_empty());

        assert!(def.querys["attack"].record().is_none());
        assert!(!def.querys["attack"].is_system());
    }

    #[test]
    fn system_flag_is_detected() {
        let def = AiDef::from_yaml_str(EXAMPLE).unwrap();
        assert!(def.querys["checkFlag"].is_system());
        assert!(!def.querys["doSomething"].is_system());
    }

    #[test]
    fn null_entry_is_a_placeholder() {
        let def = AiDef::from_yaml_str("Querys:\n  idle: ~\n").unwrap();
        assert!(def.querys["idle"].record().is_none());
    }

    #[test]
    fn missing_querys_section_is_rejected() {
        let err = AiDef::from_yaml_str("Actions: {}\n").unwrap_err();
        assert!(err.to_string().contains("Querys"));
    }

    #[test]
    fn non_record_entry_shape_is_rejected() {
        let err = AiDef::from_yaml_str("Querys:\n  bad: 7\n").unwrap_err();
        assert!(err.to_string().contains("query entry"));
    }

    #[test]
    fn unknown_param_type_is_rejected_at_decode() {
        let doc = r#"
Querys:
  broken:
    DynamicInstParams:
      - {Name: Target, Type: Vec3}
"#;
        assert!(AiDef::from_yaml_str(doc).is_err());
    }

    #[test]
    fn empty_category_list_still_counts_as_params() {
        let def = AiDef::from_yaml_str("Querys:\n  probe:\n    StaticInstParams: []\n").unwrap();
        let record = def.querys["probe"].record().unwrap();
        assert!(record.has_params());
        assert!(record.static_params().is_empty());
    }

    #[test]
    fn field_names_cover_modeled_and_extra_fields() {
        let doc = r#"
Querys:
  probe:
    DynamicInstParams: []
    SpawnFlags: 3
"#;
        let def = AiDef::from_yaml_str(doc).unwrap();
        let record = def.querys["probe"].record().unwrap();
        let mut names: Vec<&str> = record.field_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["DynamicInstParams", "SpawnFlags"]);
    }

    #[test]
    fn capitalize_upper_cases_first_character_only() {
        assert_eq!(capitalize_query_name("attack"), "Attack");
        assert_eq!(capitalize_query_name("doSomething"), "DoSomething");
        assert_eq!(capitalize_query_name("Attack"), "Attack");
        assert_eq!(capitalize_query_name(""), "");
    }
}
