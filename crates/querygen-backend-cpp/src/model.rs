//! Resolved per-query class model.
//!
//! [`QueryClass::resolve`] turns a decoded query entry into everything the
//! renderers need: the class name, the presence of a member block, and the
//! per-category member lists already in declaration order with their storage
//! kinds resolved. Resolution is where an unsupported `(category, type)`
//! combination surfaces, before any file is written for the query.

use querygen_def::{
    sort_string_params_last, storage_kind, ParamCategory, ParamEntry, ParamType, QueryEntry,
    StorageKind,
};

use crate::error::StubError;

/// One member field of a generated query class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Parameter name with document casing. The member is `m<name>` and the
    /// lookup key is the name verbatim.
    pub name: String,
    /// Declared type from the document.
    pub param_type: ParamType,
    /// Resolved member storage.
    pub storage: StorageKind,
}

impl Member {
    /// The C++ member declaration line, default-initialized to the type's
    /// zero value.
    pub fn declaration(&self) -> String {
        format!("{} m{}{{}};", self.storage.cpp_type(), self.name)
    }
}

/// A query class ready for rendering.
#[derive(Debug, Clone)]
pub struct QueryClass {
    /// Normalized class name (first character upper-cased by the caller).
    pub name: String,
    /// Whether the declaration carries a protected member block. Presence of
    /// any category list in the record decides this, even an empty list.
    pub has_params: bool,
    /// Static members, string-typed last.
    pub static_members: Vec<Member>,
    /// Dynamic members, string-typed last.
    pub dynamic_members: Vec<Member>,
    /// AI-tree-variable members, string-typed last.
    pub tree_members: Vec<Member>,
}

impl QueryClass {
    /// Resolves a query entry into a renderable class.
    ///
    /// `name` must already be normalized. Fails on the first parameter whose
    /// declared type is unsupported in its category.
    pub fn resolve(name: &str, entry: &QueryEntry) -> Result<Self, StubError> {
        let Some(record) = entry.record() else {
            return Ok(Self::empty(name));
        };

        Ok(QueryClass {
            name: name.to_string(),
            has_params: record.has_params(),
            static_members: resolve_members(name, ParamCategory::Static, record.static_params())?,
            dynamic_members: resolve_members(
                name,
                ParamCategory::Dynamic,
                record.dynamic_params(),
            )?,
            tree_members: resolve_members(
                name,
                ParamCategory::AiTreeVariable,
                record.tree_variables(),
            )?,
        })
    }

    fn empty(name: &str) -> Self {
        QueryClass {
            name: name.to_string(),
            has_params: false,
            static_members: Vec::new(),
            dynamic_members: Vec::new(),
            tree_members: Vec::new(),
        }
    }

    /// Member declaration lines in class order: static, dynamic, then
    /// tree-variable members.
    pub fn member_declarations(&self) -> Vec<String> {
        self.static_members
            .iter()
            .chain(&self.dynamic_members)
            .chain(&self.tree_members)
            .map(Member::declaration)
            .collect()
    }
}

fn resolve_members(
    query: &str,
    category: ParamCategory,
    params: &[ParamEntry],
) -> Result<Vec<Member>, StubError> {
    sort_string_params_last(params)
        .into_iter()
        .map(|param| {
            let storage = storage_kind(category, param.param_type).map_err(|source| {
                StubError::UnsupportedParam {
                    query: query.to_string(),
                    param: param.name.clone(),
                    source,
                }
            })?;
            Ok(Member {
                name: param.name.clone(),
                param_type: param.param_type,
                storage,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use querygen_def::AiDef;

    use super::*;

    fn entry(doc: &str, name: &str) -> QueryEntry {
        AiDef::from_yaml_str(doc).unwrap().querys[name].clone()
    }

    #[test]
    fn members_are_resolved_string_last_per_category() {
        let doc = r#"
Querys:
  doSomething:
    StaticInstParams:
      - {Name: Mode, Type: String}
      - {Name: Threshold, Type: Float}
    DynamicInstParams:
      - {Name: Target, Type: Int}
      - {Name: Label, Type: String}
"#;
        let class = QueryClass::resolve("DoSomething", &entry(doc, "doSomething")).unwrap();

        assert!(class.has_params);
        assert_eq!(
            class.member_declarations(),
            vec![
                "const float* mThreshold{};",
                "sead::SafeString mMode{};",
                "int* mTarget{};",
                "sead::SafeString mLabel{};",
            ]
        );
    }

    #[test]
    fn placeholder_entry_resolves_to_empty_class() {
        let class = QueryClass::resolve("Attack", &entry("Querys:\n  attack: \"\"\n", "attack"))
            .unwrap();
        assert!(!class.has_params);
        assert!(class.member_declarations().is_empty());
    }

    #[test]
    fn empty_category_list_keeps_member_block() {
        let class = QueryClass::resolve(
            "Probe",
            &entry("Querys:\n  probe:\n    DynamicInstParams: []\n", "probe"),
        )
        .unwrap();
        assert!(class.has_params);
        assert!(class.member_declarations().is_empty());
    }

    #[test]
    fn unsupported_param_aborts_resolution() {
        let doc = r#"
Querys:
  broken:
    AITreeVariables:
      - {Name: Count, Type: Int}
"#;
        let err = QueryClass::resolve("Broken", &entry(doc, "broken")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Broken"));
        assert!(message.contains("Count"));
    }
}
