//! Definition (translation unit) renderer.

use crate::model::{Member, QueryClass};
use crate::writer::SourceWriter;

/// Renders the translation-unit artifact for a query class.
///
/// Emits the constructor, defaulted destructor, a stubbed `doQuery`, the
/// event-flow `loadParams` overload, and the legacy `loadParams`. Loader
/// bodies bind members in the fixed category order with string-typed
/// parameters last within each category.
pub fn render_definition(class: &QueryClass) -> String {
    let mut w = SourceWriter::new();
    let name = &class.name;

    w.line(&format!("#include \"Game/AI/Query/query{}.h\"", name));
    w.line("#include <evfl/query.h>");
    w.blank();
    w.line("namespace uking::query {");
    w.blank();
    w.line(&format!(
        "{}::{}(const InitArg& arg) : ksys::act::ai::Query(arg) {{}}",
        name, name
    ));
    w.blank();
    w.line(&format!("{}::~{}() = default;", name, name));
    w.blank();
    w.line("// FIXME: implement");
    w.line(&format!("int {}::doQuery() {{ return -1; }}", name));
    w.blank();
    w.line(&format!(
        "void {}::loadParams(const evfl::QueryArg& arg) {{",
        name
    ));
    let evfl_body = event_flow_loader_body(class);
    w.indented(|w| w.lines_or_blank(&evfl_body));
    w.line("}");
    w.blank();
    w.line(&format!("void {}::loadParams() {{", name));
    let legacy_body = legacy_loader_body(class);
    w.indented(|w| w.lines_or_blank(&legacy_body));
    w.line("}");
    w.blank();
    w.line("}  // namespace uking::query");

    w.finish()
}

/// Binding lines for the legacy loader: static, then dynamic, then
/// tree-variable members, each category already string-last sorted.
fn legacy_loader_body(class: &QueryClass) -> Vec<String> {
    let bind = |members: &[Member], getter: &str| -> Vec<String> {
        members
            .iter()
            .map(|m| format!("{}(&m{}, \"{}\");", getter, m.name, m.name))
            .collect()
    };

    let mut body = bind(&class.static_members, "getStaticParam");
    body.extend(bind(&class.dynamic_members, "getDynamicParam"));
    body.extend(bind(&class.tree_members, "getAITreeVariable"));
    body
}

/// Binding lines for the event-flow loader. Only dynamic members are bound
/// on this path; static and tree-variable parameters do not vary per
/// invocation.
fn event_flow_loader_body(class: &QueryClass) -> Vec<String> {
    class
        .dynamic_members
        .iter()
        .map(|m| {
            format!(
                "load{}(arg.param_accessor, \"{}\");",
                m.param_type.as_str(),
                m.name
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use querygen_def::{AiDef, QueryEntry};

    use super::*;
    use crate::model::QueryClass;

    fn class(doc: &str, name: &str, class_name: &str) -> QueryClass {
        let def = AiDef::from_yaml_str(doc).unwrap();
        let entry: &QueryEntry = &def.querys[name];
        QueryClass::resolve(class_name, entry).unwrap()
    }

    #[test]
    fn legacy_body_binds_categories_in_fixed_order() {
        let doc = r#"
Querys:
  check:
    StaticInstParams:
      - {Name: Mode, Type: String}
      - {Name: Threshold, Type: Float}
    DynamicInstParams:
      - {Name: Target, Type: Int}
    AITreeVariables:
      - {Name: Slot, Type: AITreeVariablePointer}
"#;
        let body = legacy_loader_body(&class(doc, "check", "Check"));
        assert_eq!(
            body,
            vec![
                "getStaticParam(&mThreshold, \"Threshold\");",
                "getStaticParam(&mMode, \"Mode\");",
                "getDynamicParam(&mTarget, \"Target\");",
                "getAITreeVariable(&mSlot, \"Slot\");",
            ]
        );
    }

    #[test]
    fn event_flow_body_binds_dynamic_params_only() {
        let doc = r#"
Querys:
  check:
    StaticInstParams:
      - {Name: Mode, Type: String}
    DynamicInstParams:
      - {Name: Label, Type: String}
      - {Name: Target, Type: Int}
    AITreeVariables:
      - {Name: Slot, Type: AITreeVariablePointer}
"#;
        let body = event_flow_loader_body(&class(doc, "check", "Check"));
        assert_eq!(
            body,
            vec![
                "loadInt(arg.param_accessor, \"Target\");",
                "loadString(arg.param_accessor, \"Label\");",
            ]
        );
    }

    #[test]
    fn loader_bodies_are_empty_for_placeholder_queries() {
        let c = class("Querys:\n  attack: \"\"\n", "attack", "Attack");
        assert!(legacy_loader_body(&c).is_empty());
        assert!(event_flow_loader_body(&c).is_empty());
    }
}
