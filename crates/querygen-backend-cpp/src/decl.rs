//! Declaration (header) renderer.

use crate::model::QueryClass;
use crate::writer::SourceWriter;

/// Renders the header artifact for a query class.
///
/// The class extends the engine's base query, declares the constructor,
/// virtual destructor, `doQuery`, and both `loadParams` overloads. The
/// protected member block is emitted only when the query record carries at
/// least one parameter category list.
pub fn render_declaration(class: &QueryClass) -> String {
    let mut w = SourceWriter::new();

    w.line("#pragma once");
    w.blank();
    w.line("#include \"KingSystem/ActorSystem/actAiQuery.h\"");
    w.blank();
    w.line("namespace uking::query {");
    w.blank();
    w.line(&format!(
        "class {} : public ksys::act::ai::Query {{",
        class.name
    ));
    w.indented(|w| w.line(&format!("SEAD_RTTI_OVERRIDE({}, Query)", class.name)));
    w.line("public:");
    w.indented(|w| {
        w.line(&format!("explicit {}(const InitArg& arg);", class.name));
        w.line(&format!("~{}() override;", class.name));
        w.line("int doQuery() override;");
        w.blank();
        w.line("void loadParams() override;");
        w.line("void loadParams(const evfl::QueryArg& arg) override;");
    });
    if class.has_params {
        w.blank();
        w.line("protected:");
        let members = class.member_declarations();
        w.indented(|w| w.lines_or_blank(&members));
    }
    w.line("};");
    w.blank();
    w.line("}  // namespace uking::query");

    w.finish()
}
