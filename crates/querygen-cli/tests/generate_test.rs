//! Driver-level tests for the generation pass.

use std::fs;

use querygen_cli::commands::generate::generate_stubs;
use querygen_def::AiDef;

const AIDEF: &str = r#"
Querys:
  doSomething:
    DynamicInstParams:
      - {Name: Target, Type: Int}
      - {Name: Label, Type: String}
  attack: ""
  checkInternal:
    SystemQuery: true
    StaticInstParams:
      - {Name: FlagName, Type: String}
  isNearTarget:
    StaticInstParams:
      - {Name: Distance, Type: Float}
    SpawnCondition: something
"#;

#[test]
fn generates_one_pair_per_non_system_query() {
    let dir = tempfile::tempdir().unwrap();
    let def = AiDef::from_yaml_str(AIDEF).unwrap();

    let summary = generate_stubs(&def, dir.path()).unwrap();

    assert_eq!(
        summary.generated,
        vec!["DoSomething", "Attack", "IsNearTarget"]
    );
    for name in &summary.generated {
        assert!(dir.path().join(format!("query{}.h", name)).is_file());
        assert!(dir.path().join(format!("query{}.cpp", name)).is_file());
    }
}

#[test]
fn system_queries_produce_no_files_and_no_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let def = AiDef::from_yaml_str(AIDEF).unwrap();

    let summary = generate_stubs(&def, dir.path()).unwrap();

    assert!(!summary.generated.iter().any(|n| n == "CheckInternal"));
    assert!(!dir.path().join("queryCheckInternal.h").exists());
    assert!(!dir.path().join("queryCheckInternal.cpp").exists());

    // The skipped record's fields stay out of the diagnostic union; the
    // processed records' fields (modeled and not) are in it.
    assert!(!summary.field_names.contains("SystemQuery"));
    assert!(summary.field_names.contains("DynamicInstParams"));
    assert!(summary.field_names.contains("StaticInstParams"));
    assert!(summary.field_names.contains("SpawnCondition"));
}

#[test]
fn query_names_are_capitalized_on_output() {
    let dir = tempfile::tempdir().unwrap();
    let def = AiDef::from_yaml_str("Querys:\n  attack: \"\"\n").unwrap();

    let summary = generate_stubs(&def, dir.path()).unwrap();

    assert_eq!(summary.generated, vec!["Attack"]);
    let header = fs::read_to_string(dir.path().join("queryAttack.h")).unwrap();
    assert!(header.contains("class Attack : public ksys::act::ai::Query {"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let def = AiDef::from_yaml_str(AIDEF).unwrap();

    generate_stubs(&def, dir.path()).unwrap();
    let first: Vec<(String, Vec<u8>)> = stub_files(dir.path());

    generate_stubs(&def, dir.path()).unwrap();
    let second: Vec<(String, Vec<u8>)> = stub_files(dir.path());

    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn unsupported_param_aborts_the_whole_pass() {
    let dir = tempfile::tempdir().unwrap();
    let doc = r#"
Querys:
  broken:
    AITreeVariables:
      - {Name: Count, Type: Float}
"#;
    let def = AiDef::from_yaml_str(doc).unwrap();

    let err = generate_stubs(&def, dir.path()).unwrap_err();
    assert!(err.to_string().contains("Broken"));
    assert!(!dir.path().join("queryBroken.h").exists());
}

fn stub_files(dir: &std::path::Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}
