//! Behavior of the contract shape rules: no constructor overrides (C007)
//! and mandatory named exports (C008).

use crate::common::assert_findings;

// --- no-constructor-in-contract (C007) ---

#[test]
fn constructor_on_plain_class_is_allowed() {
    assert_findings(
        r#"
class Foo {
  constructor() {};
}
"#,
        "C007",
        0,
    );
}

#[test]
fn contract_without_constructor_is_allowed() {
    assert_findings(
        r#"
class Foo extends SmartContract {
  @method async bar() {};
}
"#,
        "C007",
        0,
    );
}

#[test]
fn constructor_on_contract_is_reported() {
    assert_findings(
        r#"
class Foo extends SmartContract {
  constructor() {};
}
"#,
        "C007",
        1,
    );
}

// --- contract-export (C008) ---

#[test]
fn directly_exported_contract_is_allowed() {
    assert_findings("export class Foo extends SmartContract {}", "C008", 0);
}

#[test]
fn multiple_exported_contracts_are_allowed() {
    assert_findings(
        r#"
export class Foo extends SmartContract {}
export class Bar extends SmartContract {}
"#,
        "C008",
        0,
    );
}

#[test]
fn plain_classes_need_no_export() {
    assert_findings(
        r#"
class Foo {}
class Bar {}
"#,
        "C008",
        0,
    );
}

#[test]
fn export_list_covers_contracts() {
    assert_findings(
        r#"
class Foo extends SmartContract {}
class Bar extends SmartContract {}
export { Foo, Bar };
"#,
        "C008",
        0,
    );
}

#[test]
fn renamed_export_still_covers_the_local_name() {
    assert_findings(
        r#"
class Foo extends SmartContract {}
export { Foo as PublicFoo };
"#,
        "C008",
        0,
    );
}

#[test]
fn unexported_contract_is_reported() {
    assert_findings("class Foo extends SmartContract {}", "C008", 1);
}

#[test]
fn default_export_does_not_count() {
    assert_findings(
        "export default class Foo extends SmartContract {}",
        "C008",
        1,
    );
}

#[test]
fn only_the_unexported_contract_is_reported() {
    let report = crate::common::lint(
        r#"
export class Bar extends SmartContract {}
class Foo extends SmartContract {}
"#,
    );
    let findings = crate::common::findings_for(&report, "C008");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].span.line, 3);
}

#[test]
fn partial_export_list_reports_the_missing_contract() {
    let report = crate::common::lint(
        r#"
class Foo extends SmartContract {}
class Bar extends SmartContract {}
export { Foo };
"#,
    );
    let findings = crate::common::findings_for(&report, "C008");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].span.line, 3);
}

#[test]
fn exports_do_not_leak_between_files() {
    // `Foo` is exported in a.ts; the same name in b.ts is a different class
    // and must still be reported.
    let report = crate::common::lint_files(&[
        ("a.ts", "export class Foo extends SmartContract {}\n"),
        ("b.ts", "class Foo extends SmartContract {}\n"),
    ]);
    let findings = crate::common::findings_for(&report, "C008");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, "b.ts");
}
