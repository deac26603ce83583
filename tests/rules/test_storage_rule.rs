//! Behavior of the storage ceiling rule (C006) on contract and circuit
//! value declarations, ported to annotation-style state fields.

use crate::common::assert_findings;

#[test]
fn single_state_field_fits() {
    assert_findings(
        r#"
class A extends SmartContract {
  @state(Field) state1: State<Field>;
}
"#,
        "C006",
        0,
    );
}

#[test]
fn exactly_eight_state_fields_fit() {
    assert_findings(
        r#"
class A extends SmartContract {
  @state(Field) state1: State<Field>;
  @state(Field) state2: State<Field>;
  @state(Field) state3: State<Field>;
  @state(Field) state4: State<Field>;
  @state(Field) state5: State<Field>;
  @state(Field) state6: State<Field>;
  @state(Field) state7: State<Field>;
  @state(Field) state8: State<Field>;
}
"#,
        "C006",
        0,
    );
}

#[test]
fn nine_state_fields_overflow() {
    assert_findings(
        r#"
class A extends SmartContract {
  @state(Field) state1: State<Field>;
  @state(Field) state2: State<Field>;
  @state(Field) state3: State<Field>;
  @state(Field) state4: State<Field>;
  @state(Field) state5: State<Field>;
  @state(Field) state6: State<Field>;
  @state(Field) state7: State<Field>;
  @state(Field) state8: State<Field>;
  @state(Field) state9: State<Field>;
}
"#,
        "C006",
        1,
    );
}

#[test]
fn small_circuit_value_as_state_fits() {
    assert_findings(
        r#"
class A extends CircuitValue {
  @prop prop1: Field;
}
class B extends SmartContract {
  @state(A) state1: State<A>;
}
"#,
        "C006",
        0,
    );
}

#[test]
fn eight_prop_circuit_value_as_state_fits() {
    assert_findings(
        r#"
class A extends CircuitValue {
  @prop prop1: Field;
  @prop prop2: Field;
  @prop prop3: Field;
  @prop prop4: Field;
  @prop prop5: Field;
  @prop prop6: Field;
  @prop prop7: Field;
  @prop prop8: Field;
}
class B extends SmartContract {
  @state(A) state1: State<A>;
}
"#,
        "C006",
        0,
    );
}

#[test]
fn nine_prop_circuit_value_as_state_overflows() {
    assert_findings(
        r#"
class A extends CircuitValue {
  @prop prop1: Field;
  @prop prop2: Field;
  @prop prop3: Field;
  @prop prop4: Field;
  @prop prop5: Field;
  @prop prop6: Field;
  @prop prop7: Field;
  @prop prop8: Field;
  @prop prop9: Field;
}
class B extends SmartContract {
  @state(A) state1: State<A>;
}
"#,
        "C006",
        1,
    );
}

#[test]
fn array_prop_plus_state_field_at_the_ceiling_fits() {
    // A = 1 + 6 = 7; B = 7 + 1 = 8.
    assert_findings(
        r#"
class A extends CircuitValue {
  @prop a: Field;
  @arrayProp(Field, 6) arr: Field[];
}
class B extends SmartContract {
  @state(A) state1: State<A>;
  @state(Field) value1: Field;
}
"#,
        "C006",
        0,
    );
}

#[test]
fn array_prop_pushing_past_the_ceiling_overflows() {
    // A = 1 + 8 = 9.
    assert_findings(
        r#"
class A extends CircuitValue {
  @prop prop1: Field;
  @arrayProp(Field, 8) arrayProp1: Field[];
}
class B extends SmartContract {
  @state(A) state1: State<A>;
}
"#,
        "C006",
        1,
    );
}

#[test]
fn array_prop_plus_extra_state_overflows() {
    // A = 8; B = 8 + 1 = 9.
    assert_findings(
        r#"
class A extends CircuitValue {
  @arrayProp(Field, 8) arrayProp1: Field[];
}
class B extends SmartContract {
  @state(A) state1: State<A>;
  @state(Field) value1: Field;
}
"#,
        "C006",
        1,
    );
}

#[test]
fn two_slot_primitives_count_double() {
    // 4 × PublicKey = 8 fits; adding a Bool overflows.
    assert_findings(
        r#"
class A extends SmartContract {
  @state(PublicKey) k1: State<PublicKey>;
  @state(PublicKey) k2: State<PublicKey>;
  @state(PublicKey) k3: State<PublicKey>;
  @state(PublicKey) k4: State<PublicKey>;
}
"#,
        "C006",
        0,
    );
    assert_findings(
        r#"
class A extends SmartContract {
  @state(PublicKey) k1: State<PublicKey>;
  @state(PublicKey) k2: State<PublicKey>;
  @state(PublicKey) k3: State<PublicKey>;
  @state(PublicKey) k4: State<PublicKey>;
  @state(Bool) flag: State<Bool>;
}
"#,
        "C006",
        1,
    );
}

#[test]
fn declaration_order_does_not_matter() {
    // The contract appears before the value type it depends on.
    assert_findings(
        r#"
class B extends SmartContract {
  @state(A) state1: State<A>;
}
class A extends CircuitValue {
  @prop prop1: Field;
  @arrayProp(Field, 8) arrayProp1: Field[];
}
"#,
        "C006",
        1,
    );
}

#[test]
fn value_types_defined_in_another_file_resolve() {
    let report = crate::common::lint_files(&[
        (
            "contract.ts",
            r#"
import { Wide } from './types';
class B extends SmartContract {
  @state(Wide) state1: State<Wide>;
}
"#,
        ),
        (
            "types.ts",
            r#"
export class Wide extends CircuitValue {
  @arrayProp(Field, 9) cells: Field[];
}
"#,
        ),
    ]);
    let findings = crate::common::findings_for(&report, "C006");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].file, "contract.ts");
}
