//! The o1js primitive size table and contract field classifiers.
//!
//! Sizes are measured in field elements ("slots") of on-chain zkApp state.
//! A contract's state fields may occupy at most [`MAX_CONTRACT_STATES`]
//! slots in total.

/// Maximum number of state slots a single smart contract may declare.
pub const MAX_CONTRACT_STATES: u32 = 8;

/// Slot sizes for the closed set of o1js primitive circuit types.
const PRIMITIVE_SIZES: &[(&str, u32)] = &[
    ("Field", 1),
    ("Bool", 1),
    ("UInt32", 1),
    ("UInt64", 1),
    ("Scalar", 1),
    ("PrivateKey", 1),
    ("Group", 2),
    ("PublicKey", 2),
    ("Signature", 2),
];

/// Slot size of an o1js primitive type, or `None` for any other name.
pub fn primitive_size(type_name: &str) -> Option<u32> {
    PRIMITIVE_SIZES
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, size)| *size)
}

/// How a decorated class field contributes to contract state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `@state(T)` — persistent on-chain state.
    State,
    /// `@prop` — a plain circuit-value property.
    Prop,
    /// `@arrayProp(T, n)` — a fixed-length array property.
    ArrayProp { len: u32 },
}

impl FieldKind {
    /// Maps a decorator name to a field kind. The array length is filled in
    /// by the caller from the decorator's second argument.
    pub fn from_decorator(name: &str) -> Option<FieldKind> {
        match name {
            "state" => Some(FieldKind::State),
            "prop" => Some(FieldKind::Prop),
            "arrayProp" => Some(FieldKind::ArrayProp { len: 0 }),
            _ => None,
        }
    }

    /// Slot contribution of a field of this kind whose element size is known.
    pub fn contribution(&self, size: u32) -> u32 {
        match self {
            FieldKind::ArrayProp { len } => size * len,
            _ => size,
        }
    }
}
