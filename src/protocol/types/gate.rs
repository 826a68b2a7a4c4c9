//! Protocol-version gating of catalog entries.
//!
//! Types introduced in a later protocol version are described as character
//! data when the negotiated version predates them. The decision is made once
//! per column and yields either the native entry or a legacy character type.

use crate::protocol::version::TdsVersion;

use super::catalog::{SizingRule, TypeCatalogEntry};
use super::type_code::TypeCode;

/// Outcome of gating one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Use the entry as registered.
    Native,
    /// Describe the column as character data of a fixed size.
    LegacyFallback { size: u32 },
}

/// Type, sizing and precision/scale carriage after gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveType {
    pub type_code: TypeCode,
    pub sizing: SizingRule,
    pub carries_precision_scale: bool,
    pub decision: GateDecision,
}

impl EffectiveType {
    /// Whether the legacy fallback replaced the native type.
    pub fn is_fallback(&self) -> bool {
        matches!(self.decision, GateDecision::LegacyFallback { .. })
    }
}

/// Decide between the native and the legacy representation.
pub fn decide(entry: &TypeCatalogEntry, version: TdsVersion) -> GateDecision {
    match entry.version_gate {
        Some(gate) if version < gate.since => GateDecision::LegacyFallback {
            size: gate.legacy_size,
        },
        _ => GateDecision::Native,
    }
}

/// Resolve the effective type of a catalog entry under `version`.
pub fn resolve_gated_type(entry: &TypeCatalogEntry, version: TdsVersion) -> EffectiveType {
    let decision = decide(entry, version);
    match decision {
        GateDecision::Native => EffectiveType {
            type_code: entry.type_code,
            sizing: entry.sizing,
            carries_precision_scale: entry.carries_precision_scale,
            decision,
        },
        GateDecision::LegacyFallback { size } => EffectiveType {
            type_code: TypeCode::Char,
            sizing: SizingRule::Fixed(size),
            carries_precision_scale: false,
            decision,
        },
    }
}
