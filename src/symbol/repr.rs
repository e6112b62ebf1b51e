/// The numeric identity carried by every symbol.
pub type SymbolRepr = i32;
/// The first identity handed out by a registry.
pub const FIRST_ID: SymbolRepr = 1;
/// Identity of the reserved empty-derivation symbol.
pub const EPSILON_ID: SymbolRepr = 0;
/// Identity of the reserved end-of-input symbol.
pub const END_MARKER_ID: SymbolRepr = -1;
