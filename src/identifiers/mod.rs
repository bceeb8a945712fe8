/// The [identifier::CanonicalIdentifier] type
pub mod identifier;
/// The pluggable "is this a single emoji" predicate
pub mod classifier;
/// Turning raw input into canonical identifiers
pub mod normalizer;
pub mod errors;
