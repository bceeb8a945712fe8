/// Combination records, the support table and the [mix_data::MixData] bundle
pub mod mix_data;
/// JSON/YAML loading helpers
pub mod deserialize;
pub mod errors;
#[cfg(test)]
mod tests;
