/// The emoji name map and the compiled emoji pattern
pub mod reference_data;
pub mod errors;
pub mod utils;
#[cfg(test)]
mod tests;
