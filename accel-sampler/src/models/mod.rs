pub mod errors;
pub(crate) mod shutdown;
