pub mod generate;
pub mod materialize;
pub mod upsert;
