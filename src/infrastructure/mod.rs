// Player lookup providers
pub mod csv_lookup;
pub mod mock;
