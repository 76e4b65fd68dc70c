pub mod feature_registry;
pub mod training_set;
