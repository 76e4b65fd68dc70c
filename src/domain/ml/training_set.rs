use crate::domain::player::TrainingExample;

/// Reference careers the classifiers are fitted on at startup.
pub const REFERENCE_TRAINING_SET: [TrainingExample; 5] = [
    TrainingExample::new(50.0, 90.0, 45.0, false),
    TrainingExample::new(65.0, 110.0, 55.0, false),
    TrainingExample::new(75.0, 130.0, 60.0, true),
    TrainingExample::new(80.0, 140.0, 70.0, true),
    TrainingExample::new(100.0, 180.0, 85.0, true),
];
