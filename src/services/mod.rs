pub mod demand_generator;
pub mod inventory_simulation;
pub mod scenario_yaml;
pub mod seeded_random;
pub mod simulation_types;
pub mod statistics;
