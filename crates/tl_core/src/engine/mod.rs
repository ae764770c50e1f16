pub mod ball;
pub mod config;
pub mod events;
pub mod live_match;
pub mod match_modifiers;
pub mod match_sim;
pub mod match_state;
pub mod physics_constants;
pub mod player_decision;
pub mod player_physics;
pub mod possession;
pub mod roster;
pub mod stats;
pub mod timestep;
pub mod types;

pub use config::EngineConfig;
pub use events::{EventLog, MatchSnapshot, MatchUpdate};
pub use live_match::Simulation;
pub use match_modifiers::HiddenImpactTable;
pub use match_state::{advance, MatchPhase, MatchState, PlayState, StepInputs, StepResult};
pub use roster::{LineupPolicy, PitchPlayer};
pub use stats::{MatchStats, SideStats};
pub use types::{PlayerKey, Vec2};
