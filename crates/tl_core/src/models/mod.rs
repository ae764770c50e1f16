pub mod events;
pub mod impact;
pub mod match_setup;
pub mod side;
pub mod team;

pub use events::{EventKind, MatchEvent};
pub use impact::HiddenImpact;
pub use match_setup::MatchSetup;
pub use side::Side;
pub use team::{Attributes, Position, SquadPlayer, Team};
