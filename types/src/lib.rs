pub mod game;
pub mod player;
pub mod standing;

pub use game::{parse_score, GameId, GameRecord, GameResult, InvalidGame, Outcome};
pub use player::{AddPlayerOutcome, BlankName, Player, PlayerId, PlayerName};
pub use standing::Standing;
