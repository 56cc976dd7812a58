pub mod appearance;
pub mod players;
pub mod pool;
pub mod schedule;
pub mod teams;

pub use appearance::{HomeAway, TeamAppearance, WeeklyTeams};
pub use players::{PoolPlayer, RosterPlayer, RosterResponse};
pub use pool::{PlayerPool, PositionGroup};
pub use schedule::{ScheduleGame, ScheduleWeek, SeasonSchedule, weekly_games};
pub use teams::{Team, TeamsResponse};
