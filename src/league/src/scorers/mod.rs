mod leaderboard;

pub use leaderboard::*;
