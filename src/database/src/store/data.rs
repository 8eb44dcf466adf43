use crate::error::{StoreError, StoreResult};
use crate::store::drafts::{GoalDraft, MatchDraft, PlayerDraft, ResultDraft, TeamDraft};
use chrono::{Local, NaiveDateTime};
use itertools::Itertools;
use league::{
    DEFAULT_NATIONALITY, DEFAULT_ROUND, Goal, GoalFilter, Match, MatchFilter, Player,
    PlayerFilter, Team,
};
use log::info;
use std::cmp::Reverse;

/// In-memory league rows plus the next free identifier of each kind.
#[derive(Debug, Default)]
pub struct LeagueData {
    teams: Vec<Team>,
    players: Vec<Player>,
    matches: Vec<Match>,
    goals: Vec<Goal>,
    sequence: IdSequence,
}

#[derive(Debug, Default)]
struct IdSequence {
    team: u32,
    player: u32,
    r#match: u32,
    goal: u32,
}

impl IdSequence {
    fn next(counter: &mut u32) -> StoreResult<u32> {
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| StoreError::validation("identifier space exhausted"))?;
        Ok(*counter)
    }
}

impl LeagueData {
    pub fn new(
        teams: Vec<Team>,
        players: Vec<Player>,
        matches: Vec<Match>,
        goals: Vec<Goal>,
    ) -> Self {
        let sequence = IdSequence {
            team: teams.iter().map(|t| t.id).max().unwrap_or(0),
            player: players.iter().map(|p| p.id).max().unwrap_or(0),
            r#match: matches.iter().map(|m| m.id).max().unwrap_or(0),
            goal: goals.iter().map(|g| g.id).max().unwrap_or(0),
        };

        LeagueData {
            teams,
            players,
            matches,
            goals,
            sequence,
        }
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    // ========== READS ==========

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: u32) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn goal(&self, id: u32) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn team_name(&self, id: u32) -> &str {
        self.team(id).map(|t| t.name.as_str()).unwrap_or_default()
    }

    pub fn player_name(&self, id: u32) -> &str {
        self.player(id).map(|p| p.name.as_str()).unwrap_or_default()
    }

    pub fn teams_by_name(&self) -> Vec<&Team> {
        self.teams
            .iter()
            .sorted_by_key(|t| t.name.to_lowercase())
            .collect()
    }

    /// Team's players ordered by position then shirt number.
    pub fn squad(&self, team_id: u32) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == team_id)
            .sorted_by_key(|p| (p.position, p.number))
            .collect()
    }

    pub fn active_players(&self, team_id: u32) -> Vec<&Player> {
        self.squad(team_id).into_iter().filter(|p| p.active).collect()
    }

    /// Players ordered by team name, position and shirt number.
    pub fn players_filtered(&self, filter: &PlayerFilter) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| filter.accepts(p, self.team_name(p.team_id)))
            .sorted_by_key(|p| (self.team_name(p.team_id).to_lowercase(), p.position, p.number))
            .collect()
    }

    pub fn matches_filtered(&self, filter: &MatchFilter, now: NaiveDateTime) -> Vec<&Match> {
        filter.apply(&self.matches, now)
    }

    /// Goals newest first.
    pub fn goals_filtered(&self, filter: &GoalFilter) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|g| filter.accepts(g))
            .sorted_by_key(|g| Reverse((g.created_at, g.id)))
            .collect()
    }

    fn require_team(&self, id: u32) -> StoreResult<&Team> {
        self.team(id).ok_or_else(|| StoreError::not_found("team", id))
    }

    fn require_player(&self, id: u32) -> StoreResult<&Player> {
        self.player(id).ok_or_else(|| StoreError::not_found("player", id))
    }

    fn require_match(&self, id: u32) -> StoreResult<&Match> {
        self.get_match(id).ok_or_else(|| StoreError::not_found("match", id))
    }

    // ========== TEAMS ==========

    pub fn create_team(&mut self, draft: TeamDraft) -> StoreResult<u32> {
        let name = draft.validated_name()?;
        let id = IdSequence::next(&mut self.sequence.team)?;

        info!("team created: {} ({})", name, id);

        self.teams.push(Team::new(id, name, draft.logo, Self::now()));

        Ok(id)
    }

    /// An absent logo keeps the current one.
    pub fn update_team(&mut self, id: u32, draft: TeamDraft) -> StoreResult<()> {
        let name = draft.validated_name()?;

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("team", id))?;

        team.name = name;
        if draft.logo.is_some() {
            team.logo = draft.logo;
        }

        info!("team updated: {} ({})", team.name, id);

        Ok(())
    }

    /// Removes the team with its players, matches and every goal tied to them.
    pub fn delete_team(&mut self, id: u32) -> StoreResult<Team> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("team", id))?;

        let team = self.teams.remove(idx);

        self.matches.retain(|m| !m.involves(id));
        self.players.retain(|p| p.team_id != id);

        let matches = &self.matches;
        let players = &self.players;
        self.goals.retain(|g| {
            g.team_id != id
                && matches.iter().any(|m| m.id == g.match_id)
                && players.iter().any(|p| p.id == g.player_id)
        });

        info!("team deleted: {} ({})", team.name, id);

        Ok(team)
    }

    // ========== PLAYERS ==========

    pub fn create_player(&mut self, draft: PlayerDraft) -> StoreResult<u32> {
        let name = draft.validated_name()?;
        self.require_team(draft.team_id)?;

        let id = IdSequence::next(&mut self.sequence.player)?;

        info!("player created: {} ({})", name, id);

        self.players.push(Player {
            id,
            name,
            team_id: draft.team_id,
            number: draft.number,
            position: draft.position,
            photo: draft.photo,
            birth_date: draft.birth_date,
            nationality: nationality_or_default(draft.nationality),
            active: draft.active,
            created_at: Self::now(),
        });

        Ok(id)
    }

    pub fn update_player(&mut self, id: u32, draft: PlayerDraft) -> StoreResult<()> {
        let name = draft.validated_name()?;
        self.require_team(draft.team_id)?;

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("player", id))?;

        player.name = name;
        player.team_id = draft.team_id;
        player.number = draft.number;
        player.position = draft.position;
        player.birth_date = draft.birth_date;
        player.nationality = nationality_or_default(draft.nationality);
        player.active = draft.active;
        if draft.photo.is_some() {
            player.photo = draft.photo;
        }

        info!("player updated: {} ({})", player.name, id);

        Ok(())
    }

    pub fn delete_player(&mut self, id: u32) -> StoreResult<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("player", id))?;

        let player = self.players.remove(idx);
        self.goals.retain(|g| g.player_id != id);

        info!("player deleted: {} ({})", player.name, id);

        Ok(player)
    }

    // ========== MATCHES ==========

    fn validate_match(&self, draft: &MatchDraft) -> StoreResult<()> {
        if draft.home_team_id == draft.away_team_id {
            return Err(StoreError::validation("home and away teams must differ"));
        }

        self.require_team(draft.home_team_id)?;
        self.require_team(draft.away_team_id)?;

        Ok(())
    }

    pub fn create_match(&mut self, draft: MatchDraft) -> StoreResult<u32> {
        self.validate_match(&draft)?;

        let id = IdSequence::next(&mut self.sequence.r#match)?;

        self.matches.push(Match {
            id,
            home_team_id: draft.home_team_id,
            away_team_id: draft.away_team_id,
            home_goals: draft.home_goals,
            away_goals: draft.away_goals,
            date: draft.date,
            venue: draft.venue,
            round: draft.round.unwrap_or(DEFAULT_ROUND),
            completed: draft.completed,
        });

        info!("match created: {}", id);

        Ok(id)
    }

    pub fn update_match(&mut self, id: u32, draft: MatchDraft) -> StoreResult<()> {
        self.validate_match(&draft)?;

        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("match", id))?;

        game.home_team_id = draft.home_team_id;
        game.away_team_id = draft.away_team_id;
        game.home_goals = draft.home_goals;
        game.away_goals = draft.away_goals;
        game.date = draft.date;
        game.venue = draft.venue;
        game.round = draft.round.unwrap_or(DEFAULT_ROUND);
        game.completed = draft.completed;

        info!("match updated: {}", id);

        Ok(())
    }

    /// Stores the final score and marks the match as played.
    pub fn record_result(&mut self, id: u32, result: ResultDraft) -> StoreResult<&Match> {
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("match", id))?;

        game.home_goals = result.home_goals;
        game.away_goals = result.away_goals;
        game.completed = true;

        info!(
            "result recorded: match {} {}-{}",
            id, result.home_goals, result.away_goals
        );

        Ok(game)
    }

    pub fn delete_match(&mut self, id: u32) -> StoreResult<Match> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("match", id))?;

        let game = self.matches.remove(idx);
        self.goals.retain(|g| g.match_id != id);

        info!("match deleted: {}", id);

        Ok(game)
    }

    // ========== GOALS ==========

    fn validate_goal(&self, draft: &GoalDraft) -> StoreResult<()> {
        self.require_match(draft.match_id)?;
        self.require_player(draft.player_id)?;
        self.require_team(draft.team_id)?;

        Ok(())
    }

    pub fn create_goal(&mut self, draft: GoalDraft) -> StoreResult<u32> {
        self.validate_goal(&draft)?;

        let id = IdSequence::next(&mut self.sequence.goal)?;
        let own_goal = draft.is_own_goal();

        self.goals.push(Goal {
            id,
            match_id: draft.match_id,
            player_id: draft.player_id,
            team_id: draft.team_id,
            minute: draft.minute,
            goal_type: draft.goal_type,
            own_goal,
            created_at: Self::now(),
        });

        info!("goal created: {} (match {})", id, draft.match_id);

        Ok(id)
    }

    pub fn update_goal(&mut self, id: u32, draft: GoalDraft) -> StoreResult<()> {
        self.validate_goal(&draft)?;

        let own_goal = draft.is_own_goal();

        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StoreError::not_found("goal", id))?;

        goal.match_id = draft.match_id;
        goal.player_id = draft.player_id;
        goal.team_id = draft.team_id;
        goal.minute = draft.minute;
        goal.goal_type = draft.goal_type;
        goal.own_goal = own_goal;

        info!("goal updated: {}", id);

        Ok(())
    }

    pub fn delete_goal(&mut self, id: u32) -> StoreResult<Goal> {
        let idx = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| StoreError::not_found("goal", id))?;

        info!("goal deleted: {}", id);

        Ok(self.goals.remove(idx))
    }
}

fn nationality_or_default(nationality: Option<String>) -> String {
    nationality
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string())
}
