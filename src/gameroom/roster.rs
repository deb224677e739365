use super::*;
use crate::Position;
use crate::config::ConfigError;

/// The players of one game, ordered by seat.
///
/// Names and seats are unique, and there are always at least two players.
#[derive(Debug)]
pub struct Roster(Vec<Player>);

impl Roster {
    pub fn new(mut players: Vec<Player>) -> Result<Self, ConfigError> {
        if players.len() < 2 {
            return Err(ConfigError::TooFewPlayers(players.len()));
        }
        players.sort_by_key(Player::seat);
        if let Some(pair) = players.windows(2).find(|w| w[0].seat() == w[1].seat()) {
            return Err(ConfigError::DuplicateSeat(pair[0].seat()));
        }
        let mut names = players.iter().map(Player::name).collect::<Vec<_>>();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateName(pair[0].to_string()));
        }
        Ok(Self(players))
    }
    pub fn get(&self, pos: Position) -> Option<&Player> {
        self.0.iter().find(|p| p.seat() == pos)
    }
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.seat() == pos)
    }
    pub fn name(&self, pos: Position) -> Option<&str> {
        self.get(pos).map(Player::name)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Passive;
    use crate::prompt::Template;

    fn player(name: &str, seat: Position) -> Player {
        Player::new(name, seat, Box::new(Passive), Template::default())
    }

    #[test]
    fn ordered_by_seat() {
        let roster = Roster::new(vec![player("carol", 4), player("alice", 0), player("bob", 2)]).unwrap();
        let seats = roster.iter().map(Player::seat).collect::<Vec<_>>();
        assert_eq!(seats, vec![0, 2, 4]);
        assert_eq!(roster.name(2), Some("bob"));
        assert_eq!(roster.name(1), None);
    }

    #[test]
    fn rejects_bad_rosters() {
        assert!(matches!(
            Roster::new(vec![player("alice", 0)]),
            Err(ConfigError::TooFewPlayers(1))
        ));
        assert!(matches!(
            Roster::new(vec![player("alice", 1), player("bob", 1)]),
            Err(ConfigError::DuplicateSeat(1))
        ));
        assert!(matches!(
            Roster::new(vec![player("alice", 0), player("alice", 1)]),
            Err(ConfigError::DuplicateName(_))
        ));
    }
}
