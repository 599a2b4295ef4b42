//! Championship storage: repository interface and the in-memory implementation.

use crate::models::{Championship, ChampionshipId, LeagueError};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// CRUD access to championships.
///
/// `update` is all-or-nothing: the closure works on a copy that is only stored when it returns `Ok`.
pub trait ChampionshipRepository: Send + Sync {
    fn create(&self, championship: Championship) -> Result<Championship, LeagueError>;

    fn get(&self, id: ChampionshipId) -> Result<Championship, LeagueError>;

    /// All championships, oldest first.
    fn list(&self) -> Result<Vec<Championship>, LeagueError>;

    fn update(
        &self,
        id: ChampionshipId,
        change: &mut dyn FnMut(&mut Championship) -> Result<(), LeagueError>,
    ) -> Result<Championship, LeagueError>;

    fn delete(&self, id: ChampionshipId) -> Result<Championship, LeagueError>;
}

/// Championships kept in memory behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    championships: RwLock<HashMap<ChampionshipId, Championship>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<T>(_: PoisonError<T>) -> LeagueError {
    LeagueError::Storage("lock error".to_string())
}

impl ChampionshipRepository for InMemoryRepository {
    fn create(&self, championship: Championship) -> Result<Championship, LeagueError> {
        let mut g = self.championships.write().map_err(lock_error)?;
        g.insert(championship.id, championship.clone());
        Ok(championship)
    }

    fn get(&self, id: ChampionshipId) -> Result<Championship, LeagueError> {
        let g = self.championships.read().map_err(lock_error)?;
        g.get(&id)
            .cloned()
            .ok_or(LeagueError::ChampionshipNotFound(id))
    }

    fn list(&self) -> Result<Vec<Championship>, LeagueError> {
        let g = self.championships.read().map_err(lock_error)?;
        let mut all: Vec<Championship> = g.values().cloned().collect();
        all.sort_by_key(|c| (c.created_at, c.id));
        Ok(all)
    }

    fn update(
        &self,
        id: ChampionshipId,
        change: &mut dyn FnMut(&mut Championship) -> Result<(), LeagueError>,
    ) -> Result<Championship, LeagueError> {
        let mut g = self.championships.write().map_err(lock_error)?;
        let stored = g.get_mut(&id).ok_or(LeagueError::ChampionshipNotFound(id))?;
        let mut draft = stored.clone();
        change(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }

    fn delete(&self, id: ChampionshipId) -> Result<Championship, LeagueError> {
        let mut g = self.championships.write().map_err(lock_error)?;
        g.remove(&id).ok_or(LeagueError::ChampionshipNotFound(id))
    }
}
