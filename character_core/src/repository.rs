//! CharacterRepository - Persistence contract for characters
//!
//! The aggregate never stores itself. Collaborators load a character through
//! this trait, mutate it, and hand it back with `save`.

use crate::character::Character;
use crate::config::RulesConstants;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Character not found: {0}")]
    NotFound(String),
    #[error("Character already exists: {0}")]
    AlreadyExists(String),
}

/// Repository port for Character persistence
pub trait CharacterRepository: Send + Sync {
    /// Create an empty character with a freshly assigned id
    fn create(&self, owner_id: &str, name: &str) -> Result<Arc<Character>, RepositoryError>;

    /// Get a character by id
    fn get(&self, id: &str) -> Result<Arc<Character>, RepositoryError>;

    /// All characters controlled by an owner
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Arc<Character>>, RepositoryError>;

    /// Store a character, replacing any previous version with the same id
    fn save(&self, character: Arc<Character>) -> Result<(), RepositoryError>;
}

/// Process-local repository used by tests and the demo
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rules: RulesConstants,
    characters: RwLock<HashMap<String, Arc<Character>>>,
}

impl InMemoryRepository {
    pub fn new(rules: RulesConstants) -> Self {
        InMemoryRepository {
            rules,
            characters: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharacterRepository for InMemoryRepository {
    fn create(&self, owner_id: &str, name: &str) -> Result<Arc<Character>, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let character = Arc::new(Character::with_rules(
            id.clone(),
            owner_id,
            name,
            self.rules.clone(),
        ));

        let mut characters = self.characters.write().unwrap_or_else(PoisonError::into_inner);
        if characters.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id));
        }
        characters.insert(id, Arc::clone(&character));
        tracing::debug!("Created character: {} ({})", name, character.id());
        Ok(character)
    }

    fn get(&self, id: &str) -> Result<Arc<Character>, RepositoryError> {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Arc<Character>>, RepositoryError> {
        let characters = self.characters.read().unwrap_or_else(PoisonError::into_inner);
        let mut owned: Vec<Arc<Character>> = characters
            .values()
            .filter(|c| c.owner_id() == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(owned)
    }

    fn save(&self, character: Arc<Character>) -> Result<(), RepositoryError> {
        tracing::debug!("Saved character: {}", character.id());
        self.characters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(character.id().to_string(), character);
        Ok(())
    }
}
