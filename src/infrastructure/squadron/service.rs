//! Squadron service: squad validation and candidate discovery

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::hero::{HeroAlias, HeroRepository};
use crate::domain::squadron::{Squadron, SquadronError, SquadronName, SquadronRepository};
use crate::infrastructure::storage::RosterLock;

/// Request for creating a new squadron
#[derive(Debug, Clone)]
pub struct CreateSquadronRequest {
    pub name: String,
    pub members: Vec<String>,
}

/// Enforces squadron invariants against the live hero store
#[derive(Debug)]
pub struct SquadronService<H: HeroRepository, S: SquadronRepository> {
    heroes: Arc<H>,
    squadrons: Arc<S>,
    lock: RosterLock,
}

impl<H: HeroRepository, S: SquadronRepository> SquadronService<H, S> {
    /// Create a new squadron service sharing `lock` with the hero service
    pub fn new(heroes: Arc<H>, squadrons: Arc<S>, lock: RosterLock) -> Self {
        Self {
            heroes,
            squadrons,
            lock,
        }
    }

    /// Create a squadron.
    ///
    /// Every member must be a known hero, and no member's alias may appear
    /// among the archenemies of the proposed members. Nothing is written
    /// unless every check passes.
    pub async fn create(&self, request: CreateSquadronRequest) -> Result<Squadron, SquadronError> {
        info!(name = %request.name, members = ?request.members, "Creating squadron");

        let name = SquadronName::new(request.name)?;

        let _guard = self.lock.write().await;

        if self.squadrons.exists(&name).await? {
            return Err(SquadronError::duplicate_name(name.as_str()));
        }

        let mut villains = HashSet::new();

        for member in &request.members {
            let hero = match HeroAlias::new(member.as_str()) {
                Ok(alias) => self.heroes.get(&alias).await?,
                Err(_) => None,
            };

            let hero = hero.ok_or_else(|| SquadronError::member_not_found(member.as_str()))?;

            if let Some(archenemy) = hero.archenemy() {
                villains.insert(archenemy.to_string());
            }
        }

        // Forward lookups only; a one-sided rivalry is still caught because the
        // rival's alias lands in the villain set.
        if let Some(member) = request.members.iter().find(|m| villains.contains(*m)) {
            return Err(SquadronError::conflicting_enemy(member.as_str()));
        }

        let squadron = Squadron::new(name, request.members);
        Ok(self.squadrons.create(squadron).await?)
    }

    /// Heroes who could join the squadron: not already members, and not the
    /// current archenemy of any member. Returned in hero store order.
    pub async fn candidates(&self, name: &str) -> Result<Vec<String>, SquadronError> {
        debug!(name = %name, "Finding squadron candidates");

        let key = SquadronName::new(name).map_err(|_| SquadronError::not_found(name))?;

        let _guard = self.lock.read().await;

        let squadron = self
            .squadrons
            .get(&key)
            .await?
            .ok_or_else(|| SquadronError::not_found(name))?;

        let heroes = self.heroes.list().await?;

        // Archenemies are read from the live records, so members deleted
        // since the squadron was formed contribute nothing.
        let enemies: HashSet<&str> = heroes
            .iter()
            .filter(|hero| squadron.has_member(hero.alias().as_str()))
            .filter_map(|hero| hero.archenemy())
            .collect();

        let candidates = heroes
            .iter()
            .map(|hero| hero.alias().as_str())
            .filter(|alias| !enemies.contains(alias) && !squadron.has_member(alias))
            .map(String::from)
            .collect();

        Ok(candidates)
    }

    /// List every squadron in creation order
    pub async fn list(&self) -> Result<Vec<Squadron>, SquadronError> {
        let _guard = self.lock.read().await;
        Ok(self.squadrons.list().await?)
    }

    /// Get a squadron by name
    pub async fn find(&self, name: &str) -> Result<Squadron, SquadronError> {
        debug!(name = %name, "Looking up squadron");

        let key = SquadronName::new(name).map_err(|_| SquadronError::not_found(name))?;

        let _guard = self.lock.read().await;

        self.squadrons
            .get(&key)
            .await?
            .ok_or_else(|| SquadronError::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hero::Hero;
    use crate::domain::squadron::{MockSquadronRepository, SquadronValidationError};
    use crate::domain::DomainError;
    use crate::infrastructure::hero::{HeroService, StorageHeroRepository};
    use crate::infrastructure::squadron::StorageSquadronRepository;
    use crate::infrastructure::storage::InMemoryStorage;

    struct Fixture {
        heroes: HeroService<StorageHeroRepository>,
        squadrons: SquadronService<StorageHeroRepository, StorageSquadronRepository>,
    }

    fn create_fixture() -> Fixture {
        let lock = RosterLock::new();
        let hero_storage = Arc::new(InMemoryStorage::<Hero>::with_entities(crate::default_heroes()));
        let hero_repository = Arc::new(StorageHeroRepository::new(hero_storage));
        let squadron_repository = Arc::new(StorageSquadronRepository::new(Arc::new(
            InMemoryStorage::<Squadron>::new(),
        )));

        Fixture {
            heroes: HeroService::new(hero_repository.clone(), lock.clone()),
            squadrons: SquadronService::new(hero_repository, squadron_repository, lock),
        }
    }

    fn request(name: &str, members: &[&str]) -> CreateSquadronRequest {
        CreateSquadronRequest {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_squadron_and_find_candidates() {
        let fixture = create_fixture();

        let squadron = fixture
            .squadrons
            .create(request("JL", &["Batman", "Wonder Woman"]))
            .await
            .unwrap();
        assert_eq!(
            squadron.member_aliases().collect::<Vec<_>>(),
            vec!["Batman", "Wonder Woman"]
        );

        let candidates = fixture.squadrons.candidates("JL").await.unwrap();
        assert_eq!(candidates, vec!["Lex Luthor"]);
    }

    #[tokio::test]
    async fn test_mutual_archenemies_rejected() {
        let fixture = create_fixture();

        let result = fixture
            .squadrons
            .create(request("Bad", &["Superman", "Lex Luthor"]))
            .await;

        assert!(matches!(result, Err(SquadronError::ConflictingEnemy(_))));
        assert!(fixture.squadrons.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_one_sided_rivalry_rejected() {
        let fixture = create_fixture();

        // Superman's archenemy is Lex Luthor, but Batman names Superman
        let result = fixture
            .squadrons
            .create(request("Duo", &["Superman", "Batman"]))
            .await;
        assert_eq!(result, Err(SquadronError::conflicting_enemy("Superman")));
    }

    #[tokio::test]
    async fn test_unknown_member_rejected() {
        let fixture = create_fixture();

        let result = fixture
            .squadrons
            .create(request("Gotham", &["Batman", "Joker"]))
            .await;

        assert_eq!(result, Err(SquadronError::member_not_found("Joker")));
        assert!(fixture.squadrons.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_member_alias_rejected() {
        let fixture = create_fixture();

        let result = fixture.squadrons.create(request("Blank", &[""])).await;
        assert_eq!(result, Err(SquadronError::member_not_found("")));
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let fixture = create_fixture();

        fixture
            .squadrons
            .create(request("JL", &["Batman"]))
            .await
            .unwrap();

        let result = fixture
            .squadrons
            .create(request("JL", &["Wonder Woman"]))
            .await;
        assert_eq!(result, Err(SquadronError::duplicate_name("JL")));

        let stored = fixture.squadrons.find("JL").await.unwrap();
        assert_eq!(stored.member_aliases().collect::<Vec<_>>(), vec!["Batman"]);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let fixture = create_fixture();

        let result = fixture.squadrons.create(request("", &["Batman"])).await;
        assert_eq!(
            result,
            Err(SquadronError::InvalidName(SquadronValidationError::EmptyName))
        );
    }

    #[tokio::test]
    async fn test_empty_squadron_allowed() {
        let fixture = create_fixture();

        fixture.squadrons.create(request("Nobody", &[])).await.unwrap();

        let candidates = fixture.squadrons.candidates("Nobody").await.unwrap();
        assert_eq!(
            candidates,
            vec!["Batman", "Superman", "Wonder Woman", "Lex Luthor"]
        );
    }

    #[tokio::test]
    async fn test_candidates_unknown_squadron() {
        let fixture = create_fixture();

        let result = fixture.squadrons.candidates("Legion").await;
        assert_eq!(result, Err(SquadronError::not_found("Legion")));
    }

    #[tokio::test]
    async fn test_candidates_follow_live_archenemy() {
        let fixture = create_fixture();

        fixture
            .squadrons
            .create(request("JL", &["Batman", "Wonder Woman"]))
            .await
            .unwrap();

        fixture
            .heroes
            .set_archenemy("Batman", "Lex Luthor")
            .await
            .unwrap();

        let candidates = fixture.squadrons.candidates("JL").await.unwrap();
        assert_eq!(candidates, vec!["Superman"]);
    }

    #[tokio::test]
    async fn test_candidates_exclude_free_text_archenemy() {
        let fixture = create_fixture();

        fixture
            .heroes
            .create(crate::infrastructure::hero::CreateHeroRequest {
                alias: "Green Lantern".to_string(),
                archenemy: Some("Sinestro".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        fixture
            .heroes
            .create(crate::infrastructure::hero::CreateHeroRequest {
                alias: "Sinestro".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        fixture
            .squadrons
            .create(request("Corps", &["Green Lantern"]))
            .await
            .unwrap();

        let candidates = fixture.squadrons.candidates("Corps").await.unwrap();
        assert!(!candidates.contains(&"Sinestro".to_string()));
        assert!(!candidates.contains(&"Green Lantern".to_string()));
        assert!(candidates.contains(&"Batman".to_string()));
    }

    #[tokio::test]
    async fn test_deleted_member_leaves_dangling_reference() {
        let fixture = create_fixture();

        fixture
            .squadrons
            .create(request("JL", &["Batman", "Wonder Woman"]))
            .await
            .unwrap();

        fixture.heroes.delete("Batman").await.unwrap();

        let squadron = fixture.squadrons.find("JL").await.unwrap();
        assert!(squadron.has_member("Batman"));

        // Batman's archenemy no longer counts, so Superman becomes a candidate
        let candidates = fixture.squadrons.candidates("JL").await.unwrap();
        assert_eq!(candidates, vec!["Superman", "Lex Luthor"]);
    }

    #[tokio::test]
    async fn test_squadron_storage_failure_propagates() {
        let hero_repository = Arc::new(StorageHeroRepository::new(Arc::new(
            InMemoryStorage::<Hero>::with_entities(crate::default_heroes()),
        )));

        let mut squadron_repository = MockSquadronRepository::new();
        squadron_repository.expect_exists().returning(|_| Ok(false));
        squadron_repository
            .expect_create()
            .returning(|_| Err(DomainError::storage("Failed to acquire write lock")));

        let service = SquadronService::new(
            hero_repository,
            Arc::new(squadron_repository),
            RosterLock::new(),
        );

        let result = service.create(request("JL", &["Batman"])).await;
        assert!(matches!(result, Err(SquadronError::Storage(_))));
    }

    #[tokio::test]
    async fn test_failed_validation_never_writes() {
        let hero_repository = Arc::new(StorageHeroRepository::new(Arc::new(
            InMemoryStorage::<Hero>::with_entities(crate::default_heroes()),
        )));

        let mut squadron_repository = MockSquadronRepository::new();
        squadron_repository.expect_exists().returning(|_| Ok(false));
        squadron_repository.expect_create().never();

        let service = SquadronService::new(
            hero_repository,
            Arc::new(squadron_repository),
            RosterLock::new(),
        );

        let result = service
            .create(request("Bad", &["Superman", "Lex Luthor"]))
            .await;
        assert!(matches!(result, Err(SquadronError::ConflictingEnemy(_))));

        let result = service.create(request("Gotham", &["Joker"])).await;
        assert!(matches!(result, Err(SquadronError::MemberNotFound(_))));
    }
}
