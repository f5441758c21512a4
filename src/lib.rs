//! Superhero Roster API
//!
//! An in-memory service for managing superheroes and the squadrons they
//! form, with a candidate query that keeps archenemies apart.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{Hero, HeroAlias, Squadron};
use infrastructure::{
    hero::{HeroService, StorageHeroRepository},
    squadron::{SquadronService, StorageSquadronRepository},
    storage::{InMemoryStorage, RosterLock},
};
use tracing::info;

/// Create the application state with every service wired to one shared store
pub fn create_app_state(config: &AppConfig) -> AppState {
    let hero_storage = if config.roster.seed_heroes {
        let heroes = default_heroes();
        info!(count = heroes.len(), "Seeding hero store");
        InMemoryStorage::<Hero>::with_entities(heroes)
    } else {
        InMemoryStorage::<Hero>::new()
    };
    let squadron_storage = InMemoryStorage::<Squadron>::new();

    let lock = RosterLock::new();
    let hero_repository = Arc::new(StorageHeroRepository::new(Arc::new(hero_storage)));
    let squadron_repository =
        Arc::new(StorageSquadronRepository::new(Arc::new(squadron_storage)));

    let hero_service = HeroService::new(hero_repository.clone(), lock.clone());
    let squadron_service = SquadronService::new(hero_repository, squadron_repository, lock);

    AppState::new(Arc::new(hero_service), Arc::new(squadron_service))
}

/// The heroes loaded at startup, in store order
pub fn default_heroes() -> Vec<Hero> {
    let seed = [
        ("Batman", Some("Gotham City"), Some("74%"), Some("Superman")),
        ("Superman", Some("Metropolis"), Some("41%"), Some("Lex Luthor")),
        ("Wonder Woman", Some("Themyscira"), Some("88%"), None),
        ("Lex Luthor", Some("Metropolis"), None, Some("Superman")),
    ];

    seed.into_iter()
        .filter_map(|(alias, origin, approval_rate, archenemy)| {
            let mut hero = Hero::new(HeroAlias::new(alias).ok()?);

            if let Some(origin) = origin {
                hero = hero.with_origin(origin);
            }
            if let Some(approval_rate) = approval_rate {
                hero = hero.with_approval_rate(approval_rate);
            }
            if let Some(archenemy) = archenemy {
                hero = hero.with_archenemy(archenemy);
            }

            Some(hero)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heroes() {
        let heroes = default_heroes();

        let aliases: Vec<&str> = heroes.iter().map(|h| h.alias().as_str()).collect();
        assert_eq!(aliases, vec!["Batman", "Superman", "Wonder Woman", "Lex Luthor"]);
        assert_eq!(heroes[0].archenemy(), Some("Superman"));
        assert_eq!(heroes[2].archenemy(), None);
        assert_eq!(heroes[3].approval_rate(), None);
    }

    #[tokio::test]
    async fn test_create_app_state_seeds_heroes() {
        let state = create_app_state(&AppConfig::default());

        assert_eq!(state.hero_service.count().await.unwrap(), 4);
        assert!(state.squadron_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_app_state_without_seed() {
        let mut config = AppConfig::default();
        config.roster.seed_heroes = false;

        let state = create_app_state(&config);

        assert_eq!(state.hero_service.count().await.unwrap(), 0);
    }
}
