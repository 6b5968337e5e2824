//! Creation Demo - Builds a small party with character_core
//!
//! This demo shows:
//! - Loading rules constants and content from creation_demo/config
//! - Creating characters through a repository and building them from a catalog
//! - Resolving proficiency choices
//! - Several handlers equipping one shared character at the same time
//! - Experience, hand-off to play and the final character sheets

use character_core::config::{load_content, load_toml};
use character_core::prelude::*;
use character_core::ContentConfig;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::path::Path;
use std::thread;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const OWNER: &str = "demo-player";

/// (name, race, class) for each party member
const PARTY: [(&str, &str, &str); 3] = [
    ("Bruenor", "dwarf", "fighter"),
    ("Nim", "halfling", "rogue"),
    ("Elaith", "elf", "wizard"),
];

/// Gear handed out concurrently to the first party member
const HANDOUTS: [&str; 4] = ["dagger", "scale-mail", "shield", "spellbook"];

/// Load rules and content from the first config directory that exists,
/// falling back to the bundled defaults
fn load_config() -> (RulesConstants, ContentConfig, String) {
    let config_paths = ["creation_demo/config", "../creation_demo/config"];

    config_paths
        .iter()
        .find_map(|p| {
            let dir = Path::new(p);
            if !dir.exists() {
                return None;
            }
            match load_dir(dir) {
                Ok((rules, content)) => Some((rules, content, p.to_string())),
                Err(e) => {
                    tracing::error!("Error loading config from '{}': {}", p, e);
                    None
                }
            }
        })
        .unwrap_or_else(|| {
            tracing::warn!(
                "No config directory found (looked in {}), using bundled defaults",
                config_paths.join(", ")
            );
            (
                RulesConstants::default(),
                default_content(),
                "bundled".to_string(),
            )
        })
}

fn load_dir(dir: &Path) -> Result<(RulesConstants, ContentConfig), character_core::ConfigError> {
    let rules_path = dir.join("rules.toml");
    let rules: RulesConstants = if rules_path.exists() {
        load_toml(&rules_path)?
    } else {
        RulesConstants::default()
    };
    rules.validate()?;

    let content_path = dir.join("content.toml");
    let content = if content_path.exists() {
        load_content(&content_path)?
    } else {
        default_content()
    };
    Ok((rules, content))
}

/// Pick options in listed order until every pending choice is complete,
/// granting each picked reference as a skill proficiency
fn resolve_choices(character: &Character) {
    let pending: Vec<(String, Vec<String>)> = character.with_sheet(|sheet| {
        sheet
            .proficiency_choices()
            .iter()
            .map(|c| {
                let keys = c.options.iter().map(|o| o.key().to_string()).collect();
                (c.key.clone(), keys)
            })
            .collect()
    });

    for (choice_key, option_keys) in pending {
        for option_key in option_keys {
            let Some(picked) = character.select_proficiency_choice(&choice_key, &option_key)
            else {
                break;
            };
            character.add_proficiency(Proficiency::new(
                picked.key,
                picked.name,
                ProficiencyType::Skill,
            ));
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "character_core=debug,creation_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (rules, content, config_path) = load_config();
    tracing::info!("Starting creation demo (config: {})", config_path);

    let repo = InMemoryRepository::new(rules);
    let catalog = ContentCatalog::new(content);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for (name, race, class) in PARTY {
        let character = repo.create(OWNER, name)?;
        CharacterBuilder::new(&catalog, race, class).build(&character, &mut rng)?;
        resolve_choices(&character);
        repo.save(character)?;
    }

    let party = repo.list_by_owner(OWNER)?;
    let Some(leader) = party.iter().find(|c| c.name() == PARTY[0].0) else {
        return Err("party leader missing from repository".into());
    };

    // Each handler takes the write lock per call; nothing is lost
    thread::scope(|scope| {
        for key in HANDOUTS {
            let catalog = &catalog;
            scope.spawn(move || match catalog.equipment(key) {
                Ok(item) => {
                    leader.add_inventory(item.clone());
                    leader.equip(item);
                }
                Err(e) => tracing::warn!("Skipping handout: {}", e),
            });
        }
    });
    tracing::info!(
        "{} holds {} items after handouts, AC {}",
        leader.name(),
        leader.with_sheet(|s| s.inventory_len()),
        leader.armor_class()
    );

    for character in &party {
        let experience = rng.gen_range(100..=1000);
        character.add_experience(experience);
        character.mark_in_play();
    }

    for character in &party {
        println!("{}", character.describe());
        println!();
    }

    Ok(())
}
