//! Creation flow test: repository, catalog and builder working together

use character_core::catalog::CatalogError;
use character_core::choice::ChoiceStatus;
use character_core::config::{parse_content, parse_toml};
use character_core::prelude::*;
use character_core::repository::RepositoryError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn catalog() -> ContentCatalog {
    ContentCatalog::new(default_content())
}

#[test]
fn dwarf_fighter_with_fixed_scores() {
    let repo = InMemoryRepository::default();
    let catalog = catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let character = repo.create("player-1", "Bruenor").unwrap();
    assert_eq!(character.phase(), Phase::Uninitialized);

    CharacterBuilder::new(&catalog, "dwarf", "fighter")
        .with_scores([15, 12, 14, 10, 13, 8])
        .build(&character, &mut rng)
        .unwrap();

    // Con 14 (+2) plus the dwarven +2 bonus on a d10
    assert_eq!(character.max_hit_points(), 14);
    assert_eq!(character.current_hit_points(), 14);
    // Chain mail ignores dexterity; the shield adds 2
    assert_eq!(character.armor_class(), 18);
    assert_eq!(character.phase(), Phase::Built);

    character.with_sheet(|sheet| {
        assert_eq!(sheet.speed(), 25);
        assert_eq!(sheet.hit_die(), 10);
        assert_eq!(sheet.level(), 1);
        assert!(sheet.rolls().is_empty());

        assert_eq!(sheet.equipped(Slot::Body).unwrap().key(), "chain-mail");
        assert_eq!(sheet.equipped(Slot::MainHand).unwrap().key(), "longsword");
        assert_eq!(sheet.equipped(Slot::OffHand).unwrap().key(), "shield");
        assert!(sheet.equipped(Slot::None).is_none());

        assert_eq!(sheet.inventory("Armor").len(), 2);
        assert_eq!(sheet.inventory("Weapon").len(), 1);
        assert_eq!(sheet.inventory("Gear").len(), 1);

        let weapons: Vec<&str> = sheet
            .proficiencies(ProficiencyType::Weapon)
            .iter()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(
            weapons,
            vec!["battleaxe", "warhammer", "simple-weapons", "martial-weapons"]
        );
    });

    let text = character.describe();
    assert!(text.starts_with("Bruenor the Dwarf Fighter\n"));
    assert!(text.contains("  -  Con: 14 (+4)\n"));
    assert!(text.contains("  -  AC: 18\n"));
    assert!(text.contains("  -  body: Chain Mail\n"));
}

#[test]
fn elf_rogue_dual_wields_and_uses_dexterity() {
    let catalog = catalog();
    let character = Character::new("rogue-1", "player-1", "Nim");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    CharacterBuilder::new(&catalog, "elf", "rogue")
        .with_scores([10, 15, 12, 13, 11, 14])
        .build(&character, &mut rng)
        .unwrap();

    // Dex 15 (+2) plus the elven +2 on leather armor
    assert_eq!(character.armor_class(), 15);
    assert_eq!(character.max_hit_points(), 9);

    // The dagger took the main hand and pushed the shortsword across
    assert_eq!(character.equipped(Slot::MainHand).unwrap().key(), "dagger");
    assert_eq!(character.equipped(Slot::OffHand).unwrap().key(), "shortsword");
    assert!(character.equipped(Slot::None).is_none());
    character.with_sheet(|sheet| assert_eq!(sheet.inventory_len(), 4));
}

#[test]
fn human_barbarian_two_handed_weapon() {
    let catalog = catalog();
    let character = Character::new("barb-1", "player-1", "Krusk");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    CharacterBuilder::new(&catalog, "human", "barbarian")
        .with_scores([16, 14, 15, 8, 12, 10])
        .build(&character, &mut rng)
        .unwrap();

    // Con 15 (+2) plus the human +1 on a d12
    assert_eq!(character.max_hit_points(), 15);
    // Unarmored: base 10, no dexterity without body armor
    assert_eq!(character.armor_class(), 10);
    assert_eq!(character.equipped(Slot::TwoHanded).unwrap().key(), "greataxe");

    // A shield knocks the greataxe out of both hands
    character.equip(catalog.equipment("shield").unwrap());
    assert!(character.equipped(Slot::TwoHanded).is_none());
    assert_eq!(character.armor_class(), 12);
}

#[test]
fn rolled_scores_are_reproducible_from_seed() {
    let catalog = catalog();
    let first = Character::new("a", "player-1", "First");
    let second = Character::new("b", "player-1", "Second");

    CharacterBuilder::new(&catalog, "halfling", "wizard")
        .build(&first, &mut ChaCha8Rng::seed_from_u64(2024))
        .unwrap();
    CharacterBuilder::new(&catalog, "halfling", "wizard")
        .build(&second, &mut ChaCha8Rng::seed_from_u64(2024))
        .unwrap();

    for attribute in Attribute::all() {
        let score = first.attribute(*attribute).unwrap();
        assert!((3..=18).contains(&score.score()));
        assert_eq!(Some(score), second.attribute(*attribute));
    }
    first.with_sheet(|sheet| {
        assert_eq!(sheet.rolls().len(), 6);
        assert!(sheet.rolls().iter().all(|r| r.rolls.len() == 4));
    });
}

#[test]
fn unknown_keys_fail_before_any_mutation() {
    let catalog = catalog();
    let character = Character::new("x", "player-1", "Ghost");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = CharacterBuilder::new(&catalog, "tiefling", "fighter")
        .build(&character, &mut rng)
        .unwrap_err();
    assert_eq!(err, CatalogError::UnknownRace("tiefling".to_string()));
    assert_eq!(character.phase(), Phase::Uninitialized);
    assert_eq!(character.describe(), "Character not fully created");
}

#[test]
fn class_with_missing_equipment_is_rejected() {
    let content = parse_content(
        r#"
        [[races]]
        key = "human"
        name = "Human"

        [[classes]]
        key = "monk"
        name = "Monk"
        hit_die = 8
        starting_equipment = ["darts"]
        "#,
    );
    assert!(content.is_err());
}

#[test]
fn proficiency_choice_completes_after_count_picks() {
    let catalog = catalog();
    let character = Character::new("f", "player-1", "Picker");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    CharacterBuilder::new(&catalog, "human", "fighter")
        .with_scores([15, 14, 13, 12, 10, 8])
        .build(&character, &mut rng)
        .unwrap();

    let picked = character
        .select_proficiency_choice("fighter-skills", "skill-athletics")
        .unwrap();
    character.add_proficiency(Proficiency::new(picked.key, picked.name, ProficiencyType::Skill));
    character.with_sheet(|sheet| {
        assert_eq!(sheet.proficiency_choices()[0].status, ChoiceStatus::Unset);
    });

    character
        .select_proficiency_choice("fighter-skills", "skill-perception")
        .unwrap();
    character.with_sheet(|sheet| {
        let choice = &sheet.proficiency_choices()[0];
        assert!(choice.is_complete());
        assert_eq!(choice.selected_count(), 2);
        assert_eq!(sheet.proficiencies(ProficiencyType::Skill).len(), 1);
    });
}

#[test]
fn repository_round_trip_across_owners() {
    let repo = InMemoryRepository::new(parse_toml("[progression]\nstarting_level = 3\n").unwrap());
    let catalog = catalog();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let hero = repo.create("alice", "Hero").unwrap();
    repo.create("bob", "Sidekick").unwrap();

    CharacterBuilder::new(&catalog, "elf", "wizard")
        .build(&hero, &mut rng)
        .unwrap();
    hero.mark_in_play();
    repo.save(hero.clone()).unwrap();

    let loaded = repo.get(hero.id()).unwrap();
    assert_eq!(loaded.phase(), Phase::InPlay);
    assert_eq!(loaded.rules().progression.starting_level, 3);
    loaded.with_sheet(|sheet| assert_eq!(sheet.level(), 3));

    let owned = repo.list_by_owner("alice").unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name(), "Hero");

    assert!(matches!(repo.get("missing"), Err(RepositoryError::NotFound(_))));
}
