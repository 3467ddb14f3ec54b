use nook_core::{AssistKind, Character, World};

#[test]
fn test_character_sample_shape() {
    let character = Character::sample();

    assert_eq!(character.name, "Elara Moonwhisper");
    assert_eq!(character.age, 28);
    assert_eq!(character.occupation, "Herbalist");
    assert_eq!(
        character.skills,
        vec![
            "Potion brewing",
            "Plant identification",
            "Animal communication"
        ]
    );
    assert_eq!(character.flaws, vec!["Trusts too easily", "Fears large crowds"]);
}

#[test]
fn test_world_serializes_type_key() {
    let json = serde_json::to_value(World::sample()).unwrap();

    assert_eq!(json["name"], "Aethermoor");
    assert_eq!(json["type"], "Mystical Realm");
    assert!(json.get("world_type").is_none());
    assert_eq!(json["notable_locations"].as_array().unwrap().len(), 3);
}

#[test]
fn test_assist_kind_parse() {
    assert_eq!(AssistKind::parse("continue"), Some(AssistKind::Continue));
    assert_eq!(AssistKind::parse("improve"), Some(AssistKind::Improve));
    assert_eq!(AssistKind::parse("brainstorm"), Some(AssistKind::Brainstorm));
    assert_eq!(AssistKind::parse("Improve"), None);
    assert_eq!(AssistKind::parse(""), None);
}

#[test]
fn test_unknown_kind_resolves_to_continue() {
    let kind = AssistKind::resolve("unknown-value");

    assert_eq!(kind, AssistKind::Continue);
    assert_eq!(kind.suggestions(), AssistKind::Continue.suggestions());
}

#[test]
fn test_suggestion_sets_are_distinct() {
    let cont = AssistKind::Continue.suggestions();
    let improve = AssistKind::Improve.suggestions();
    let brainstorm = AssistKind::Brainstorm.suggestions();

    assert_ne!(cont, improve);
    assert_ne!(improve, brainstorm);
    assert_eq!(
        improve[0],
        "Consider adding more sensory details to immerse the reader"
    );
}

#[test]
fn test_assist_kind_display() {
    assert_eq!(AssistKind::Brainstorm.to_string(), "brainstorm");
}
