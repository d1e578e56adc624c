//! Deck loading and league libraries.

use stat_trumps::cards::{load_deck, parse_deck, Category, League, Library};
use stat_trumps::core::GameRng;
use stat_trumps::error::DeckError;
use stat_trumps::matchmaking::select_matchup;

fn record(name: &str, pts: &str) -> String {
    format!(
        r#"{{"player": "{name}", "team": "TST", "id": "{name}-id",
            "gp": "70", "min": "30.1", "pts": "{pts}", "fgp": "47.0", "3pm": "1.5",
            "3pa": "4.2", "3pp": "35.7", "ftp": "80.0", "ftm": "3.1", "reb": "6.0",
            "ast": "4.4", "stl": "1.0", "blk": "0.5", "tov": "2.0", "pic": "{name}.png"}}"#
    )
}

fn deck_json(records: &[(&str, &str)]) -> String {
    let body: Vec<String> = records.iter().map(|(n, p)| record(n, p)).collect();
    format!("[{}]", body.join(","))
}

#[test]
fn test_parse_deck() {
    let json = deck_json(&[("A", "20.5"), ("B", "11.0"), ("C", "8.25")]);
    let deck = parse_deck(League::Nba, &json).unwrap();

    assert_eq!(deck.len(), 3);
    assert_eq!(deck.league(), League::Nba);
    let a = deck.iter().find(|c| c.name == "A").unwrap();
    assert_eq!(a.value(Category::Points), 20.5);
    assert_eq!(a.value(Category::ThreesAttempted), 4.2);
    assert_eq!(a.image, "A.png");
}

#[test]
fn test_load_deck_from_directory() {
    let dir = std::env::temp_dir().join(format!("stat-trumps-deck-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(League::Wnba.deck_file()),
        deck_json(&[("W1", "18.0"), ("W2", "22.0")]),
    )
    .unwrap();

    let deck = load_deck(League::Wnba, &dir).unwrap();
    assert_eq!(deck.len(), 2);

    let missing = load_deck(League::AllTime, &dir);
    assert!(matches!(missing, Err(DeckError::Io(_))));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_loaded_library_deals() {
    let nba = parse_deck(
        League::Nba,
        &deck_json(&[("A", "30"), ("B", "25"), ("C", "20"), ("D", "15")]),
    )
    .unwrap();
    let wnba = parse_deck(League::Wnba, &deck_json(&[("W1", "18"), ("W2", "22")])).unwrap();

    let mut library = Library::new(nba);
    library.insert(wnba);
    library.set_active(League::Wnba).unwrap();

    let mut rng = GameRng::new(5);
    let m = select_matchup(library.active_mut(), 0, &mut rng);

    assert!(m.player.name.starts_with('W'));
    assert!(m.opponent.name.starts_with('W'));
    assert!(library.active().is_empty());
    assert_eq!(library.get(League::Nba).unwrap().len(), 4);
}
