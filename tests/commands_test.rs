//! Integration tests for command helpers

use draft_sport::{commands::resolve_league_id, DraftSportError, LeagueId, LEAGUE_ID_ENV_VAR};

// Env-var cases share one test so they cannot race each other.
#[test]
fn test_resolve_league_id() {
    let league_id = Some(LeagueId::new("12345"));
    assert_eq!(resolve_league_id(league_id).unwrap().as_str(), "12345");

    std::env::set_var(LEAGUE_ID_ENV_VAR, "54321");
    assert_eq!(resolve_league_id(None).unwrap().as_str(), "54321");

    // An explicit ID beats the environment.
    let explicit = resolve_league_id(Some(LeagueId::new("1"))).unwrap();
    assert_eq!(explicit.as_str(), "1");

    std::env::set_var(LEAGUE_ID_ENV_VAR, "   ");
    assert!(resolve_league_id(None).is_err());

    std::env::remove_var(LEAGUE_ID_ENV_VAR);
    match resolve_league_id(None).unwrap_err() {
        DraftSportError::Configuration { value, hint } => {
            assert_eq!(value, "league ID");
            assert!(hint.contains(LEAGUE_ID_ENV_VAR));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
