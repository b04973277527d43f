//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

pub use args::{Bbstats, Commands, SourceArgs, ViewArgs};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{SortDirection, StatKind};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_team_command_defaults() {
        let app = Bbstats::try_parse_from(["bbstats", "team", "nyy"]).unwrap();
        match app.command {
            Commands::Team {
                team,
                year,
                end_year,
                view,
                source,
            } => {
                assert_eq!(team.as_str(), "NYY");
                assert!(year.is_none());
                assert!(end_year.is_none());
                assert_eq!(view.stats, StatKind::Batting);
                assert_eq!(view.direction, SortDirection::Desc);
                assert!(view.export.is_none());
                assert!(!view.interactive);
                assert!(!source.refresh);
                assert!(source.api_url.is_none());
            }
            other => panic!("Expected Team command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_view_flags() {
        let app = Bbstats::try_parse_from([
            "bbstats",
            "player",
            "troutmi01",
            "--stats",
            "pitching",
            "--columns",
            "Year,Team,G",
            "--add",
            "HR",
            "--add",
            "SO",
            "--remove",
            "LG",
            "--move",
            "HR:1",
            "--sort",
            "HR",
            "--direction",
            "asc",
            "--min",
            "10",
            "--export",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Player { player, view, .. } => {
                assert_eq!(player.as_str(), "troutmi01");
                assert_eq!(view.stats, StatKind::Pitching);
                assert_eq!(
                    view.columns,
                    Some(vec!["Year".to_string(), "Team".to_string(), "G".to_string()])
                );
                assert_eq!(view.add, vec!["HR".to_string(), "SO".to_string()]);
                assert_eq!(view.remove, vec!["LG".to_string()]);
                assert_eq!(view.moves.len(), 1);
                assert_eq!(view.moves[0].position, 1);
                assert_eq!(view.sort.as_deref(), Some("HR"));
                assert_eq!(view.direction, SortDirection::Asc);
                assert_eq!(view.min.as_deref(), Some("10"));
                assert_eq!(view.export, Some(PathBuf::from(".")));
                assert!(view.json);
            }
            other => panic!("Expected Player command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_move() {
        let result = Bbstats::try_parse_from(["bbstats", "team", "NYY", "--move", "HR"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_lookup() {
        let app = Bbstats::try_parse_from(["bbstats", "lookup", "Mike Trout", "--refresh"]).unwrap();
        match app.command {
            Commands::Lookup { name, source } => {
                assert_eq!(name, "Mike Trout");
                assert!(source.refresh);
            }
            other => panic!("Expected Lookup command, got {other:?}"),
        }
    }
}
