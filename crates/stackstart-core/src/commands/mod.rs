//! Setup command generation
//!
//! Turns a complete selection into labeled groups of shell commands. The
//! commands are descriptive text for the user to copy; nothing here runs
//! them.

mod templates;

use crate::error::Result;
use crate::selection::Selection;
use serde::Serialize;

/// A labeled, ordered block of setup commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandGroup {
    /// Stable identifier (`frontend`, `backend`, `database`, `auth`)
    pub id: &'static str,
    /// Heading shown to the user
    pub label: &'static str,
    pub lines: Vec<String>,
}

/// Project scaffold group, identical for every selection
pub fn frontend_group() -> CommandGroup {
    CommandGroup {
        id: "frontend",
        label: "Frontend Setup",
        lines: templates::frontend_lines(),
    }
}

/// Generate the command groups for a complete selection
///
/// Groups are always returned in the order frontend, backend, database,
/// auth. Fails with [`crate::StackError::NotReady`] if any category is still
/// empty.
pub fn generate(selection: &Selection) -> Result<Vec<CommandGroup>> {
    let stack = selection.stack()?;

    Ok(vec![
        frontend_group(),
        CommandGroup {
            id: "backend",
            label: "Backend Setup",
            lines: templates::backend_lines(stack.backend),
        },
        CommandGroup {
            id: "database",
            label: "Database Setup",
            lines: templates::database_lines(stack.database),
        },
        CommandGroup {
            id: "auth",
            label: "Auth Setup",
            lines: templates::auth_lines(stack.auth),
        },
    ])
}

/// Render groups as plain text, ready to paste into a terminal or a README
pub fn format_groups(groups: &[CommandGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("# ");
        out.push_str(group.label);
        out.push('\n');
        for line in &group.lines {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AuthMethod, Backend, Category, Database};
    use crate::error::StackError;

    fn ready(backend: &str, database: &str, auth: &str) -> Selection {
        let mut selection = Selection::new();
        selection.choose(Category::Language, "typescript").unwrap();
        selection.choose(Category::Backend, backend).unwrap();
        selection.choose(Category::Database, database).unwrap();
        selection.choose(Category::Auth, auth).unwrap();
        selection
    }

    #[test]
    fn test_generate_requires_ready_selection() {
        let mut selection = Selection::new();
        selection.choose(Category::Language, "go").unwrap();
        let err = generate(&selection).unwrap_err();
        assert!(matches!(err, StackError::NotReady { .. }));
    }

    #[test]
    fn test_group_order_is_fixed() {
        let groups = generate(&Selection::with_defaults()).unwrap();
        let ids: Vec<_> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["frontend", "backend", "database", "auth"]);
    }

    #[test]
    fn test_frontend_group_is_selection_independent() {
        let a = generate(&ready("django", "mysql", "otp")).unwrap();
        let b = generate(&ready("firebase", "firestore", "clerk")).unwrap();
        assert_eq!(a[0], frontend_group());
        assert_eq!(b[0], frontend_group());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let selection = ready("supabase", "postgres", "supabase-auth");
        assert_eq!(generate(&selection).unwrap(), generate(&selection).unwrap());
    }

    #[test]
    fn test_default_stack_commands() {
        let groups = generate(&Selection::with_defaults()).unwrap();
        assert_eq!(groups[1].lines[0], "npm install express cors dotenv");
        assert_eq!(groups[2].lines[0], "npm install pg");
        assert_eq!(groups[3].lines[0], "npm install jsonwebtoken bcryptjs");
    }

    #[test]
    fn test_database_templates_interpolate_display_name() {
        let groups = generate(&ready("django", "opensearch", "jwt")).unwrap();
        assert_eq!(
            groups[2].lines[1],
            "# Install and start OpenSearch locally or use cloud"
        );
        let groups = generate(&ready("django", "neo4j", "jwt")).unwrap();
        assert_eq!(groups[2].lines[1], "# Follow Neo4j setup guide");
    }

    #[test]
    fn test_shared_templates() {
        assert_eq!(
            templates::database_lines(Database::MySql),
            templates::database_lines(Database::MariaDb)
        );
        assert_eq!(
            templates::auth_lines(AuthMethod::GoogleAuth),
            templates::auth_lines(AuthMethod::GithubAuth)
        );

        let timescale = templates::database_lines(Database::TimescaleDb);
        let influx = templates::database_lines(Database::InfluxDb);
        assert_eq!(timescale[0], "npm install pg");
        assert_eq!(influx[0], timescale[0]);
        assert_eq!(timescale[1], "# TimescaleDB runs on PostgreSQL protocol");
        assert_eq!(influx[1], "# InfluxDB runs on InfluxDB protocol");
    }

    #[test]
    fn test_family_templates_vary_by_member() {
        assert_eq!(
            templates::database_lines(Database::Memcached)[0],
            "npm install memcached"
        );
        let neo4j = templates::database_lines(Database::Neo4j);
        assert_eq!(neo4j, vec!["npm install neo4j-driver", "# Follow Neo4j setup guide"]);
        let arango = templates::database_lines(Database::ArangoDb);
        assert_eq!(arango[0], "npm install arangojs");
        assert_eq!(arango[1], "# Follow ArangoDB setup guide");
    }

    #[test]
    fn test_every_option_has_commands() {
        for backend in Backend::ALL {
            assert!(!templates::backend_lines(*backend).is_empty());
        }
        for database in Database::ALL {
            assert!(!templates::database_lines(*database).is_empty());
        }
        for auth in AuthMethod::ALL {
            assert!(!templates::auth_lines(*auth).is_empty());
        }
    }

    #[test]
    fn test_format_groups() {
        let groups = vec![
            CommandGroup {
                id: "a",
                label: "First",
                lines: vec!["one".to_string()],
            },
            CommandGroup {
                id: "b",
                label: "Second",
                lines: vec!["two".to_string(), "three".to_string()],
            },
        ];
        assert_eq!(
            format_groups(&groups),
            "# First\none\n\n# Second\ntwo\nthree\n"
        );
    }
}
