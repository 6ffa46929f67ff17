//! Option catalog
//!
//! Static registry of every selectable option, grouped by category. The
//! catalog is read-only; selection state lives in [`crate::selection`].

mod options;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub use options::{AuthMethod, Backend, Database, Language};

/// One of the four selectable dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Language,
    Backend,
    Database,
    Auth,
}

impl Category {
    /// Categories in the order they are prompted and generated
    pub const ORDERED: [Category; 4] = [
        Category::Language,
        Category::Backend,
        Category::Database,
        Category::Auth,
    ];

    /// Heading shown above the category's options
    pub fn title(&self) -> &'static str {
        match self {
            Category::Language => "Language",
            Category::Backend => "Backend",
            Category::Database => "Database",
            Category::Auth => "Authentication",
        }
    }
}

/// Learning curve hint shown next to an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

/// Display metadata for a single option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackOption {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
}

/// A validated option of some category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Language(Language),
    Backend(Backend),
    Database(Database),
    Auth(AuthMethod),
}

impl Choice {
    /// Resolve a raw id within a category
    pub fn parse(category: Category, id: &str) -> Result<Self> {
        Ok(match category {
            Category::Language => Choice::Language(id.parse()?),
            Category::Backend => Choice::Backend(id.parse()?),
            Category::Database => Choice::Database(id.parse()?),
            Category::Auth => Choice::Auth(id.parse()?),
        })
    }

    pub fn category(&self) -> Category {
        match self {
            Choice::Language(_) => Category::Language,
            Choice::Backend(_) => Category::Backend,
            Choice::Database(_) => Category::Database,
            Choice::Auth(_) => Category::Auth,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Choice::Language(v) => v.id(),
            Choice::Backend(v) => v.id(),
            Choice::Database(v) => v.id(),
            Choice::Auth(v) => v.id(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Choice::Language(v) => v.display_name(),
            Choice::Backend(v) => v.display_name(),
            Choice::Database(v) => v.display_name(),
            Choice::Auth(v) => v.display_name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Choice::Language(v) => v.description(),
            Choice::Backend(v) => v.description(),
            Choice::Database(v) => v.description(),
            Choice::Auth(v) => v.description(),
        }
    }
}

/// List every option of a category in catalog order
pub fn list_options(category: Category) -> Vec<StackOption> {
    match category {
        Category::Language => Language::ALL.iter().map(|o| o.option()).collect(),
        Category::Backend => Backend::ALL.iter().map(|o| o.option()).collect(),
        Category::Database => Database::ALL.iter().map(|o| o.option()).collect(),
        Category::Auth => AuthMethod::ALL.iter().map(|o| o.option()).collect(),
    }
}

/// Check whether an id names an option of the category
pub fn is_valid(category: Category, id: &str) -> bool {
    Choice::parse(category, id).is_ok()
}

/// Look up the human-readable name of an option
pub fn display_name(category: Category, id: &str) -> Result<&'static str> {
    Choice::parse(category, id).map(|c| c.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StackError;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_listed_option_is_valid() {
        for category in Category::iter() {
            for option in list_options(category) {
                assert!(is_valid(category, option.id), "{} {}", category, option.id);
                assert_eq!(display_name(category, option.id).unwrap(), option.display_name);
            }
        }
    }

    #[test]
    fn test_ids_are_unique_within_category() {
        for category in Category::iter() {
            let options = list_options(category);
            let ids: HashSet<_> = options.iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), options.len(), "duplicate id in {}", category);
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(list_options(Category::Language).len(), 6);
        assert_eq!(list_options(Category::Backend).len(), 8);
        assert_eq!(list_options(Category::Database).len(), 18);
        assert_eq!(list_options(Category::Auth).len(), 14);
    }

    #[test]
    fn test_unknown_option() {
        assert!(!is_valid(Category::Backend, "rails"));
        let err = display_name(Category::Backend, "rails").unwrap_err();
        assert!(matches!(
            err,
            StackError::UnknownOption { category: Category::Backend, ref id } if id == "rails"
        ));
    }

    #[test]
    fn test_parse_error_names_the_enum_category() {
        assert_eq!(Database::CATEGORY, Category::Database);
        assert_eq!(AuthMethod::CATEGORY, Category::Auth);
        let err = "cassandra".parse::<Database>().unwrap_err();
        assert!(matches!(
            err,
            StackError::UnknownOption { category, ref id }
                if category == Database::CATEGORY && id == "cassandra"
        ));
        assert_eq!(err.to_string(), "Unknown database option 'cassandra'");
    }

    #[test]
    fn test_ids_are_scoped_to_their_category() {
        // "firebase" is a backend, not a database
        assert!(is_valid(Category::Backend, "firebase"));
        assert!(!is_valid(Category::Database, "firebase"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(Category::Auth, "oauth").unwrap(), "OAuth 2.0");
        assert_eq!(display_name(Category::Database, "postgres").unwrap(), "PostgreSQL");
        assert_eq!(Backend::SpringBoot.to_string(), "Spring Boot");
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("auth".parse::<Category>().unwrap(), Category::Auth);
        assert_eq!(Category::Database.to_string(), "database");
        assert_eq!(Category::Auth.title(), "Authentication");
    }

    #[test]
    fn test_option_serde_uses_ids() {
        let json = serde_json::to_string(&Backend::NodejsExpress).unwrap();
        assert_eq!(json, "\"nodejs-express\"");
        let parsed: AuthMethod = serde_json::from_str("\"magic-link\"").unwrap();
        assert_eq!(parsed, AuthMethod::MagicLink);
        assert!(serde_json::from_str::<Database>("\"cassandra\"").is_err());
    }

    #[test]
    fn test_option_metadata() {
        let option = Language::Rust.option();
        assert_eq!(option.id, "rust");
        assert_eq!(option.complexity, Complexity::Advanced);
        assert!(!option.description.is_empty());
    }
}
