//! Selection state and compatibility rules
//!
//! A [`Selection`] holds at most one option per category. It is changed
//! through [`Selection::choose`], which also applies the auto-fill rules in
//! [`rules`]. Compatibility checks are advisory: they tell a UI what to grey
//! out, and `choose` never rejects an incompatible pick.

pub mod rules;

use crate::catalog::{AuthMethod, Backend, Category, Choice, Database, Language};
use crate::error::{Result, StackError};
use serde::{Deserialize, Serialize};

/// Default stack: JavaScript, Node.js Express, PostgreSQL, JWT
pub const DEFAULT_STACK: Stack = Stack {
    language: Language::JavaScript,
    backend: Backend::NodejsExpress,
    database: Database::Postgres,
    auth: AuthMethod::Jwt,
};

/// The user's in-progress set of choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backend: Option<Backend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    database: Option<Database>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth: Option<AuthMethod>,
}

/// A selection with every category filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stack {
    pub language: Language,
    pub backend: Backend,
    pub database: Database,
    pub auth: AuthMethod,
}

impl Selection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection pre-filled with [`DEFAULT_STACK`]
    pub fn with_defaults() -> Self {
        Self::from(DEFAULT_STACK)
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn backend(&self) -> Option<Backend> {
        self.backend
    }

    pub fn database(&self) -> Option<Database> {
        self.database
    }

    pub fn auth(&self) -> Option<AuthMethod> {
        self.auth
    }

    /// Current choice for a category, if any
    pub fn get(&self, category: Category) -> Option<Choice> {
        match category {
            Category::Language => self.language.map(Choice::Language),
            Category::Backend => self.backend.map(Choice::Backend),
            Category::Database => self.database.map(Choice::Database),
            Category::Auth => self.auth.map(Choice::Auth),
        }
    }

    fn set(&mut self, choice: Choice) {
        match choice {
            Choice::Language(v) => self.language = Some(v),
            Choice::Backend(v) => self.backend = Some(v),
            Choice::Database(v) => self.database = Some(v),
            Choice::Auth(v) => self.auth = Some(v),
        }
    }

    /// Choose an option by id
    ///
    /// Returns the choices written by auto-fill rules, in the order applied.
    /// Fails with [`StackError::UnknownOption`] if `id` is not an option of
    /// `category`; the selection is left untouched in that case.
    pub fn choose(&mut self, category: Category, id: &str) -> Result<Vec<Choice>> {
        let choice = Choice::parse(category, id)?;
        Ok(self.apply(choice))
    }

    /// Choose an already validated option
    pub fn apply(&mut self, choice: Choice) -> Vec<Choice> {
        let before = *self;
        self.set(choice);
        tracing::debug!(category = %choice.category(), id = choice.id(), "chose option");

        let mut filled = Vec::new();
        for rule in rules::rules_for(choice) {
            if rule.condition.holds(&before) {
                self.set(rule.target);
                tracing::debug!(
                    trigger = choice.id(),
                    category = %rule.target.category(),
                    id = rule.target.id(),
                    "auto-filled option"
                );
                filled.push(rule.target);
            }
        }
        filled
    }

    /// True once all four categories are chosen
    pub fn is_ready(&self) -> bool {
        self.missing().is_empty()
    }

    /// Categories that still need a choice, in prompt order
    pub fn missing(&self) -> Vec<Category> {
        Category::ORDERED
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }

    /// Replace every field with [`DEFAULT_STACK`] without running rules
    pub fn apply_defaults(&mut self) {
        *self = Self::with_defaults();
        tracing::info!("applied default stack");
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("selection reset");
    }

    /// Whether an option should be offered given the current backend
    pub fn is_compatible(&self, category: Category, id: &str) -> Result<bool> {
        Choice::parse(category, id).map(|choice| self.is_compatible_choice(choice))
    }

    pub fn is_compatible_choice(&self, choice: Choice) -> bool {
        match choice {
            Choice::Database(db) => match self.backend {
                None => true,
                Some(backend) => match rules::fixed_database(backend) {
                    Some(fixed) => fixed == db,
                    None => !db.is_hosted_only(),
                },
            },
            Choice::Auth(auth) => match (rules::bound_backend(auth), self.backend) {
                (Some(provider), Some(backend)) => provider == backend,
                _ => true,
            },
            Choice::Language(_) | Choice::Backend(_) => true,
        }
    }

    /// Complete stack, or [`StackError::NotReady`] naming what is missing
    pub fn stack(&self) -> Result<Stack> {
        match (self.language, self.backend, self.database, self.auth) {
            (Some(language), Some(backend), Some(database), Some(auth)) => Ok(Stack {
                language,
                backend,
                database,
                auth,
            }),
            _ => Err(StackError::NotReady {
                missing: self.missing(),
            }),
        }
    }
}

impl From<Stack> for Selection {
    fn from(stack: Stack) -> Self {
        Self {
            language: Some(stack.language),
            backend: Some(stack.backend),
            database: Some(stack.database),
            auth: Some(stack.auth),
        }
    }
}

impl Database {
    /// Databases that only exist as part of a hosted backend
    pub fn is_hosted_only(&self) -> bool {
        matches!(self, Database::Firestore)
    }
}
