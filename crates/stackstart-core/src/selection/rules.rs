//! Auto-fill rules applied when a choice is made
//!
//! Each rule is evaluated once, against the selection as it was before the
//! triggering choice. Targets never trigger further rules.

use super::Selection;
use crate::catalog::{AuthMethod, Backend, Choice, Database};

/// When a rule is allowed to write its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Overwrite the target even if the user already chose something else
    Always,
    /// Only when no backend had been chosen yet
    BackendWasEmpty,
}

impl Condition {
    pub fn holds(&self, before: &Selection) -> bool {
        match self {
            Condition::Always => true,
            Condition::BackendWasEmpty => before.backend().is_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoFill {
    pub trigger: Choice,
    pub target: Choice,
    pub condition: Condition,
}

const fn rule(trigger: Choice, target: Choice, condition: Condition) -> AutoFill {
    AutoFill {
        trigger,
        target,
        condition,
    }
}

pub const AUTO_FILL_RULES: &[AutoFill] = &[
    // Backend-as-a-service providers bundle exactly one database
    rule(
        Choice::Backend(Backend::Firebase),
        Choice::Database(Database::Firestore),
        Condition::Always,
    ),
    rule(
        Choice::Backend(Backend::Supabase),
        Choice::Database(Database::Postgres),
        Condition::Always,
    ),
    rule(
        Choice::Backend(Backend::Appwrite),
        Choice::Database(Database::MariaDb),
        Condition::Always,
    ),
    rule(
        Choice::Backend(Backend::PocketBase),
        Choice::Database(Database::Sqlite),
        Condition::Always,
    ),
    // Provider-bound auth pulls in its provider when no backend is set
    rule(
        Choice::Auth(AuthMethod::FirebaseAuth),
        Choice::Backend(Backend::Firebase),
        Condition::BackendWasEmpty,
    ),
    rule(
        Choice::Auth(AuthMethod::FirebaseAuth),
        Choice::Database(Database::Firestore),
        Condition::BackendWasEmpty,
    ),
    rule(
        Choice::Auth(AuthMethod::SupabaseAuth),
        Choice::Backend(Backend::Supabase),
        Condition::BackendWasEmpty,
    ),
    rule(
        Choice::Auth(AuthMethod::SupabaseAuth),
        Choice::Database(Database::Postgres),
        Condition::BackendWasEmpty,
    ),
];

/// Rules fired by a choice, in table order
pub fn rules_for(trigger: Choice) -> impl Iterator<Item = &'static AutoFill> {
    AUTO_FILL_RULES.iter().filter(move |r| r.trigger == trigger)
}

/// The single database a backend-as-a-service ships with
pub fn fixed_database(backend: Backend) -> Option<Database> {
    rules_for(Choice::Backend(backend)).find_map(|r| match r.target {
        Choice::Database(db) => Some(db),
        _ => None,
    })
}

/// The backend a provider-bound auth method belongs to
pub fn bound_backend(auth: AuthMethod) -> Option<Backend> {
    rules_for(Choice::Auth(auth)).find_map(|r| match r.target {
        Choice::Backend(backend) => Some(backend),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_databases() {
        assert_eq!(fixed_database(Backend::Firebase), Some(Database::Firestore));
        assert_eq!(fixed_database(Backend::Supabase), Some(Database::Postgres));
        assert_eq!(fixed_database(Backend::Appwrite), Some(Database::MariaDb));
        assert_eq!(fixed_database(Backend::PocketBase), Some(Database::Sqlite));
        assert_eq!(fixed_database(Backend::Django), None);
        assert_eq!(fixed_database(Backend::NodejsExpress), None);
    }

    #[test]
    fn test_bound_backends() {
        assert_eq!(bound_backend(AuthMethod::FirebaseAuth), Some(Backend::Firebase));
        assert_eq!(bound_backend(AuthMethod::SupabaseAuth), Some(Backend::Supabase));
        assert_eq!(bound_backend(AuthMethod::Jwt), None);
        assert_eq!(bound_backend(AuthMethod::Clerk), None);
    }

    #[test]
    fn test_provider_auth_database_matches_backend_database() {
        for auth in AuthMethod::ALL {
            if let Some(backend) = bound_backend(*auth) {
                let db = rules_for(Choice::Auth(*auth)).find_map(|r| match r.target {
                    Choice::Database(db) => Some(db),
                    _ => None,
                });
                assert_eq!(db, fixed_database(backend));
            }
        }
    }

    #[test]
    fn test_rules_never_target_their_trigger_category() {
        for r in AUTO_FILL_RULES {
            assert_ne!(r.trigger.category(), r.target.category());
        }
    }
}
