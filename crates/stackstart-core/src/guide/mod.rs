//! Guided setup content: stack overview, user roles and API examples

pub mod examples;

use crate::catalog::Category;
use crate::error::Result;
use crate::selection::Selection;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

pub use examples::{api_examples, ApiExamples};

/// Fields every registration payload carries
const BASE_FIELDS: &[&str] = &["email", "password", "username"];

/// User tier an API example is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Admin,
    #[default]
    User,
    Viewer,
}

impl Role {
    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full access to all features and system settings",
            Role::User => "Standard access with personal data management",
            Role::Viewer => "Read-only access to shared resources",
        }
    }

    /// Registration fields required for this role, base fields first
    pub fn required_fields(&self) -> Vec<&'static str> {
        let extra: &[&str] = match self {
            Role::Admin => &["department", "permissions"],
            Role::User => &["profile_url", "bio"],
            Role::Viewer => &[],
        };
        BASE_FIELDS.iter().chain(extra).copied().collect()
    }
}

/// One row of the "why these technologies" overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewItem {
    pub label: &'static str,
    pub technology: &'static str,
    pub description: &'static str,
}

/// Overview rows for a complete selection, frontend first
pub fn overview(selection: &Selection) -> Result<Vec<OverviewItem>> {
    // Fails early with NotReady rather than rendering blank rows
    selection.stack()?;

    let mut items = vec![OverviewItem {
        label: "Frontend",
        technology: "Next.js",
        description: "Modern React framework with built-in optimization, server components, and API routing.",
    }];
    for category in Category::ORDERED {
        if let Some(choice) = selection.get(category) {
            items.push(OverviewItem {
                label: category.title(),
                technology: choice.display_name(),
                description: choice.description(),
            });
        }
    }
    Ok(items)
}
