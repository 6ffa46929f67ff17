//! Colored terminal rendering for catalog listings, commands and examples

use crate::catalog::{self, Category, Complexity};
use crate::commands::CommandGroup;
use crate::guide::{ApiExamples, OverviewItem, Role};
use crate::selection::Selection;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

fn complexity_badge(complexity: Complexity) -> ColoredString {
    let label = format!("[{}]", complexity);
    match complexity {
        Complexity::Beginner => label.green(),
        Complexity::Intermediate => label.yellow(),
        Complexity::Advanced => label.red(),
    }
}

/// Options of one category, one per line
pub fn catalog_text(category: Category) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", category.title().cyan().bold());
    for option in catalog::list_options(category) {
        let _ = writeln!(
            out,
            "  {} {:<16} {} {}",
            "->".blue(),
            option.id,
            option.display_name.bold(),
            complexity_badge(option.complexity)
        );
        let _ = writeln!(out, "     {}", option.description.dimmed());
    }
    out
}

/// Command groups with comment lines dimmed
pub fn groups_text(groups: &[CommandGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.label.cyan().bold());
        for line in &group.lines {
            if line.starts_with('#') {
                let _ = writeln!(out, "  {}", line.dimmed());
            } else {
                let _ = writeln!(out, "  {} {}", "$".blue(), line.yellow());
            }
        }
        out.push('\n');
    }
    out
}

/// One row per category, empty categories shown as a dash
pub fn summary_text(selection: &Selection) -> String {
    Category::ORDERED
        .iter()
        .map(|category| {
            let value = selection
                .get(*category)
                .map(|c| c.display_name())
                .unwrap_or("-");
            format!("{:<16} {}", category.title().dimmed(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn overview_text(items: &[OverviewItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Why These Technologies?".cyan().bold());
    for item in items {
        let _ = writeln!(out, "  {:<16} {}", item.label.dimmed(), item.technology.bold());
        let _ = writeln!(out, "  {:<16} {}", "", item.description);
    }
    out
}

/// Required fields and JSON examples for a role
pub fn examples_text(role: Role, examples: &ApiExamples) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        format!("Required fields for {} role:", role).cyan().bold(),
        role.required_fields().join(", ")
    );
    for (title, body) in [
        ("Expected Request JSON", &examples.request),
        ("Sample API Payload", &examples.payload),
        ("Mock API Response", &examples.success_response),
        ("Error Response Example", &examples.error_response),
    ] {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", title.cyan().bold());
        let _ = writeln!(out, "{}", body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AuthMethod;
    use crate::commands::generate;
    use crate::guide::api_examples;

    #[test]
    fn test_catalog_text_lists_every_option() {
        let text = catalog_text(Category::Backend);
        for option in catalog::list_options(Category::Backend) {
            assert!(text.contains(option.id));
        }
    }

    #[test]
    fn test_groups_text_contains_all_lines() {
        let groups = generate(&Selection::with_defaults()).unwrap();
        let text = groups_text(&groups);
        for group in &groups {
            assert!(text.contains(group.label));
            for line in &group.lines {
                assert!(text.contains(line.as_str()));
            }
        }
    }

    #[test]
    fn test_summary_text_marks_missing() {
        colored::control::set_override(false);
        let mut selection = Selection::new();
        selection.choose(Category::Language, "rust").unwrap();
        let rows: Vec<String> = summary_text(&selection)
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        assert_eq!(rows, ["Language Rust", "Backend -", "Database -", "Authentication -"]);
    }

    #[test]
    fn test_summary_text_for_defaults() {
        colored::control::set_override(false);
        let text = summary_text(&Selection::with_defaults());
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().ends_with("JavaScript"));
        assert!(text.contains("Node.js Express"));
        assert!(text.ends_with("JWT"));
    }

    #[test]
    fn test_examples_text_sections() {
        let examples = api_examples(AuthMethod::Jwt, Role::Admin).unwrap();
        let text = examples_text(Role::Admin, &examples);
        assert!(text.contains("department, permissions"));
        assert!(text.contains("Mock API Response"));
        assert!(text.contains("INVALID_CREDENTIALS"));
    }
}
