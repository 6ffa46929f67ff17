//! Charm-style wizard prompts using cliclack

use crate::catalog::{self, Category, Choice};
use crate::commands::{self, CommandGroup};
use crate::guide::{self, ApiExamples, Role};
use crate::preset::{self, Preset};
use crate::render;
use crate::selection::Selection;
use crate::StackError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// CLI arguments for the wizard
#[derive(Debug, Clone, Default)]
pub struct WizardArgs {
    /// Language id to pre-select
    pub language: Option<String>,

    /// Backend id to pre-select
    pub backend: Option<String>,

    /// Database id to pre-select
    pub database: Option<String>,

    /// Auth method id to pre-select
    pub auth: Option<String>,

    /// Start from the default stack
    pub defaults: bool,

    /// Preset file to load before applying flags
    pub preset: Option<PathBuf>,

    /// Role for API examples
    pub role: Option<String>,

    /// Show API examples after the commands
    pub examples: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Print the result as JSON (implies non-interactive)
    pub json: bool,
}

impl WizardArgs {
    fn picks(&self) -> [(Category, Option<&str>); 4] {
        [
            (Category::Language, self.language.as_deref()),
            (Category::Backend, self.backend.as_deref()),
            (Category::Database, self.database.as_deref()),
            (Category::Auth, self.auth.as_deref()),
        ]
    }

    fn interactive(&self) -> bool {
        !self.yes && !self.json
    }
}

/// Machine-readable wizard output
#[derive(Debug, Serialize)]
struct JsonOutput {
    selection: Selection,
    commands: Vec<CommandGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<ApiExamples>,
}

/// Selection built from preset, defaults and flags, plus notices to show
struct Seeded {
    selection: Selection,
    role: Option<Role>,
    notices: Vec<String>,
}

/// Run the wizard with interactive prompts
pub fn run(args: WizardArgs, cli_version: &str) -> Result<()> {
    let seeded = seed_selection(&args, cli_version)?;

    if args.json {
        return print_json(&args, seeded);
    }

    cliclack::intro("stackstart")?;
    for notice in &seeded.notices {
        cliclack::log::info(notice)?;
    }

    let mut selection = seeded.selection;
    let mut role = seeded.role;

    loop {
        if args.interactive() && selection == Selection::new() {
            choose_start_mode(&mut selection)?;
        }

        complete_selection(&mut selection, &args)?;

        cliclack::note("Your Setup", render::summary_text(&selection))?;

        let groups = commands::generate(&selection)?;
        print_commands(&groups);

        if args.examples || (args.interactive() && confirm_examples()?) {
            let role = match role {
                Some(role) => role,
                None => {
                    let picked = select_role(&args)?;
                    role = Some(picked);
                    picked
                }
            };
            show_examples(&selection, role)?;
        }

        if !args.interactive() || !confirm_restart()? {
            break;
        }
        selection.reset();
        role = None;
    }

    cliclack::outro("Happy building!")?;

    Ok(())
}

/// Apply preset, defaults and explicit flags, in that order
fn seed_selection(args: &WizardArgs, cli_version: &str) -> Result<Seeded> {
    let mut selection = Selection::new();
    let mut role = None;
    let mut notices = Vec::new();

    let preset_path = args.preset.clone().or_else(Preset::env_path);
    if let Some(path) = preset_path {
        let preset = Preset::from_path(&path)
            .with_context(|| format!("Failed to load preset {}", path.display()))?;

        if let Some(version) = &preset.version {
            if let Some(warning) = preset::check_compatibility(cli_version, version) {
                notices.push(format!("Version warning: {}", warning));
            }
        }

        let filled = preset.apply(&mut selection)?;
        notices.push(format!("Loaded preset {}", path.display()));
        notices.extend(filled.iter().map(describe_auto_fill));
        role = preset.role()?;
    }

    if args.defaults {
        selection.apply_defaults();
        notices.push("Using the default stack".to_string());
    }

    for (category, id) in args.picks() {
        if let Some(id) = id {
            let filled = selection.choose(category, id)?;
            notices.extend(filled.iter().map(describe_auto_fill));
        }
    }

    if let Some(r) = &args.role {
        role = Some(parse_role(r)?);
    }

    Ok(Seeded {
        selection,
        role,
        notices,
    })
}

fn parse_role(s: &str) -> Result<Role> {
    s.parse().map_err(|_| {
        let available: Vec<String> = Role::iter().map(|r| r.to_string().to_lowercase()).collect();
        anyhow::anyhow!("Unknown role '{}'. Available roles: {}", s, available.join(", "))
    })
}

fn describe_auto_fill(choice: &Choice) -> String {
    format!(
        "{} set to {}",
        choice.category().title(),
        choice.display_name()
    )
}

fn print_json(args: &WizardArgs, seeded: Seeded) -> Result<()> {
    let selection = seeded.selection;
    let commands = commands::generate(&selection)?;

    let examples = match (args.examples, selection.auth()) {
        (true, Some(auth)) => Some(guide::api_examples(auth, seeded.role.unwrap_or_default())?),
        _ => None,
    };

    let output = JsonOutput {
        selection,
        commands,
        examples,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn choose_start_mode(selection: &mut Selection) -> Result<()> {
    let mode: &str = cliclack::select("How would you like to start?")
        .item("explore", "Explore the options", "pick each part yourself")
        .item(
            "default",
            "Recommend a safe default",
            "JavaScript, Node.js Express, PostgreSQL, JWT",
        )
        .interact()?;

    if mode == "default" {
        selection.apply_defaults();
        cliclack::log::success("Using a popular, beginner-friendly setup")?;
    }
    Ok(())
}

/// Prompt for every category that is still empty
fn complete_selection(selection: &mut Selection, args: &WizardArgs) -> Result<()> {
    while let Some(category) = selection.missing().first().copied() {
        if !args.interactive() {
            return Err(StackError::NotReady {
                missing: selection.missing(),
            })
            .context("Pass the missing options as flags or drop --yes");
        }

        let choice = select_option(selection, category)?;
        for filled in selection.apply(choice) {
            cliclack::log::info(describe_auto_fill(&filled))?;
        }
    }
    Ok(())
}

/// Select prompt for one category, hiding options incompatible with the
/// current backend
fn select_option(selection: &Selection, category: Category) -> Result<Choice> {
    let mut hidden = 0;
    let mut items = Vec::new();
    for option in catalog::list_options(category) {
        let choice = Choice::parse(category, option.id)?;
        if selection.is_compatible_choice(choice) {
            items.push((choice, option));
        } else {
            hidden += 1;
        }
    }

    if hidden > 0 {
        if let Some(backend) = selection.backend() {
            cliclack::log::info(format!(
                "{} option(s) hidden as incompatible with {}",
                hidden, backend
            ))?;
        }
    }

    let mut select = cliclack::select(format!("Select a {}", category.title().to_lowercase()));
    for (choice, option) in &items {
        select = select.item(
            *choice,
            option.display_name,
            format!("{} - {}", option.complexity, option.description),
        );
    }

    Ok(select.interact()?)
}

fn print_commands(groups: &[CommandGroup]) {
    // Piped output stays plain so it can be saved as a script
    if !console::Term::stdout().is_term() {
        print!("{}", commands::format_groups(groups));
        return;
    }

    println!();
    println!("  Run these commands in your terminal to set up your project:");
    println!();
    for line in render::groups_text(groups).lines() {
        println!("  {}", line);
    }
}

fn confirm_examples() -> Result<bool> {
    Ok(cliclack::confirm("Show API examples for your auth method?")
        .initial_value(false)
        .interact()?)
}

fn confirm_restart() -> Result<bool> {
    Ok(cliclack::confirm("Start over with a different stack?")
        .initial_value(false)
        .interact()?)
}

fn select_role(args: &WizardArgs) -> Result<Role> {
    if !args.interactive() {
        return Ok(Role::default());
    }

    let mut select = cliclack::select("Select a user role").initial_value(Role::default());
    for role in Role::iter() {
        select = select.item(role, role.to_string(), role.description());
    }
    Ok(select.interact()?)
}

fn show_examples(selection: &Selection, role: Role) -> Result<()> {
    let stack = selection.stack()?;
    let overview = guide::overview(selection)?;
    let examples = guide::api_examples(stack.auth, role)?;

    println!();
    for line in render::overview_text(&overview).lines() {
        println!("  {}", line);
    }
    println!();
    println!(
        "  Examples for your {} authentication flow with the {} role:",
        stack.auth, role
    );
    println!();
    for line in render::examples_text(role, &examples).lines() {
        println!("  {}", line);
    }
    println!();

    Ok(())
}
