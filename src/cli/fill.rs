use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use jobform::{
    Application, Config, Control, FormController, InputKind, OutputFormat, Position, Skill,
    SkillSet, Submission,
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Default, clap::Parser)]
pub struct Fill {
    /// Summary format (defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

impl Fill {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let theme = ColorfulTheme::default();
        let mut prompter = DialoguerPrompter::new(&theme);

        let application = run_form(&mut prompter, |form| {
            eprintln!(
                "\n{}\n",
                format!("Please correct {} field(s) below.", form.errors().len()).error()
            );
        })?;

        println!("\n{}\n", "✅ Application submitted".success());
        super::print_summary(&application, self.output.unwrap_or(config.output))
    }
}

/// Answers one control at a time.
pub trait Prompter {
    /// Asks for a free-text value.
    fn text(&mut self, control: &Control) -> anyhow::Result<String>;

    /// Asks for a position, starting from `current`.
    fn position(&mut self, control: &Control, current: Position) -> anyhow::Result<Position>;

    /// Asks which skills are selected, starting from `current`.
    fn skills(&mut self, control: &Control, current: &SkillSet) -> anyhow::Result<Vec<Skill>>;
}

/// Prompts for every visible control and submits, until the form is accepted.
///
/// `on_rejected` sees the controller after each rejected submit, before the
/// controls are prompted again with their errors.
pub fn run_form<P: Prompter>(
    prompter: &mut P,
    mut on_rejected: impl FnMut(&FormController),
) -> anyhow::Result<Application> {
    let mut form = FormController::new();
    loop {
        fill_controls(&mut form, prompter)?;
        match form.submit() {
            Submission::Accepted(application) => return Ok(application),
            Submission::Rejected(rejected) => {
                on_rejected(&rejected);
                form = rejected;
            }
        }
    }
}

/// Prompts for each visible control in order.
///
/// Controls are rendered again after every answer, so conditional fields
/// appear as soon as a position is chosen.
fn fill_controls<P: Prompter>(form: &mut FormController, prompter: &mut P) -> anyhow::Result<()> {
    let mut index = 0;
    while let Some(control) = form.render().into_iter().nth(index) {
        match control.kind {
            InputKind::Select => {
                let position = prompter.position(&control, form.draft().position)?;
                form.update_field(control.field, position.as_str());
            }
            InputKind::Checkboxes => {
                let selected = prompter.skills(&control, &form.draft().additional_skills)?;
                for skill in Skill::ALL {
                    form.toggle_skill(skill, selected.contains(&skill));
                }
            }
            InputKind::Text
            | InputKind::Email
            | InputKind::Tel
            | InputKind::Number
            | InputKind::DateTime => {
                let value = prompter.text(&control)?;
                form.update_field(control.field, value);
            }
        }
        index += 1;
    }
    Ok(())
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> DialoguerPrompter<'a> {
    pub const fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }

    /// Shows the control's inline error, if any.
    fn annotate(control: &Control) {
        if let Some(error) = &control.error {
            eprintln!("  {}", format!("⚠ {error}").error());
        }
    }
}

impl Prompter for DialoguerPrompter<'_> {
    fn text(&mut self, control: &Control) -> anyhow::Result<String> {
        Self::annotate(control);

        let hint = match control.kind {
            InputKind::Number => " (number)",
            InputKind::DateTime => " (YYYY-MM-DDTHH:MM)",
            _ => "",
        };

        let mut input = Input::<String>::with_theme(self.theme)
            .with_prompt(format!("{}{hint}", control.label))
            .allow_empty(true);
        if !control.value.is_empty() {
            input = input.with_initial_text(control.value.clone());
        }
        Ok(input.interact_text()?)
    }

    fn position(&mut self, control: &Control, current: Position) -> anyhow::Result<Position> {
        Self::annotate(control);

        let labels: Vec<&str> = Position::OPTIONS
            .iter()
            .map(|position| position.option_label())
            .collect();
        let default = Position::OPTIONS
            .iter()
            .position(|position| *position == current)
            .unwrap_or_default();

        let index = Select::with_theme(self.theme)
            .with_prompt(control.label)
            .items(&labels)
            .default(default)
            .interact()?;
        Ok(Position::OPTIONS.get(index).copied().unwrap_or_default())
    }

    fn skills(&mut self, control: &Control, current: &SkillSet) -> anyhow::Result<Vec<Skill>> {
        Self::annotate(control);

        let labels: Vec<&str> = Skill::ALL.iter().map(|skill| skill.as_str()).collect();
        let defaults: Vec<bool> = Skill::ALL
            .iter()
            .map(|skill| current.contains(*skill))
            .collect();

        let chosen = MultiSelect::with_theme(self.theme)
            .with_prompt(control.label)
            .items(&labels)
            .defaults(&defaults)
            .interact()?;
        Ok(chosen
            .into_iter()
            .filter_map(|index| Skill::ALL.get(index).copied())
            .collect())
    }
}
