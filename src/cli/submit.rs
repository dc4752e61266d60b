use jobform::{Config, Field, FormController, OutputFormat, Position, Skill, Submission};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Submit {
    /// Full name
    #[arg(long, default_value = "")]
    full_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone_number: String,

    /// Position applied for (Developer, Designer or Manager)
    #[arg(long, default_value = "")]
    position: Position,

    /// Years of relevant experience (Developer and Designer)
    #[arg(long, default_value = "")]
    relevant_experience: String,

    /// Portfolio URL (Designer)
    #[arg(long, default_value = "")]
    portfolio_url: String,

    /// Management experience (Manager)
    #[arg(long, default_value = "")]
    management_experience: String,

    /// An additional skill: JavaScript, CSS or Python (repeatable)
    #[arg(long = "skill", value_name = "SKILL")]
    skills: Vec<Skill>,

    /// Preferred interview date and time
    #[arg(long, default_value = "")]
    interview_time: String,

    /// Summary format (defaults to the configured format)
    #[arg(long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

impl Submit {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let format = self.output.unwrap_or(config.output);

        match self.into_form().submit() {
            Submission::Accepted(application) => super::print_summary(&application, format),
            Submission::Rejected(form) => {
                super::print_errors(form.errors(), format)?;
                std::process::exit(1);
            }
        }
    }

    /// Fills a fresh form with the command-line values.
    fn into_form(self) -> FormController {
        let mut form = FormController::new();
        form.update_field(Field::FullName, self.full_name);
        form.update_field(Field::Email, self.email);
        form.update_field(Field::PhoneNumber, self.phone_number);
        form.update_field(Field::Position, self.position.as_str());
        form.update_field(Field::RelevantExperience, self.relevant_experience);
        form.update_field(Field::PortfolioUrl, self.portfolio_url);
        form.update_field(Field::ManagementExperience, self.management_experience);
        for skill in self.skills {
            form.toggle_skill(skill, true);
        }
        form.update_field(Field::InterviewTime, self.interview_time);
        form
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jobform::Summary;

    use super::*;

    fn parse(args: &[&str]) -> Submit {
        Submit::try_parse_from(std::iter::once("submit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_values_gives_six_errors() {
        let Submission::Rejected(form) = parse(&[]).into_form().submit() else {
            panic!("empty submission was accepted");
        };
        assert_eq!(form.errors().len(), 6);
    }

    #[test]
    fn complete_developer_submission_is_accepted() {
        let submit = parse(&[
            "--full-name",
            "Dennis Ritchie",
            "--email",
            "dmr@example.com",
            "--phone-number",
            "555-0164",
            "--position",
            "developer",
            "--relevant-experience",
            "2",
            "--skill",
            "JavaScript",
            "--skill",
            "python",
            "--skill",
            "JavaScript",
            "--interview-time",
            "2024-04-02T15:00",
        ]);

        let Submission::Accepted(application) = submit.into_form().submit() else {
            panic!("complete submission was rejected");
        };
        let summary = Summary::render(&application);
        assert_eq!(summary.get(Field::Position), Some("Developer"));
        assert_eq!(
            summary.get(Field::AdditionalSkills),
            Some("JavaScript, Python")
        );
    }

    #[test]
    fn designer_with_bad_portfolio_is_rejected() {
        let submit = parse(&[
            "--full-name",
            "Susan Kare",
            "--email",
            "susan@example.com",
            "--phone-number",
            "555-0184",
            "--position",
            "Designer",
            "--relevant-experience",
            "10",
            "--portfolio-url",
            "not a url",
            "--skill",
            "css",
            "--interview-time",
            "2024-04-03T09:00",
        ]);

        let Submission::Rejected(form) = submit.into_form().submit() else {
            panic!("bad portfolio was accepted");
        };
        assert_eq!(
            form.errors().iter().collect::<Vec<_>>(),
            [(Field::PortfolioUrl, "Portfolio URL is not valid")]
        );
    }

    #[test]
    fn rejects_unknown_position() {
        let result = Submit::try_parse_from(["submit", "--position", "Intern"]);
        assert!(result.is_err());
    }
}
