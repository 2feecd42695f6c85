// crates/classlist-cli/src/services/render.rs - Terminal output
//
// Formatting for people, command results and the grade summary. Functions
// that build strings are kept separate from the ones that print, so the
// layout can be tested without a terminal.
//
// Color is switched globally through `console`: once disabled, every
// `style(...)` renders as plain text.

use console::style;

use classlist_core::commands::{self, Attachment, CommandResult};
use classlist_core::{Grade, GradeDistribution, Person};

/// Color preference after combining config and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `--no-color` wins over the configured value
    pub fn resolve(configured: &str, no_color: bool) -> Self {
        if no_color {
            return Self::Never;
        }
        match configured {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

pub struct Renderer {
    weak_threshold: Grade,
}

impl Renderer {
    pub fn new(choice: ColorChoice, weak_threshold: Grade) -> Self {
        match choice {
            ColorChoice::Always => {
                console::set_colors_enabled(true);
                console::set_colors_enabled_stderr(true);
            }
            ColorChoice::Never => {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
            // console already detects terminals and NO_COLOR on its own
            ColorChoice::Auto => {}
        }
        Self { weak_threshold }
    }

    /// One numbered line per person, with the remark underneath
    pub fn person_line(&self, position: usize, person: &Person) -> String {
        let grade = if person.is_weak(self.weak_threshold) {
            style(format!("{:<2}", person.grade().as_str())).red().bold()
        } else {
            style(format!("{:<2}", person.grade().as_str())).green()
        };
        let groups: String = person
            .groups()
            .iter()
            .map(|group| format!(" [{group}]"))
            .collect();

        let mut line = format!(
            "{position:>3}. {}  {}  {}  {}{}",
            style(person.name()).bold(),
            person.student_id(),
            grade,
            person.email(),
            style(groups).cyan(),
        );
        if !person.remark().is_empty() {
            line.push_str(&format!("\n     {}", style(person.remark()).dim()));
        }
        line
    }

    pub fn person_list(&self, persons: &[&Person]) -> String {
        if persons.is_empty() {
            return style("(no students)").dim().to_string();
        }
        persons
            .iter()
            .enumerate()
            .map(|(i, person)| self.person_line(i + 1, person))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Horizontal bar per grade, best grade first
    pub fn distribution_chart(&self, distribution: &GradeDistribution) -> String {
        let widest = distribution
            .counts()
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);
        let scale = if widest > 40 { widest.div_ceil(40) } else { 1 };

        let mut lines: Vec<String> = distribution
            .counts()
            .iter()
            .rev()
            .map(|(grade, count)| {
                let bar = "#".repeat(count.div_ceil(scale));
                let bar = if grade <= &self.weak_threshold {
                    style(bar).red()
                } else {
                    style(bar).green()
                };
                format!("{:<2} | {bar} {count}", grade.as_str())
            })
            .collect();
        lines.push(format!("total: {}", distribution.total()));
        lines.join("\n")
    }

    pub fn usage(&self) -> String {
        commands::usage()
            .into_iter()
            .map(|line| match line.split_once("  ") {
                Some((syntax, description)) => {
                    format!("  {}\n      {description}", style(syntax).bold())
                }
                None => format!("  {line}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Feedback plus whatever the result asks the front end to show
    pub fn print_result(&self, result: &CommandResult, persons: &[&Person]) {
        println!("{}", style(&result.feedback).green());
        if result.show_help {
            println!("{}", self.usage());
        }
        if result.show_popup()
            && let Some(Attachment::GradeDistribution(distribution)) = &result.attachment
        {
            println!("{}", self.distribution_chart(distribution));
        }
        if result.listing.is_some() {
            println!("{}", self.person_list(persons));
        }
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {message}", style("error:").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classlist_core::{Email, Group, Model, Name, Remark, Roster, StudentId};
    use std::collections::BTreeSet;

    fn plain() -> Renderer {
        Renderer::new(ColorChoice::Never, Grade::C)
    }

    fn alice(remark: &str) -> Person {
        Person::new(
            Name::parse("Alice Pauline").unwrap(),
            StudentId::parse("A0000000A").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Grade::BPlus,
            BTreeSet::from([Group::parse("Group 1").unwrap()]),
            Remark::new(remark),
        )
    }

    #[test]
    fn test_color_choice() {
        assert_eq!(ColorChoice::resolve("always", true), ColorChoice::Never);
        assert_eq!(ColorChoice::resolve("always", false), ColorChoice::Always);
        assert_eq!(ColorChoice::resolve("auto", false), ColorChoice::Auto);
    }

    #[test]
    fn test_person_line() {
        let line = plain().person_line(1, &alice(""));
        assert_eq!(
            line,
            "  1. Alice Pauline  A0000000A  B+  alice@example.com [Group 1]"
        );
    }

    #[test]
    fn test_person_line_with_remark() {
        let line = plain().person_line(2, &alice("likes maths"));
        assert!(line.ends_with("\n     likes maths"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(plain().person_list(&[]), "(no students)");
    }

    #[test]
    fn test_distribution_chart() {
        let model = Model::new(
            Roster::from_persons(vec![alice("")]).unwrap(),
            Roster::new(),
            Default::default(),
        );
        let chart = plain().distribution_chart(&model.grade_distribution());
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), Grade::ALL.len() + 1);
        assert_eq!(lines[0], "A+ |  0");
        assert!(lines.contains(&"B+ | # 1"));
        assert_eq!(lines.last(), Some(&"total: 1"));
    }

    #[test]
    fn test_usage_lists_every_command() {
        let usage = plain().usage();
        assert!(usage.contains("add n/NAME"));
        assert!(usage.contains("exit"));
    }
}
