use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::industry::{self, INDUSTRIES};
use crate::selection::Selection;

use super::client::CaseStudySource;
use super::clipboard::Osc52Clipboard;
use super::state::{Studio, StudioError, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pick(usize),
    Custom(String),
    Generate,
    Copy,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Ok(position) = line.parse::<usize>() {
            return Self::Pick(position);
        }
        if let Some(rest) = line.strip_prefix("c ").or_else(|| line.strip_prefix("custom ")) {
            return Self::Custom(rest.trim().to_string());
        }
        match line {
            "c" | "custom" => Self::Custom(String::new()),
            "g" | "generate" => Self::Generate,
            "y" | "copy" => Self::Copy,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub async fn run(source: &dyn CaseStudySource) -> anyhow::Result<()> {
    let mut studio = Studio::new();
    let mut clipboard = Osc52Clipboard::stdout();
    let stdin = io::stdin();

    render_header();
    render(&studio);

    loop {
        print!("{} ", ">".bright_purple().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Pick(position) => match industry::by_position(position) {
                Some(choice) => studio.select_industry(choice.tag),
                None => {
                    println!("{}", format!("No industry #{position}").yellow());
                    continue;
                }
            },
            Command::Custom(text) => studio.set_custom_brand(&text),
            Command::Generate => {
                if studio.can_generate() {
                    println!("{}", "✨ Creating your case study...".bright_purple());
                }
                if let Err(StudioError::Busy) = studio.generate(source).await {
                    continue;
                }
            }
            Command::Copy => {
                if studio.copy_result(&mut clipboard)? {
                    println!("{}", "Case study copied to clipboard!".green());
                } else {
                    println!("{}", "Nothing to copy yet.".dimmed());
                }
                continue;
            }
            Command::Help => {
                render_help();
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                if !input.is_empty() {
                    println!("{}", format!("Unknown command: {input}").yellow());
                    render_help();
                }
                continue;
            }
        }

        render(&studio);
    }

    Ok(())
}

fn render_header() {
    println!("{}", "Brand Case Study Generator".bright_purple().bold());
    println!("Create detailed, artistic branding case studies for your portfolio.");
    println!("{}\n", "Every brand begins with a feeling.".italic());
}

fn render_help() {
    println!(
        "{}",
        "1-8 pick an industry · c <text> custom brand type · g generate · y copy · q quit".dimmed()
    );
}

fn render(studio: &Studio) {
    println!("\n{}", "Choose Your Industry".bold());
    for (i, option) in INDUSTRIES.iter().enumerate() {
        let label = format!("{} {}", option.emoji, option.label);
        let selected = matches!(studio.selection(), Selection::Industry(tag) if tag == option.tag);
        if selected {
            println!("  {} {}", format!("[{}]", i + 1).bright_purple().bold(), label.bold());
        } else {
            println!("  {} {}", format!(" {} ", i + 1).dimmed(), label);
        }
    }

    match studio.selection() {
        Selection::Custom(text) => println!("Or enter a custom brand type: {}", text.bold()),
        _ => println!(
            "Or enter a custom brand type: {}",
            "e.g., organic tea brand, jewelry studio, design agency...".dimmed()
        ),
    }

    if studio.can_generate() {
        println!("{}", "🚀 Generate Case Study (g)".green().bold());
    } else {
        println!("{}", "🚀 Generate Case Study (g)".dimmed());
    }

    match studio.view() {
        ViewState::Failed { message } => println!("{}", message.red().bold()),
        ViewState::Done { case_study } if !case_study.is_empty() => {
            println!("\n{}", "Your Case Study".bold().underline());
            println!("{case_study}\n");
            println!("{}", "📋 Copy to Clipboard (y)".dimmed());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("3\n"), Command::Pick(3));
        assert_eq!(
            Command::parse("c organic tea brand"),
            Command::Custom("organic tea brand".to_string())
        );
        assert_eq!(Command::parse("custom"), Command::Custom(String::new()));
        assert_eq!(Command::parse(" g "), Command::Generate);
        assert_eq!(Command::parse("y"), Command::Copy);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
    }
}
