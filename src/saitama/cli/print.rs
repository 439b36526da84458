use chrono::{DateTime, Utc};
use colored::Colorize;
use saitama::api::{CmdMessage, MessageLevel, Stats};
use saitama::config::SaitamaConfig;
use saitama::model::Problem;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 44;
const TAGS_WIDTH: usize = 28;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_problem_table(problems: &[Problem]) {
    println!();
    println!(
        "{}{}{}{}",
        pad("ID", ID_WIDTH).bold(),
        pad("NAME", NAME_WIDTH).bold(),
        pad("TAGS", TAGS_WIDTH).bold(),
        format!("{:>width$}", "ADDED", width = TIME_WIDTH).bold()
    );
    println!(
        "{}",
        "-".repeat(ID_WIDTH + NAME_WIDTH + TAGS_WIDTH + TIME_WIDTH).dimmed()
    );

    for (i, p) in problems.iter().enumerate() {
        let tags = if p.tags.is_empty() {
            "none".to_string()
        } else {
            p.tags.join(", ")
        };
        let id = pad(&p.id, ID_WIDTH);
        let name = pad(&p.name, NAME_WIDTH);
        let tags = pad(&tags, TAGS_WIDTH);
        let added = format!(
            "{:>width$}",
            p.date_added.map(format_time_ago).unwrap_or_default(),
            width = TIME_WIDTH
        );

        if i % 2 == 0 {
            println!("{}{}{}{}", id.cyan(), name, tags.green(), added.dimmed());
        } else {
            println!(
                "{}{}{}{}",
                id.bright_cyan(),
                name.bright_white(),
                tags.bright_green(),
                added.dimmed()
            );
        }
    }

    println!();
    println!("{}", format!("Total: {} problems", problems.len()).magenta());
}

pub(super) fn print_picked(problems: &[Problem]) {
    if problems.is_empty() {
        return;
    }
    println!();
    for (i, p) in problems.iter().enumerate() {
        let tags = if p.tags.is_empty() {
            "No tags".to_string()
        } else {
            p.tags.join(" • ")
        };
        println!("{}", format!("{}. {}", i + 1, p.id).bright_yellow());
        println!("   {}", p.name);
        println!("   {}", tags.green());
        if !p.difficulty.is_empty() {
            println!("   {}", p.difficulty.dimmed());
        }
        if !p.url.is_empty() {
            println!("   {}", p.url.blue());
        }
        if let Some(solved) = p.last_solved {
            println!(
                "   {}",
                format!("solved {}x, last {}", p.solve_count, format_time_ago(solved)).dimmed()
            );
        }
        println!();
    }
    println!("{}", "Good luck with your training!".bright_green());
}

pub(super) fn print_tags(tag_counts: &[(String, usize)]) {
    for (tag, count) in tag_counts {
        println!(
            "{} {}",
            pad(tag, 20).bright_yellow(),
            format!("({} problems)", count).green()
        );
    }
}

pub(super) fn print_stats(stats: &Stats) {
    println!("{} {}", "Total problems:".bright_yellow(), stats.total_problems);
    println!("{} {}", "Unique tags:".bright_yellow(), stats.unique_tags);
    println!(
        "{} {:.1}",
        "Average tags per problem:".bright_yellow(),
        stats.average_tags
    );
    println!(
        "{} {} ({} solves)",
        "Solved:".bright_yellow(),
        stats.solved_problems,
        stats.total_solves
    );
    for (difficulty, count) in &stats.by_difficulty {
        println!("  {} {}", pad(difficulty, 10).dimmed(), count);
    }
}

pub(super) fn print_paths(paths: &[(String, PathBuf)]) {
    for (label, path) in paths {
        println!("{} {}", pad(label, 10).dimmed(), path.display());
    }
}

pub(super) fn print_config(config: &SaitamaConfig) {
    for key in SaitamaConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Truncates to `width - 1` columns (with an ellipsis) and pads to `width`.
fn pad(s: &str, width: usize) -> String {
    let max = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    if s.width() <= max {
        out.push_str(s);
        used = s.width();
    } else {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
