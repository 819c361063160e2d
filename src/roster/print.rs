use colored::Colorize;
use roster::commands::{CmdMessage, MessageLevel};
use roster::model::Person;
use unicode_width::UnicodeWidthChar;

const NAME_WIDTH: usize = 24;
const TEAM_WIDTH: usize = 18;

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

pub(super) fn print_persons(persons: &[Person]) {
    for (i, person) in persons.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        let name = pad_to_width(person.name().as_str(), NAME_WIDTH);
        let team = pad_to_width(person.team().as_str(), TEAM_WIDTH);
        let position = format!("{:<4}", person.position().as_str());
        let tags: String = person.tags().iter().map(|t| format!("[{}]", t)).collect();

        println!(
            "{}{}{}{}{}  {}  {}",
            idx.yellow(),
            name.bold(),
            team,
            position.cyan(),
            person.email(),
            person.phone().as_str().dimmed(),
            tags.cyan()
        );
    }
}

/// Truncates or pads `s` so it takes exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width.saturating_sub(2) {
            result.push('…');
            current_width += 1;
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
