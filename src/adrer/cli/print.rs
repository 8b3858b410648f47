use adrer::api::{CmdMessage, ListedRecord, MessageLevel};
use adrer::config::AdrConfig;
use adrer::record::SEQUENCE_PAD_WIDTH;
use adrer::slug::pad_value;
use adrer::template::TemplateDescriptor;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

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

pub(super) fn print_records(records: &[ListedRecord]) {
    for line in record_lines(records, Utc::now()) {
        println!("{}", line);
    }
}

fn record_lines(records: &[ListedRecord], now: DateTime<Utc>) -> Vec<String> {
    let formatter = Formatter::new();
    records
        .iter()
        .map(|listed| {
            let seq = pad_value(listed.file.sequence, SEQUENCE_PAD_WIDTH);
            let title = listed.title.as_deref().unwrap_or(&listed.file.filename);
            let time_ago = listed
                .file
                .modified
                .map(|m| {
                    let elapsed = now.signed_duration_since(m);
                    formatter.convert(elapsed.to_std().unwrap_or_default())
                })
                .unwrap_or_default();

            let fixed = seq.width() + 2 + 2 + TIME_WIDTH;
            let available = LINE_WIDTH.saturating_sub(fixed);
            let title = truncate_to_width(title, available);
            let padding = " ".repeat(available.saturating_sub(title.width()));

            format!(
                "{}  {}{}  {}",
                seq.yellow(),
                title,
                padding,
                format!("{:>width$}", time_ago, width = TIME_WIDTH).dimmed()
            )
        })
        .collect()
}

pub(super) fn print_templates(templates: &[TemplateDescriptor]) {
    if templates.is_empty() {
        println!("No templates found.");
        return;
    }
    for tpl in templates {
        println!(
            "{}  {} {}",
            tpl.name.bold(),
            format!("id={}", tpl.id).dimmed(),
            format!("format={}", tpl.format).dimmed()
        );
    }
}

pub(super) fn print_config(config: &AdrConfig) {
    for key in AdrConfig::keys() {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key.bold(), value);
    }
    println!("{} = {}", "statuses".bold(), config.statuses.join(", "));
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
