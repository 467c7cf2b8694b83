use adr::api::{CmdMessage, MessageLevel};
use adr::model::{Record, SequenceNumber};
use colored::Colorize;

const STATUS_WIDTH: usize = 12;

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

fn record_line(record: &Record) -> String {
    let number = record
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = record.status.as_deref().unwrap_or("?");
    let date = record
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let previous = record
        .previous_status
        .as_deref()
        .map(|p| format!(" (was {})", p))
        .unwrap_or_default();

    format!(
        "{:>5}  {:<width$} {:<10}  {}{}",
        number,
        status,
        date,
        record.title,
        previous,
        width = STATUS_WIDTH
    )
}

pub(super) fn print_records(records: &[Record]) {
    for record in records {
        let line = record_line(record);
        match record.status.as_deref() {
            Some("Accepted") => println!("{}", line.green()),
            Some("Rejected") | Some("Deprecated") | Some("Superseded") => {
                println!("{}", line.dimmed())
            }
            _ => println!("{}", line),
        }
    }
}

pub(super) fn print_next(number: &SequenceNumber) {
    println!("{}", number);
}
