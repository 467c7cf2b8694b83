//! Interactive front end for `record`. Produces the same three inputs the flag
//! form takes; everything after that goes through the same API call.

use adr::api::AdrApi;
use adr::error::{AdrError, Result};
use adr::store::RecordStore;
use console::Term;

pub(super) const STATUS_MENU: [&str; 5] =
    ["Proposed", "Accepted", "Rejected", "Deprecated", "Superseded"];

#[derive(Debug, Default)]
pub(super) struct Answers {
    pub number: String,
    pub status: String,
    pub title: Option<String>,
}

/// Map a menu answer to a status: a menu position (`2`) or any free text.
pub(super) fn parse_status_choice(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=STATUS_MENU.len()).contains(&n) => Some(STATUS_MENU[n - 1].to_string()),
        _ => Some(input.to_string()),
    }
}

fn read(term: &Term, prompt: &str) -> Result<String> {
    if !term.is_term() {
        return Err(AdrError::Api(
            "Interactive mode needs a terminal; pass --number, --status and --title instead"
                .to_string(),
        ));
    }
    term.write_str(prompt)
        .and_then(|_| term.read_line())
        .map(|line| line.trim().to_string())
        .map_err(|e| AdrError::Api(format!("Could not read answer: {}", e)))
}

fn say(term: &Term, line: &str) -> Result<()> {
    term.write_line(line)
        .map_err(|e| AdrError::Api(format!("Could not write prompt: {}", e)))
}

/// Ask for whatever the flags left out. Values already given are kept as-is.
pub(super) fn ask<S: RecordStore>(
    api: &AdrApi<S>,
    number: Option<String>,
    status: Option<String>,
    title: Option<String>,
) -> Result<Answers> {
    let term = Term::stdout();

    let number = match number {
        Some(number) => number,
        None => {
            let next = api
                .next_number()?
                .next_number
                .map(|n| n.to_string())
                .unwrap_or_default();
            let answer = read(&term, &format!("ADR number [{}]: ", next))?;
            if answer.is_empty() {
                next
            } else {
                answer
            }
        }
    };

    let existing = api.find(&number)?;
    if let Some(record) = &existing {
        say(
            &term,
            &format!(
                "Updating {}: {} (status: {})",
                record.filename,
                record.title,
                record.status.as_deref().unwrap_or("none")
            ),
        )?;
    }

    let status = match status {
        Some(status) => status,
        None => {
            for (i, option) in STATUS_MENU.iter().enumerate() {
                say(&term, &format!("  {}) {}", i + 1, option))?;
            }
            loop {
                let answer = read(&term, "Status [1-5 or text]: ")?;
                if let Some(status) = parse_status_choice(&answer) {
                    break status;
                }
            }
        }
    };

    let title = match (title, &existing) {
        (Some(title), _) => Some(title),
        (None, Some(record)) => {
            let answer = read(&term, &format!("Title [{}]: ", record.title))?;
            (!answer.is_empty()).then_some(answer)
        }
        (None, None) => loop {
            let answer = read(&term, "Title: ")?;
            if !answer.is_empty() {
                break Some(answer);
            }
        },
    };

    Ok(Answers {
        number,
        status,
        title,
    })
}
