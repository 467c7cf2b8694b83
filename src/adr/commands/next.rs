use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::scan::next_sequence_number;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, number_width: usize) -> Result<CmdResult> {
    let number = next_sequence_number(store, number_width)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Next record number: {}", number)));
    Ok(result.with_next_number(number))
}
