use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::store::{RecordStore, INDEX_FILE};

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let count = index::rebuild(store)?;
    let path = store.path_of(INDEX_FILE);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Index rebuilt ({} records): {}",
        count,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdrError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn rebuilds_index() {
        let mut store = InMemoryStore::new().with_file("adr-001-a.md", "");
        let result = run(&mut store).unwrap();
        assert!(store.index().unwrap().contains("(adr-001-a.md)"));
        assert!(result.messages[0].content.contains("1 records"));
    }

    #[test]
    fn failure_is_fatal_here() {
        let mut store = InMemoryStore::new();
        store.faults.index = true;
        assert!(matches!(
            run(&mut store),
            Err(AdrError::IndexWriteFailed { .. })
        ));
    }
}
