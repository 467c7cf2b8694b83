use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::store::{RecordStore, TEMPLATE_FILE};
use crate::template::DEFAULT_TEMPLATE;

/// Create the store, seed `template.md` from the built-in template (an existing
/// one is never overwritten) and generate the index.
pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    store.ensure_ready()?;
    let mut result = CmdResult::default();

    let template_path = store.path_of(TEMPLATE_FILE);
    if store.list_files()?.iter().any(|f| f == TEMPLATE_FILE) {
        result.add_message(CmdMessage::info(format!(
            "Keeping existing template: {}",
            template_path.display()
        )));
    } else {
        store.write_template(DEFAULT_TEMPLATE)?;
        result.add_message(CmdMessage::success(format!(
            "Template written: {}",
            template_path.display()
        )));
    }

    let count = index::rebuild(store)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized ADR directory ({} records)",
        count
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn seeds_template_and_index() {
        let mut store = InMemoryStore::new();
        run(&mut store).unwrap();
        assert_eq!(store.file(TEMPLATE_FILE), Some(DEFAULT_TEMPLATE));
        assert!(store.index().is_some());
    }

    #[test]
    fn keeps_custom_template() {
        let mut store = InMemoryStore::new().with_file(TEMPLATE_FILE, "mine");
        let result = run(&mut store).unwrap();
        assert_eq!(store.file(TEMPLATE_FILE), Some("mine"));
        assert!(result.messages[0].content.starts_with("Keeping"));
    }
}
