use serde::{Deserialize, Serialize};

/// Filenames that must all be staged under one folder before an upload
/// can start.
pub const REQUIRED_FILENAMES: [&str; 4] = ["char.json", "data.json", "fr.json", "qa.json"];

/// One staged file: a filename with an optional dataset folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub folder: Option<String>,
    pub filename: String,
}

impl StagedFile {
    pub fn display_name(&self) -> String {
        match &self.folder {
            Some(folder) => format!("{}/{}", folder, self.filename),
            None => self.filename.clone(),
        }
    }
}

/// Outcome of staging one (folder, filename) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Same filename was staged under another folder; the entry was
    /// replaced in place, keeping its position.
    Replaced,
    /// Exact (folder, filename) pair already staged.
    Duplicate,
    /// Not a `.json` name.
    Rejected,
}

/// Insertion-ordered staged file list with a filename-keyed replace rule:
/// at most one entry per filename is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StagedFileSet {
    files: Vec<StagedFile>,
}

impl StagedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, folder: Option<String>, filename: &str) -> AddOutcome {
        let filename = filename.trim();
        if !filename.ends_with(".json") {
            return AddOutcome::Rejected;
        }
        let folder = folder.filter(|f| !f.is_empty());
        if self
            .files
            .iter()
            .any(|f| f.filename == filename && f.folder == folder)
        {
            return AddOutcome::Duplicate;
        }
        if let Some(existing) = self.files.iter_mut().find(|f| f.filename == filename) {
            existing.folder = folder;
            return AddOutcome::Replaced;
        }
        self.files.push(StagedFile {
            folder,
            filename: filename.to_string(),
        });
        AddOutcome::Added
    }

    /// True iff some folder has every required filename staged under it.
    /// Files without a folder never satisfy completeness.
    pub fn is_complete(&self) -> bool {
        if self.files.len() < REQUIRED_FILENAMES.len() {
            return false;
        }
        self.dataset_ids().iter().any(|id| {
            REQUIRED_FILENAMES.iter().all(|required| {
                self.files
                    .iter()
                    .any(|f| f.filename == *required && f.folder.as_deref() == Some(id))
            })
        })
    }

    /// Distinct folders in first-encounter order.
    pub fn dataset_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for file in &self.files {
            if let Some(folder) = &file.folder {
                if !ids.iter().any(|known| known == folder) {
                    ids.push(folder.clone());
                }
            }
        }
        ids
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn display_names(&self) -> Vec<String> {
        self.files.iter().map(StagedFile::display_name).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// Parses a drop payload: `folder|filename` or a bare filename.
pub fn parse_drop_payload(payload: &str) -> Option<(Option<String>, String)> {
    let payload = payload.trim();
    if payload.is_empty() {
        return None;
    }
    match payload.split_once('|') {
        Some((folder, filename)) => Some((Some(folder.to_string()), filename.to_string())),
        None => Some((None, payload.to_string())),
    }
}

/// Splits a picked file name on the first underscore: `folder_filename`.
pub fn parse_picker_name(name: &str) -> (Option<String>, String) {
    match name.split_once('_') {
        Some((folder, filename)) => (Some(folder.to_string()), filename.to_string()),
        None => (None, name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(pairs: &[(&str, &str)]) -> StagedFileSet {
        let mut set = StagedFileSet::new();
        for (folder, filename) in pairs {
            let folder = (!folder.is_empty()).then(|| folder.to_string());
            set.add(folder, filename);
        }
        set
    }

    #[test]
    fn complete_when_one_folder_has_all_required_files() {
        let set = staged(&[
            ("a", "char.json"),
            ("a", "data.json"),
            ("a", "fr.json"),
            ("a", "qa.json"),
        ]);
        assert!(set.is_complete());
    }

    #[test]
    fn incomplete_when_files_spread_over_folders() {
        let set = staged(&[
            ("a", "char.json"),
            ("a", "data.json"),
            ("b", "fr.json"),
            ("b", "qa.json"),
        ]);
        assert!(!set.is_complete());
    }

    #[test]
    fn folderless_files_never_complete_a_dataset() {
        let set = staged(&[
            ("", "char.json"),
            ("", "data.json"),
            ("", "fr.json"),
            ("", "qa.json"),
        ]);
        assert!(!set.is_complete());
        assert!(set.dataset_ids().is_empty());
    }

    #[test]
    fn exact_duplicate_is_a_noop() {
        let mut set = staged(&[("a", "char.json")]);
        assert_eq!(set.add(Some("a".into()), "char.json"), AddOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn same_filename_other_folder_replaces_in_place() {
        let mut set = staged(&[("a", "char.json"), ("a", "data.json")]);
        assert_eq!(set.add(Some("b".into()), "char.json"), AddOutcome::Replaced);
        assert_eq!(set.len(), 2);
        assert_eq!(set.files()[0].folder.as_deref(), Some("b"));
        assert_eq!(set.files()[0].filename, "char.json");
        assert_eq!(set.files()[1].filename, "data.json");
    }

    #[test]
    fn replacement_can_break_and_restore_completeness() {
        let mut set = staged(&[
            ("a", "char.json"),
            ("a", "data.json"),
            ("a", "fr.json"),
            ("a", "qa.json"),
        ]);
        set.add(Some("b".into()), "fr.json");
        assert!(!set.is_complete());
        set.add(Some("a".into()), "fr.json");
        assert!(set.is_complete());
    }

    #[test]
    fn non_json_names_are_rejected() {
        let mut set = StagedFileSet::new();
        assert_eq!(set.add(Some("a".into()), "notes.txt"), AddOutcome::Rejected);
        assert!(set.is_empty());
    }

    #[test]
    fn empty_folder_normalizes_to_none() {
        let mut set = StagedFileSet::new();
        set.add(Some(String::new()), "char.json");
        assert_eq!(set.files()[0].folder, None);
        assert_eq!(set.add(None, "char.json"), AddOutcome::Duplicate);
    }

    #[test]
    fn dataset_ids_keep_first_encounter_order() {
        let set = staged(&[("b", "char.json"), ("a", "data.json"), ("b", "fr.json")]);
        assert_eq!(set.dataset_ids(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn parses_drop_payload_with_folder() {
        assert_eq!(
            parse_drop_payload("a|char.json"),
            Some((Some("a".to_string()), "char.json".to_string()))
        );
        assert_eq!(
            parse_drop_payload("char.json"),
            Some((None, "char.json".to_string()))
        );
        assert_eq!(parse_drop_payload("  "), None);
    }

    #[test]
    fn parses_picker_name_on_first_underscore() {
        assert_eq!(
            parse_picker_name("a_char.json"),
            (Some("a".to_string()), "char.json".to_string())
        );
        assert_eq!(parse_picker_name("char.json"), (None, "char.json".to_string()));
    }

    #[test]
    fn display_names_include_folder_prefix() {
        let set = staged(&[("a", "char.json"), ("", "data.json")]);
        assert_eq!(
            set.display_names(),
            vec!["a/char.json".to_string(), "data.json".to_string()]
        );
    }
}
