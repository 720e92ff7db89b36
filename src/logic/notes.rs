use anyhow::Context;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Local note list, kept in its own file under the data directory so it can
/// never collide with the cached session.
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn open() -> anyhow::Result<Self> {
        let pd = ProjectDirs::from("com", "example", "ntc").context("no data dir")?;
        let dir = pd.data_dir();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join("notes.json"),
        })
    }

    pub fn at(dir: &Path) -> Self {
        Self {
            path: dir.join("notes.json"),
        }
    }

    /// Missing or unparseable file reads as an empty list.
    pub fn load(&self) -> Vec<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Append one note, preserving insertion order.
    pub fn add(&self, content: &str) -> anyhow::Result<()> {
        let mut notes = self.load();
        notes.push(content.to_string());
        let raw = serde_json::to_string_pretty(&notes)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

pub fn add(store: &NoteStore, content: String) -> anyhow::Result<()> {
    store.add(&content)?;
    println!("✓ Note added.");
    Ok(())
}

pub fn view(store: &NoteStore) {
    let notes = store.load();
    if notes.is_empty() {
        println!("No notes available.");
        return;
    }
    println!("Notes:");
    for (i, note) in notes.iter().enumerate() {
        println!("{}. {}", i + 1, note);
    }
}
