use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use spatial_dilemma::History;

/// Writes the boards of a tournament to a JSON file.
pub struct Recorder {
    path: PathBuf,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        // A bare file name has an empty parent, i.e. the working directory
        if let Some(directory) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !directory.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", directory.display());
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_history(&self, history: &History) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Could not create '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, history)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Reads a history written by [`Recorder::write_history()`].
pub fn load_history(path: &Path) -> anyhow::Result<History> {
    let file =
        File::open(path).with_context(|| format!("Could not open '{}'", path.display()))?;
    let history = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("'{}' does not contain a valid history", path.display()))?;
    Ok(history)
}
