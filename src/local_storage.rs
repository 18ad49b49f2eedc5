
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use itertools::Itertools;
use tracing::{debug, info, warn};
use crate::config::ReferenceDirectionsConfig;
use crate::error::{Error, Result};
use crate::reference_directions::counter::count_directions;
use crate::reference_directions::ReferenceDirections;

/// Keeps enumerated lattices on disk, one file per `(n_obj, n_sections)`.
///
/// Each line of a file holds one direction as comma-separated values.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStorage {
            dir: dir.into(),
        }
    }

    pub fn path_for(&self, n_obj: usize, n_sections: usize) -> PathBuf {
        self.dir.join(format!("{}_objectives_{}_partition.rd", n_obj, n_sections))
    }

    pub fn contains(&self, n_obj: usize, n_sections: usize) -> bool {
        self.path_for(n_obj, n_sections).exists()
    }

    pub fn load_or_generate(&self, n_obj: usize, n_sections: usize, config: &ReferenceDirectionsConfig) -> Result<ReferenceDirections> {
        let file_path = self.path_for(n_obj, n_sections);

        if file_path.exists() {
            debug!(path = %file_path.display(), "loading stored reference directions");

            let ref_dirs = Self::read_ref_dirs_from_file(&file_path, n_obj)?;

            let expected = count_directions(n_obj, n_sections)?;
            if ref_dirs.len() != expected {
                warn!(path = %file_path.display(), rows = ref_dirs.len(), expected, "stored reference directions are incomplete");

                return Err(Error::Parse(format!(
                    "{} holds {} directions, expected {}",
                    file_path.display(),
                    ref_dirs.len(),
                    expected
                )));
            }

            return Ok(ReferenceDirections::new(n_obj, ref_dirs));
        }

        let ref_dirs = ReferenceDirections::from_sections_with(n_obj, n_sections, config)?;

        self.write_ref_dirs_to_file(&file_path, &ref_dirs)?;

        Ok(ref_dirs)
    }

    fn write_ref_dirs_to_file(&self, file_path: &Path, ref_dirs: &ReferenceDirections) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // another writer may have created the file in the meantime; never truncate it
        let file = match OpenOptions::new().write(true).create_new(true).open(file_path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %file_path.display(), "reference directions already stored");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let mut writer = BufWriter::new(file);
        for ref_dir in ref_dirs {
            writeln!(writer, "{}", ref_dir.iter().join(","))?;
        }
        writer.flush()?;

        info!(path = %file_path.display(), count = ref_dirs.len(), "stored reference directions");

        Ok(())
    }

    fn read_ref_dirs_from_file(file_path: &Path, n_obj: usize) -> Result<Vec<Vec<f64>>> {
        let reader = BufReader::new(File::open(file_path)?);
        let mut ref_dirs = Vec::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let ref_dir = line
                .split(',')
                .map(|value| {
                    value.trim().parse::<f64>().map_err(|err| {
                        Error::Parse(format!("{}:{}: {}", file_path.display(), line_index + 1, err))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            if ref_dir.len() != n_obj {
                return Err(Error::DimensionMismatch {
                    expected: n_obj,
                    actual: ref_dir.len(),
                });
            }

            ref_dirs.push(ref_dir);
        }

        Ok(ref_dirs)
    }
}
