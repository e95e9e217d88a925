use crate::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::path::Path;

/// Compute the name a file is stored under inside the archive.
///
/// Prefix precedence: the coordinator data directory override when set
/// (entry names stay relative to it regardless of which source resolved the
/// walk root), otherwise the walk base, otherwise just the file name. Stored
/// names never carry a leading slash, so extraction stays relative.
pub fn entry_name(path: &Path, base: &Path, coordinator_dir: Option<&str>) -> String {
    let full = path.to_string_lossy().into_owned();

    let name = if let Some(dir) = coordinator_dir.filter(|dir| !dir.is_empty()) {
        full.strip_prefix(dir).unwrap_or(&full).to_string()
    } else if !base.as_os_str().is_empty() {
        let base = base.to_string_lossy();
        full.strip_prefix(base.as_ref()).unwrap_or(&full).to_string()
    } else {
        match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => full,
        }
    };

    name.trim_start_matches('/').to_string()
}

/// Write side of a collection run: the output file wrapped in a gzip stream
/// wrapped in a tar container. Owns all three layers for its lifetime.
pub struct LogArchive {
    builder: tar::Builder<GzEncoder<File>>,
}

impl LogArchive {
    /// Create (or overwrite) the archive at `path` and set up the layered
    /// writer stack.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        let encoder = GzEncoder::new(file, Compression::default());
        Ok(Self {
            builder: tar::Builder::new(encoder),
        })
    }

    /// Stream one file into the archive under `name`, carrying the source
    /// file's size, permissions, and modification time in the entry header.
    /// Content is copied straight from the open file handle, so entry size
    /// is not bounded by memory.
    pub fn append_file(&mut self, path: &Path, name: &str) -> Result<()> {
        let mut file = File::open(path)?;
        let metadata = file.metadata()?;

        let mut header = tar::Header::new_gnu();
        header.set_metadata(&metadata);

        self.builder.append_data(&mut header, name, &mut file)?;

        println!("  - Archived {}", path.display());
        Ok(())
    }

    /// Close the layers innermost-first: the tar trailer must pass through
    /// the gzip layer before the gzip trailer reaches the file. Closing out
    /// of order corrupts the archive.
    pub fn finish(self) -> Result<()> {
        let encoder = self.builder.into_inner()?;
        encoder.finish()?;
        Ok(())
    }
}
