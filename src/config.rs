use std::path::{Path, PathBuf};

/// Which of the two region references a sample is generated against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// First region (HVR-I); used for the first name on each config line.
    Primary,
    /// Second region (HVR-II); used for the second name on each config line.
    Secondary,
}

// Run-wide settings. Built once in main and handed to every component;
// nothing else in the crate holds paths or program names.
#[derive(Clone, Debug)]
pub struct Settings {
    pub config_path: PathBuf,
    pub primary_reference: PathBuf,
    pub secondary_reference: PathBuf,
    pub program: String,
    pub memory_limit: String,
    pub jar: PathBuf,
    pub tool: String,
    pub extension: String,
    pub variant_extension: String,
    pub work_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config1.txt"),
            primary_reference: PathBuf::from("HVRI.fasta"),
            secondary_reference: PathBuf::from("HVRII.fasta"),
            program: "java".to_string(),
            memory_limit: "-Xmx2g".to_string(),
            jar: PathBuf::from("GenomeAnalysisTK.jar"),
            tool: "FastaAlternateReferenceMaker".to_string(),
            extension: "fasta".to_string(),
            variant_extension: "vcf".to_string(),
            work_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Default settings with every file resolved against `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            config_path: dir.join(&defaults.config_path),
            work_dir: dir.to_path_buf(),
            ..defaults
        }
    }

    pub fn reference(&self, kind: ReferenceKind) -> &Path {
        match kind {
            ReferenceKind::Primary => &self.primary_reference,
            ReferenceKind::Secondary => &self.secondary_reference,
        }
    }

    /// `<work_dir>/<sample>.fasta`
    pub fn sequence_path(&self, sample: &str) -> PathBuf {
        self.work_dir.join(format!("{sample}.{}", self.extension))
    }

    /// `<work_dir>/<sample>.vcf`
    pub fn variant_path(&self, sample: &str) -> PathBuf {
        self.work_dir.join(format!("{sample}.{}", self.variant_extension))
    }
}
