use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;
use noodles::fasta::record::Definition;

use crate::errors::{PipelineError, Result};

const RECORD_START: char = '>';
const SAMPLE_TAG_SEPARATOR: char = '_';
const JOINED_SUFFIX: &str = "_joined";

// A single-record FASTA file as read line by line:
// - the header line (marker included)
// - every following line, trimmed, in file order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    pub header: String,
    pub body: Vec<String>,
}

impl SequenceRecord {
    // Reading trims every line and skips any blank lines before the header.
    // The first remaining line must start with '>'.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unreadable = |source: io::Error| match source.kind() {
            io::ErrorKind::NotFound => PipelineError::FileNotFound(path.to_path_buf()),
            _ => PipelineError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        };
        let file = File::open(path).map_err(unreadable)?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(unreadable)?;
            let line = line.trim();
            if lines.is_empty() && line.is_empty() {
                continue;
            }
            lines.push(line.to_string());
        }

        let mut lines = lines.into_iter();
        match lines.next() {
            Some(header) if header.starts_with(RECORD_START) => Ok(Self {
                header,
                body: lines.collect(),
            }),
            _ => Err(PipelineError::Format(path.to_path_buf())),
        }
    }

    // Body lines that are not themselves headers.
    fn sequence_lines(&self) -> impl Iterator<Item = &str> {
        self.body
            .iter()
            .map(String::as_str)
            .filter(|line| !line.starts_with(RECORD_START))
    }
}

/// Both inputs must name files with exactly one '.' and the expected
/// extension. Nothing is opened before this passes.
pub fn check_file_type<P: AsRef<Path>>(path: P, extension: &str) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PipelineError::WrongFileType(path.to_path_buf()))?;
    match file_name.split_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext == extension => Ok(()),
        _ => Err(PipelineError::WrongFileType(path.to_path_buf())),
    }
}

/// Name for the joined record: the first file's name up to the first '.',
/// then up to the first '_' (drops the `_S<n>` sample tag).
///
/// `S501N703_S11.fasta` gives `S501N703`. Sample names must not contain a
/// period or the name is cut short.
pub fn joined_name<P: AsRef<Path>>(path: P) -> String {
    let file_name = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    base.split(SAMPLE_TAG_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Join two single-record FASTA files into `<out_dir>/<name>_joined.<ext>`.
/// Returns the written path.
pub fn join<A, B, O>(path_a: A, path_b: B, out_dir: O, extension: &str) -> Result<PathBuf>
where
    A: AsRef<Path>,
    B: AsRef<Path>,
    O: AsRef<Path>,
{
    let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());
    check_file_type(path_a, extension)?;
    check_file_type(path_b, extension)?;

    let record_a = SequenceRecord::read(path_a)?;
    let record_b = SequenceRecord::read(path_b)?;

    let name = joined_name(path_a);
    let output = out_dir
        .as_ref()
        .join(format!("{name}{JOINED_SUFFIX}.{extension}"));
    debug!(
        "joining {} ({}) and {} ({}) into {}",
        path_a.display(),
        record_a.header,
        path_b.display(),
        record_b.header,
        output.display()
    );

    let mut writer = BufWriter::new(File::create(&output)?);
    write_joined(&mut writer, &name, &record_a, &record_b)?;
    writer.flush()?;
    Ok(output)
}

// One header line, then both bodies written back to back with no newlines,
// as the inputs hold one sequence line per record.
fn write_joined<W: Write>(
    writer: &mut W,
    name: &str,
    first: &SequenceRecord,
    second: &SequenceRecord,
) -> io::Result<()> {
    let definition = Definition::new(name, None);
    writeln!(writer, "{definition}")?;
    for line in first.sequence_lines().chain(second.sequence_lines()) {
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}
