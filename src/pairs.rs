use std::{fs, io::BufRead, path::Path};

use log::debug;

use crate::errors::{PipelineError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairEntry {
    pub first: String,
    pub second: String,
}

/// Sample pairs from the config file, in the order their first names were
/// first seen. A repeated first name replaces the earlier pairing.
#[derive(Clone, Debug, Default)]
pub struct PairRegistry {
    entries: Vec<PairEntry>,
}

impl PairRegistry {
    /// Read and parse the config file; a file that cannot be opened or read
    /// is `ConfigNotFound`.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|_| PipelineError::ConfigNotFound(path.to_path_buf()))?;
        Self::load(text.as_bytes())
    }

    /// Parse `FIRST,SECOND` lines. Every line, blank ones included, must
    /// hold a pair.
    pub fn load<R: BufRead>(source: R) -> Result<Self> {
        let mut registry = Self::default();
        for (idx, line) in source.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let (first, second) = line
                .split_once(',')
                .ok_or_else(|| PipelineError::MalformedLine {
                    line: line_no,
                    reason: format!("expected FIRST,SECOND but found {:?}", line.trim()),
                })?;
            let first = validate_name(first.trim(), line_no)?;
            let second = validate_name(second.trim(), line_no)?;
            registry.insert(PairEntry {
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        debug!("loaded {} sample pairs", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, entry: PairEntry) {
        match self.entries.iter_mut().find(|e| e.first == entry.first) {
            Some(existing) => {
                debug!(
                    "{} was paired with {}; now paired with {}",
                    existing.first, existing.second, entry.second
                );
                existing.second = entry.second;
            }
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, first: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.first == first)
            .map(|e| e.second.as_str())
    }

    pub fn entries(&self) -> &[PairEntry] {
        &self.entries
    }

    pub fn firsts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.first.as_str())
    }

    pub fn seconds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.second.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Names become file stems, and the joined name is cut at the first '.',
// so periods are refused here.
fn validate_name(name: &str, line: usize) -> Result<&str> {
    let reason = if name.is_empty() {
        Some("empty name")
    } else if name.contains(',') {
        Some("contains the delimiter ','")
    } else if name.contains('/') || name.contains('\\') {
        Some("contains a path separator")
    } else if name.contains('.') {
        Some("contains a period")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(PipelineError::InvalidName {
            line,
            name: name.to_string(),
            reason,
        }),
        None => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<PairRegistry> {
        PairRegistry::load(text.as_bytes())
    }

    #[test]
    fn names_are_trimmed() {
        let registry = load("  S501N703_S11 ,\tS501N703_S12  \nS2_S1,S2_S2\n").unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.entries()[0],
            PairEntry {
                first: "S501N703_S11".to_string(),
                second: "S501N703_S12".to_string(),
            }
        );
        assert_eq!(registry.get("S2_S1"), Some("S2_S2"));
    }

    #[test]
    fn later_line_wins_for_repeated_first_name() {
        let registry = load("A,B\nX,Y\nA,C\n").unwrap();
        assert_eq!(registry.get("A"), Some("C"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.firsts().collect::<Vec<_>>(), vec!["A", "X"]);
        assert_eq!(registry.seconds().collect::<Vec<_>>(), vec!["C", "Y"]);
    }

    #[test]
    fn line_without_comma_is_malformed() {
        let err = load("A,B\nlonely\n").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = load("A,B\n\nC,D").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedLine { line: 2, .. }));
        let err = load("A,B\n   \n").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        let registry = load("A,B\nC,D\n").unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn bad_names_are_rejected() {
        for text in ["A,", ",B", "A,B,C", "dir/A,B", "A,S1.x"] {
            let err = load(text).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidName { line: 1, .. }),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let err = PairRegistry::load_path("/nonexistent/config1.txt").unwrap_err();
        assert!(matches!(err, PipelineError::ConfigNotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unreadable_config_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let as_dir = dir.path().join("config1.txt");
        fs::create_dir(&as_dir).unwrap();
        let err = PairRegistry::load_path(&as_dir).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigNotFound(_)));

        let not_utf8 = dir.path().join("config2.txt");
        fs::write(&not_utf8, b"A,B\n\xff\xfe,C\n").unwrap();
        let err = PairRegistry::load_path(&not_utf8).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
