// Property File Parser
// Parses INI-style vehicle configuration files

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::read_text_lossy;

/// Parse a property file string, invoking `handler` for each key-value pair.
///
/// Keys inside a `[Section]` are reported as `Section.Key`; keys before the
/// first header are reported bare. Key case is preserved. `#` and `;` start a
/// comment that runs to the end of the line.
pub fn parse_propfile(data: &str, handler: &mut dyn FnMut(&str, &str)) {
    const NL: u8 = b'\n';
    const EQ: u8 = b'=';
    const OPEN: u8 = b'[';
    const CLOSE: u8 = b']';

    fn is_comment(b: u8) -> bool {
        b == b'#' || b == b';'
    }

    let bytes = data.as_bytes();
    let len = bytes.len();
    let mut i = 0;
    let mut section = String::new();

    let skip_line = |mut i: usize| {
        while i < len && bytes[i] != NL {
            i += 1;
        }
        if i < len {
            i + 1
        } else {
            i
        }
    };

    while i < len {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            break;
        }

        if is_comment(bytes[i]) {
            i = skip_line(i);
            continue;
        }

        if bytes[i] == OPEN {
            let name_start = i + 1;
            let mut j = name_start;
            while j < len && bytes[j] != CLOSE && bytes[j] != NL {
                j += 1;
            }
            if j < len && bytes[j] == CLOSE {
                section = data[name_start..j].trim().to_string();
            } else {
                log::warn!("Unterminated section header");
            }
            i = skip_line(j);
            continue;
        }

        let key_start = i;
        while i < len && bytes[i] != EQ && bytes[i] != NL && !is_comment(bytes[i]) {
            i += 1;
        }

        if i >= len {
            log::warn!("Bare keyword at EOF");
            break;
        }

        if bytes[i] != EQ {
            log::warn!("Key without value");
            i = skip_line(i);
            continue;
        }

        let key = data[key_start..i].trim_end();

        i += 1;
        while i < len && bytes[i] != NL && !is_comment(bytes[i]) && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let value_start = i;
        while i < len && bytes[i] != NL && !is_comment(bytes[i]) {
            i += 1;
        }
        let value = data[value_start..i].trim_end();
        i = skip_line(i);

        if section.is_empty() {
            handler(key, value);
        } else {
            handler(&format!("{}.{}", section, key), value);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("property file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key-value pairs from a property file. Lookups ignore case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyFile {
    properties: HashMap<String, String>,
}

impl PropertyFile {
    /// Load a property file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PropertyError> {
        let path = path.as_ref();
        let data = read_text_lossy(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PropertyError::FileNotFound(path.to_path_buf()),
            _ => PropertyError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(Self::parse(&data))
    }

    pub fn parse(data: &str) -> Self {
        let mut properties = HashMap::new();
        parse_propfile(data, &mut |key, value| {
            properties.insert(key.to_uppercase(), value.to_string());
        });
        PropertyFile { properties }
    }

    /// Get a property value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(data: &str) -> Vec<(String, String)> {
        let mut out = Vec::new();
        parse_propfile(data, &mut |k, v| out.push((k.to_string(), v.to_string())));
        out
    }

    #[test]
    fn test_sections_prefix_keys() {
        let data = "\
Top=1
[EgoVehicle]
SpeedometerInMPH=True
TurnSignalDuration = 3.0
[SteeringWheel]
MaxSteerAngleDeg=450
";
        assert_eq!(
            collect(data),
            vec![
                ("Top".to_string(), "1".to_string()),
                ("EgoVehicle.SpeedometerInMPH".to_string(), "True".to_string()),
                ("EgoVehicle.TurnSignalDuration".to_string(), "3.0".to_string()),
                ("SteeringWheel.MaxSteerAngleDeg".to_string(), "450".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let data = "# header\n; other\n[Hud]\nCharacterLimit=30 ; trailing\nResumeDelay=2.5 # trailing\n";
        assert_eq!(
            collect(data),
            vec![
                ("Hud.CharacterLimit".to_string(), "30".to_string()),
                ("Hud.ResumeDelay".to_string(), "2.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let data = "novalue\n[Broken\nkey=value\nbare";
        assert_eq!(collect(data), vec![("key".to_string(), "value".to_string())]);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(collect("key=\n"), vec![("key".to_string(), String::new())]);
    }

    #[test]
    fn test_lookups_ignore_case() {
        let pf = PropertyFile::parse("[SteeringWheel]\nMaxSteerVelocity=360\n");
        assert_eq!(pf.get("steeringwheel.maxsteervelocity"), Some("360"));
        assert_eq!(pf.get("STEERINGWHEEL.MAXSTEERVELOCITY"), Some("360"));
        assert_eq!(pf.get("SteeringWheel.MaxSteerAngleDeg"), None);
        assert_eq!(pf.len(), 1);
        assert!(!pf.is_empty());
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = PropertyFile::load(dir.path().join("Vehicle.ini")).unwrap_err();
        assert!(matches!(err, PropertyError::FileNotFound(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Vehicle.ini");
        std::fs::write(&path, "[VehicleInputs]\nScaleSteeringDamping=0.6\n").unwrap();
        let pf = PropertyFile::load(&path).unwrap();
        assert_eq!(pf.get("VehicleInputs.ScaleSteeringDamping"), Some("0.6"));
    }
}
