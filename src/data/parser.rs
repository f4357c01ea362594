use crate::error::LoadError;

/// What to do with a non-blank line that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail the whole load on the first bad line.
    #[default]
    Abort,
    /// Drop the bad line and keep going.
    Skip,
}

/// Parse one value per line. Lines that are empty after trimming are ignored.
///
/// Line numbers in errors and log events are 1-based and count blank lines,
/// so they match what an editor shows.
pub fn parse_values(text: &str, policy: MalformedPolicy) -> Result<Vec<f64>, LoadError> {
    parse_bytes(text.as_bytes(), policy)
}

/// Same as [`parse_values`], but each line is decoded as UTF-8 on its own.
///
/// A line that is not valid UTF-8 is a malformed value like any other bad
/// line, so `Skip` drops it and the rest of the file still loads.
pub fn parse_bytes(bytes: &[u8], policy: MalformedPolicy) -> Result<Vec<f64>, LoadError> {
    let mut values = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line = idx + 1;
        let parsed = match std::str::from_utf8(raw) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                trimmed.parse::<f64>().map_err(|_| trimmed.to_string())
            }
            Err(_) => Err(String::from_utf8_lossy(raw).trim().to_string()),
        };

        match parsed {
            Ok(v) => values.push(v),
            Err(content) => match policy {
                MalformedPolicy::Abort => {
                    return Err(LoadError::MalformedValue { line, content });
                }
                MalformedPolicy::Skip => {
                    tracing::warn!("Skipping line {}: {:?} is not a number", line, content);
                    skipped += 1;
                }
            },
        }
    }

    if skipped > 0 {
        tracing::info!("Parsed {} values, skipped {} malformed lines", values.len(), skipped);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_ignored() {
        let text = "1.0\n\n2.0\n  \n3.0\n";
        assert_eq!(parse_values(text, MalformedPolicy::Abort).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn accepts_signs_exponents_and_padding() {
        let text = "3.25\n-2\n1e10\n\t  7.5  \r\n";
        assert_eq!(
            parse_values(text, MalformedPolicy::Abort).unwrap(),
            vec![3.25, -2.0, 1e10, 7.5]
        );
    }

    #[test]
    fn empty_text_yields_no_values() {
        assert!(parse_values("", MalformedPolicy::Abort).unwrap().is_empty());
        assert!(parse_values("\n \n\n", MalformedPolicy::Abort).unwrap().is_empty());
    }

    #[test]
    fn abort_reports_first_bad_line() {
        let text = "1.0\n\nabc\nxyz\n";
        match parse_values(text, MalformedPolicy::Abort) {
            Err(LoadError::MalformedValue { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "abc");
            }
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }

    #[test]
    fn skip_drops_only_bad_lines() {
        let text = "1.0\nabc\n2.0\n1,5\n3.0";
        assert_eq!(parse_values(text, MalformedPolicy::Skip).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn undecodable_line_is_malformed() {
        let bytes = b"1\n\xff\n3\n";
        match parse_bytes(bytes, MalformedPolicy::Abort) {
            Err(LoadError::MalformedValue { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedValue, got {other:?}"),
        }
        assert_eq!(parse_bytes(bytes, MalformedPolicy::Skip).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            parse_bytes(b"1\r\n\r\n2\r\n", MalformedPolicy::Abort).unwrap(),
            vec![1.0, 2.0]
        );
    }

    #[test]
    fn one_value_per_line_only() {
        assert!(parse_values("1.0 2.0\n", MalformedPolicy::Abort).is_err());
    }
}
