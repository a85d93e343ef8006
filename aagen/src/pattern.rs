//! Random input patterns for simulating a netlist.
//!
//! A pattern file holds one pattern per line, each a string of `0`/`1` characters, one per primary input.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};

/// The shape of a pattern file to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternParams {
    /// Bits per pattern; the number of primary inputs.
    pub width: usize,
    /// Number of patterns.
    pub count: usize,
}

/// A set of equal-width bit patterns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternSet {
    width: usize,
    rows: Vec<Vec<bool>>,
}

/// Draws `params.count` patterns of `params.width` uniform random bits.
pub fn generate<R: Rng>(params: &PatternParams, rng: &mut R) -> PatternSet {
    log::debug!("generating {} patterns of width {}", params.count, params.width);
    let rows = (0..params.count)
        .map(|_| (0..params.width).map(|_| rng.gen_bool(0.5)).collect::<Vec<bool>>())
        .collect::<Vec<_>>();
    PatternSet { width: params.width, rows }
}

/// Reads a pattern file, checking every line is exactly `width` characters of `0` and `1`.
///
/// # Errors
///
/// Returns [`Error::Malformed`] naming the first bad line, or [`Error::Io`] if reading fails.
pub fn read_patterns<R: BufRead>(reader: R, width: usize) -> Result<PatternSet> {
    let mut rows = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;

        let row = line
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                c => Err(Error::Malformed(format!("pattern {} ({:?}) contains {:?}", number + 1, line, c))),
            })
            .collect::<Result<Vec<bool>>>()?;

        if row.len() != width {
            return Err(Error::Malformed(format!(
                "pattern {} ({:?}) has length {}, expected {}",
                number + 1,
                line,
                row.len(),
                width
            )));
        }

        rows.push(row);
    }

    Ok(PatternSet { width, rows })
}

impl PatternSet {
    /// Bits per pattern.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes one `0`/`1` line per pattern.
    #[allow(clippy::missing_errors_doc)]
    pub fn write<W: Write>(&self, mut w: W) -> io::Result<()> {
        for row in &self.rows {
            let line = row.iter().map(|&bit| if bit { '1' } else { '0' }).collect::<String>();
            writeln!(w, "{}", line)?;
        }
        Ok(())
    }

    /// Creates (or truncates) `path` and writes the patterns to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        self.write(&mut w)?;
        w.flush()?;
        log::info!("wrote {} patterns to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{generate, read_patterns, PatternParams};
    use crate::error::Error;
    use crate::rng::FixtureRng;

    use rand::SeedableRng;

    fn render(width: usize, count: usize, seed: u64) -> String {
        let mut rng = FixtureRng::seed_from_u64(seed);
        let mut out = Vec::new();
        generate(&PatternParams { width, count }, &mut rng).write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn four_by_five() {
        let text = render(4, 5, 9);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 4));
        assert!(text.chars().all(|c| c == '0' || c == '1' || c == '\n'));
    }

    #[test]
    fn both_bits_appear() {
        let text = render(64, 16, 0);
        assert!(text.contains('0'));
        assert!(text.contains('1'));
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(render(0, 3, 0), "\n\n\n");
        assert_eq!(render(8, 0, 0), "");
    }

    #[test]
    fn read_back() {
        let text = render(7, 11, 5);
        let set = read_patterns(text.as_bytes(), 7).unwrap();
        assert_eq!(set.width(), 7);
        assert_eq!(set.len(), 11);

        let mut out = Vec::new();
        set.write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn read_rejects_wrong_width() {
        let err = read_patterns("0101\n011\n".as_bytes(), 4).unwrap_err();
        assert!(matches!(err, Error::Malformed(msg) if msg.starts_with("pattern 2")));
    }

    #[test]
    fn read_names_multibyte_characters() {
        let err = read_patterns("0\u{e9}1\n".as_bytes(), 3).unwrap_err();
        assert!(matches!(err, Error::Malformed(msg) if msg.contains("contains '\u{e9}'")));

        let err = read_patterns("01\r1\n".as_bytes(), 3).unwrap_err();
        assert!(matches!(err, Error::Malformed(msg) if msg.contains("contains '\\r'")));
    }

    #[test]
    fn read_accepts_crlf_line_endings() {
        let set = read_patterns("01\r\n10\r\n".as_bytes(), 2).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn read_rejects_stray_characters() {
        let err = read_patterns("01x1\n".as_bytes(), 4).unwrap_err();
        assert!(matches!(err, Error::Malformed(msg) if msg.contains("'x'")));
    }
}
