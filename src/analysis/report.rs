use std::fmt;
use std::io::{self, Write};

/// One bonded pair, borrowed from the geometry it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondRecord<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub indices: (usize, usize),
    pub distance: f64,
}

impl fmt::Display for BondRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} : {:.3}", self.first, self.second, self.distance)
    }
}

/// Writes one line per record, in the order given.
pub fn write_report<W: Write>(out: &mut W, records: &[BondRecord<'_>]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &'static str, second: &'static str, distance: f64) -> BondRecord<'static> {
        BondRecord {
            first,
            second,
            indices: (0, 1),
            distance,
        }
    }

    #[test]
    fn formats_three_decimals() {
        assert_eq!(record("O", "H", 0.96).to_string(), "O to H : 0.960");
        assert_eq!(record("C", "C", 1.5404).to_string(), "C to C : 1.540");
        assert_eq!(record("C", "H", 1.0996).to_string(), "C to H : 1.100");
    }

    #[test]
    fn writes_lines_in_order() {
        let records = [record("O", "H", 0.96), record("N", "H", 1.01)];
        let mut out = Vec::new();
        write_report(&mut out, &records).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "O to H : 0.960\nN to H : 1.010\n"
        );
    }

    #[test]
    fn no_records_writes_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
