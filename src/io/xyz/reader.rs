use crate::io::error::Error;
use crate::model::{atom::Atom, geometry::Geometry};
use std::io::BufRead;

const HEADER_LINES: usize = 2;
const MIN_ATOMS: usize = 2;

pub fn read<R: BufRead>(reader: R) -> Result<Geometry, Error> {
    let mut atoms = Vec::new();
    let mut header_seen = 0;

    for (i, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;

        if header_seen < HEADER_LINES {
            header_seen += 1;
            continue;
        }
        if content.trim().is_empty() {
            continue;
        }

        atoms.push(parse_atom(&content, ln)?);
    }

    if header_seen < HEADER_LINES {
        return Err(Error::parse(
            header_seen.max(1),
            "XYZ file must start with a 2-line header",
        ));
    }
    if atoms.len() < MIN_ATOMS {
        return Err(Error::TooFewAtoms { found: atoms.len() });
    }

    Ok(Geometry::new(atoms))
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(Error::parse(
            line_no,
            format!(
                "atom line must contain a symbol and 3 coordinates, found {} column(s)",
                tokens.len()
            ),
        ));
    }

    let x = parse_coordinate(tokens[1], 'x', line_no)?;
    let y = parse_coordinate(tokens[2], 'y', line_no)?;
    let z = parse_coordinate(tokens[3], 'z', line_no)?;

    Ok(Atom::new(tokens[0], [x, y, z]))
}

fn parse_coordinate(token: &str, axis: char, line_no: usize) -> Result<f64, Error> {
    token.parse::<f64>().map_err(|_| {
        Error::parse(
            line_no,
            format!("invalid {axis} coordinate '{token}' in atom line"),
        )
    })
}
