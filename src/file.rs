use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::encode;
use crate::error::{Error, Result};
use crate::model::{ObjectKind, SpaceObject};

/// Reads space objects, one per line, in the order they appear.
///
/// Each record looks like `<kind> <radius> <color> <mass> <x> <y> <vx> <vy>`.
/// Blank lines and lines starting with `#` are skipped, and so are records of
/// a kind we don't know about (after a warning). Any other malformed record
/// fails the whole read.
pub fn read(source: impl BufRead) -> Result<Vec<SpaceObject>> {
    let mut objects = vec![];

    for (idx, line) in source.lines().enumerate() {
        let line_number = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(Error::format(line_number, "line is not valid UTF-8"))
            }
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let kind = match ObjectKind::from_token(tokens[0]) {
            Some(kind) => kind,
            None => {
                log::warn!(
                    "Unknown space object {:?} on line {}, skipping it",
                    tokens[0],
                    line_number
                );
                continue;
            }
        };

        objects.push(SpaceObject::from_fields(kind, &tokens[1..], line_number)?);
    }

    Ok(objects)
}

pub fn read_str(text: &str) -> Result<Vec<SpaceObject>> {
    read(text.as_bytes())
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<SpaceObject>> {
    let file = File::open(path.as_ref())?;
    read(BufReader::new(file))
}

/// Writes one record per object, in the same format [`read`] accepts.
pub fn write(mut destination: impl Write, objects: &[SpaceObject]) -> Result<()> {
    for obj in objects {
        writeln!(
            destination,
            "{} {} {} {} {} {} {} {}",
            obj.kind,
            encode(obj.radius),
            obj.color,
            encode(obj.mass),
            encode(obj.position.x),
            encode(obj.position.y),
            encode(obj.velocity.x),
            encode(obj.velocity.y),
        )?;
    }
    destination.flush().map_err(Error::from)
}

pub fn write_file(path: impl AsRef<Path>, objects: &[SpaceObject]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write(BufWriter::new(file), objects)
}
