//! Binary PGM (P5) persistence.
//!
//! Grammar accepted by the reader: the `P5` magic, whitespace, then decimal
//! width, height and maxval (1..=255), each of which may be preceded by
//! whitespace and `#` comment lines, then exactly one whitespace byte, then
//! `width * height` raw samples in row-major order. The writer always emits
//! the canonical layout `P5\n<width> <height>\n<maxval>\n<raw bytes>` with no
//! comments.
//!
//! See the format specification: <http://netpbm.sourceforge.net/doc/pgm.html>

use crate::error::{Error, Result};
use crate::image::GrayImage;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read a binary PGM image from disk.
///
/// On failure nothing is leaked: a partially constructed image is dropped and
/// the error keeps the platform `io::Error` when one was involved.
pub fn load(path: &Path) -> Result<GrayImage> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let img = read_from(BufReader::new(file))?;
    debug!(
        "pgm: loaded {}x{} maxval={} from {}",
        img.width(),
        img.height(),
        img.maxval(),
        path.display()
    );
    Ok(img)
}

/// Write `img` to disk as a binary PGM file.
///
/// A failed write may leave a partial file behind, as with any stream writer.
pub fn save(img: &GrayImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut out = BufWriter::new(file);
    write_to(&mut out, img)?;
    out.flush()
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}

/// Decode a binary PGM image from any buffered reader.
pub fn read_from<R: BufRead>(reader: R) -> Result<GrayImage> {
    let mut r = ByteReader::new(reader);

    let magic = [r.next_byte()?, r.next_byte()?];
    if magic != *b"P5" {
        return Err(Error::Format("expected 'P5' magic".into()));
    }

    let width = parse_decimal(&mut r, "width")? as usize;
    let height = parse_decimal(&mut r, "height")? as usize;
    let maxval = parse_decimal(&mut r, "maxval")?;
    if !(1..=255).contains(&maxval) {
        return Err(Error::Format(format!("maxval {maxval} outside 1..=255")));
    }

    // The header ends with exactly one whitespace byte; everything after it
    // is raw sample data, even bytes that happen to look like '#' or digits.
    let sep = r.next_byte()?;
    if !sep.is_ascii_whitespace() {
        return Err(Error::Format("expected whitespace after maxval".into()));
    }

    let mut img = GrayImage::new(width, height, maxval as u8)?;
    r.read_exact(img.pixels_mut())?;
    Ok(img)
}

/// Encode `img` in the canonical P5 layout.
pub fn write_to<W: Write>(mut writer: W, img: &GrayImage) -> Result<()> {
    let wrap = |e| Error::io("Failed to write PGM stream", e);
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.maxval()
    )
    .map_err(wrap)?;
    writer.write_all(img.pixels()).map_err(wrap)
}

/// Byte-level reader with one byte of lookahead for header parsing.
struct ByteReader<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: BufRead> ByteReader<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            let mut buf = [0u8; 1];
            self.peeked = match self.inner.read(&mut buf) {
                Ok(0) => None,
                Ok(_) => Some(buf[0]),
                Err(e) => return Err(Error::io("Failed to read PGM stream", e)),
            };
        }
        Ok(self.peeked)
    }

    fn next_byte(&mut self) -> Result<u8> {
        self.peek_byte()?;
        self.peeked
            .take()
            .ok_or_else(|| Error::Format("unexpected end of file".into()))
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        debug_assert!(self.peeked.is_none(), "lookahead must be drained");
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Error::Format("truncated pixel data".into())
            } else {
                Error::io("Failed to read PGM pixel data", e)
            }
        })
    }
}

/// Skip whitespace and `#`-to-end-of-line comments before a header field.
fn skip_space_and_comments<R: BufRead>(r: &mut ByteReader<R>) -> Result<()> {
    while let Some(b) = r.peek_byte()? {
        if b.is_ascii_whitespace() {
            r.next_byte()?;
        } else if b == b'#' {
            loop {
                match r.peek_byte()? {
                    None => break,
                    Some(b'\n') => {
                        r.next_byte()?;
                        break;
                    }
                    Some(_) => {
                        r.next_byte()?;
                    }
                }
            }
        } else {
            break;
        }
    }
    Ok(())
}

/// Parse a decimal header field, leaving its delimiter unconsumed.
fn parse_decimal<R: BufRead>(r: &mut ByteReader<R>, what: &str) -> Result<u32> {
    skip_space_and_comments(r)?;
    let mut value: u32 = 0;
    let mut digits = 0usize;
    while let Some(b) = r.peek_byte()? {
        if !b.is_ascii_digit() {
            break;
        }
        r.next_byte()?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .ok_or_else(|| Error::Format(format!("{what} out of range")))?;
        digits += 1;
    }
    if digits == 0 {
        return Err(Error::Format(format!("invalid {what}")));
    }
    Ok(value)
}
