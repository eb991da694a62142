//! Owned file handle with stdio-style open modes
//!
//! [`FileStream`] wraps an optional [`File`] so that a stream can be opened,
//! closed and reopened in place, and remembers end-of-file and error state the
//! way a C `FILE*` does. Operations on a closed stream fail with an error.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Origin for [`FileStream::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekMode {
    #[default]
    FromStart,
    FromCurrent,
    FromEnd,
}

/// Parsed `fopen` mode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub truncate: bool,
    pub create: bool,
}

impl OpenMode {
    /// Parse `r`, `w`, `a`, `r+`, `w+` or `a+`, with optional `b`/`t` flags
    pub fn parse(mode: &str) -> io::Result<Self> {
        let base: String = mode.chars().filter(|c| !matches!(c, 'b' | 't')).collect();
        let (read, write, append, truncate, create) = match base.as_str() {
            "r" => (true, false, false, false, false),
            "w" => (false, true, false, true, true),
            "a" => (false, true, true, false, true),
            "r+" => (true, true, false, false, false),
            "w+" => (true, true, false, true, true),
            "a+" => (true, true, true, false, true),
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid open mode: {mode:?}"),
                ))
            }
        };

        Ok(Self {
            read,
            write,
            append,
            truncate,
            create,
        })
    }

    fn options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.read)
            .write(self.write && !self.append)
            .append(self.append)
            .truncate(self.truncate)
            .create(self.create);
        options
    }
}

fn closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "file stream is closed")
}

/// File stream with explicit open/close lifetime
#[derive(Debug, Default)]
pub struct FileStream {
    file: Option<File>,
    name: PathBuf,
    eof: bool,
    error: bool,
}

impl FileStream {
    /// Create a closed stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` with an `fopen`-style mode
    pub fn open(path: impl AsRef<Path>, mode: &str) -> io::Result<Self> {
        let mut stream = Self::new();
        stream.open_in_place(path, mode)?;
        Ok(stream)
    }

    /// Open a file on this stream; the stream must be closed or detached first
    pub fn open_in_place(&mut self, path: impl AsRef<Path>, mode: &str) -> io::Result<()> {
        if self.is_opened() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "close or detach the old file first",
            ));
        }

        let path = path.as_ref();
        let file = OpenMode::parse(mode)?.options().open(path)?;
        debug!("Opened {} ({})", path.display(), mode);
        self.attach(file, path);
        Ok(())
    }

    /// Take ownership of an already open file, closing any current one
    pub fn attach(&mut self, file: File, name: impl Into<PathBuf>) {
        self.file = Some(file);
        self.name = name.into();
        self.eof = false;
        self.error = false;
    }

    /// Give up ownership of the file without closing it
    pub fn detach(&mut self) -> Option<File> {
        self.name.clear();
        self.file.take()
    }

    /// Close the file; closing a closed stream succeeds
    pub fn close(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            trace!("Closed {}", self.name.display());
        }
        Ok(())
    }

    pub fn is_opened(&self) -> bool {
        self.file.is_some()
    }

    /// Path the stream was opened or attached with
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Whether a read hit the end of the file
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Whether a read or write failed
    pub fn error(&self) -> bool {
        self.error
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.file.as_mut().ok_or_else(closed_error)
    }

    /// Read up to `buf.len()` bytes, stopping early only at end of file
    pub fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let file = self.file()?;
        let mut total = 0;
        let mut hit_eof = false;
        let mut failure = None;

        while total < buf.len() {
            match file.read(&mut buf[total..]) {
                Ok(0) => {
                    hit_eof = true;
                    break;
                }
                Ok(n) => total += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        self.eof |= hit_eof;
        match failure {
            Some(e) => {
                self.error = true;
                Err(e)
            }
            None => Ok(total),
        }
    }

    /// Write all of `buf`, returning the number of bytes written
    pub fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.file()?.write_all(buf);
        match result {
            Ok(()) => Ok(buf.len()),
            Err(e) => {
                self.error = true;
                Err(e)
            }
        }
    }

    /// Write a string as UTF-8; writing nothing always succeeds
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        if s.is_empty() {
            return Ok(());
        }
        self.write(s.as_bytes()).map(|_| ())
    }

    /// Read everything from the current position to the end as UTF-8 text
    pub fn read_all(&mut self) -> io::Result<String> {
        let bytes = self.read_all_bytes()?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read everything from the current position to the end
    pub fn read_all_bytes(&mut self) -> io::Result<Vec<u8>> {
        let remaining = self.length()?.saturating_sub(self.tell()?);
        let mut bytes = Vec::with_capacity(remaining as usize);
        let result = self.file()?.read_to_end(&mut bytes);
        match result {
            Ok(_) => {
                self.eof = true;
                Ok(bytes)
            }
            Err(e) => {
                self.error = true;
                Err(e)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Move the file position; returns the new absolute position
    pub fn seek(&mut self, offset: i64, mode: SeekMode) -> io::Result<u64> {
        let target = match mode {
            SeekMode::FromStart => {
                let start = u64::try_from(offset).map_err(|_| {
                    io::Error::new(io::ErrorKind::InvalidInput, "negative seek from start")
                })?;
                SeekFrom::Start(start)
            }
            SeekMode::FromCurrent => SeekFrom::Current(offset),
            SeekMode::FromEnd => SeekFrom::End(offset),
        };

        let position = self.file()?.seek(target)?;
        self.eof = false;
        Ok(position)
    }

    /// Seek relative to the end of the file
    pub fn seek_end(&mut self, offset: i64) -> io::Result<u64> {
        self.seek(offset, SeekMode::FromEnd)
    }

    /// Current file position
    pub fn tell(&mut self) -> io::Result<u64> {
        self.file()?.stream_position()
    }

    /// File length in bytes; the position is left unchanged
    pub fn length(&mut self) -> io::Result<u64> {
        Ok(self.file()?.metadata()?.len())
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        FileStream::read(self, buf)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FileStream::write(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        FileStream::flush(self)
    }
}

impl Seek for FileStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let position = self.file()?.seek(pos)?;
        self.eof = false;
        Ok(position)
    }
}
