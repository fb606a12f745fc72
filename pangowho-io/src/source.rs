use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::{GzDecoder, MultiGzDecoder};
use ureq::Error as UreqError;

use crate::error::{Result, SourceError};

///
/// Where a table comes from: a file on disk or an `http(s)` URL.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    ///
    /// Classify a location string. Anything starting with `http://` or `https://` is
    /// fetched, everything else is treated as a path.
    ///
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Remote(location.to_string())
        } else {
            Source::Local(PathBuf::from(location))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }

    ///
    /// Open the source for reading, decompressing it if its name ends in `.gz`.
    ///
    /// Remote sources are downloaded completely before the reader is returned, so a
    /// failed transfer never yields a half-read table.
    ///
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Source::Local(path) => open_local(path),
            Source::Remote(url) => {
                let bytes = fetch_bytes(url)?;
                let cursor = Cursor::new(bytes);

                let reader: Box<dyn Read> = match url.ends_with(".gz") {
                    true => Box::new(GzDecoder::new(cursor)),
                    false => Box::new(cursor),
                };

                Ok(Box::new(BufReader::new(reader)))
            }
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Local(path.to_path_buf())
    }
}

fn open_local(path: &Path) -> Result<Box<dyn BufRead>> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    log::debug!("Reading {}", path.display());

    let file = File::open(path)?;
    let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let reader: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(Box::new(BufReader::new(reader)))
}

///
/// Download a URL into memory.
///
/// # Arguments
/// - url: the URL to fetch
///
/// # Returns
/// - the full response body; any non-success status is an error
///
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    log::debug!("Fetching {}", url);

    let response = match ureq::get(url).call() {
        Ok(resp) => resp,
        Err(UreqError::StatusCode(code)) => {
            return Err(SourceError::HttpStatus {
                url: url.to_string(),
                code,
            });
        }
        Err(e) => {
            return Err(SourceError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            });
        }
    };

    let mut bytes = Vec::new();
    response
        .into_body()
        .into_reader()
        .read_to_end(&mut bytes)?;

    log::debug!("Fetched {} bytes from {}", bytes.len(), url);

    Ok(bytes)
}
