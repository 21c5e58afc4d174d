use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path argument that stands for stdin or stdout.
pub const STDIO_PATH: &str = "-";

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Truncate and overwrite an existing file.
    pub force: bool,
    /// Append to an existing file. Takes precedence over `force`.
    pub append: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("output file {} already exists (use --force or --append)", .0.display())]
    OutputExists(PathBuf),
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>, OpenError> {
    let path = path.as_ref();
    if path == Path::new(STDIO_PATH) {
        debug!("reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    debug!(filename = %path.display(), "reading from file");
    let file = File::open(path).map_err(|source| OpenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn open_output<P: AsRef<Path>>(
    path: P,
    options: OutputOptions,
) -> Result<Box<dyn Write>, OpenError> {
    let path = path.as_ref();
    if path == Path::new(STDIO_PATH) {
        debug!("writing to stdout");
        return Ok(Box::new(io::stdout().lock()));
    }

    let mut open = OpenOptions::new();
    if options.append {
        open.append(true).create(true);
    } else if options.force {
        open.write(true).create(true).truncate(true);
    } else {
        open.write(true).create_new(true);
    }

    let file = open.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            OpenError::OutputExists(path.to_path_buf())
        } else {
            OpenError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(filename = %path.display(), append = options.append, "writing to file");
    Ok(Box::new(BufWriter::new(file)))
}
