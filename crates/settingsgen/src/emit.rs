/*
 * emit.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Writing the generated output to its destination.
//!
//! Output is assembled as: before-file, body, validation lines, after-file.
//! Without a destination path it goes to stdout. With one, it is first
//! written to a temporary file next to the destination; the destination is
//! only replaced when the content differs, so an unchanged file keeps its
//! modification time and does not trigger rebuilds.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{GenError, Result};
use crate::output::OutputStore;

const COPY_BLOCK_SIZE: usize = 4096;

/// Where the generated output goes and what surrounds it.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// File copied verbatim before all generated output.
    pub before: Option<PathBuf>,
    /// File copied verbatim after all generated output.
    pub after: Option<PathBuf>,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
}

/// What [`emit`] did with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Output was written to stdout.
    Streamed,
    /// The destination already had identical content and was left alone.
    Unchanged,
    /// The destination was created or replaced.
    Updated,
}

/// Write the complete output as described by `options`.
pub fn emit(
    options: &EmitOptions,
    body: &OutputStore,
    validation: &OutputStore,
) -> Result<EmitOutcome> {
    let Some(destination) = options.output.as_deref() else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_output(options, body, validation, &mut out)?;
        out.flush().map_err(GenError::Write)?;
        return Ok(EmitOutcome::Streamed);
    };

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Created like any ordinary file, so the umask decides its mode.
    let temp = Builder::new()
        .prefix(".settingsgen")
        .make_in(dir, |path| {
            OpenOptions::new().write(true).create_new(true).open(path)
        })
        .map_err(|source| GenError::TempFile {
            path: dir.to_path_buf(),
            source,
        })?;

    {
        let mut out = BufWriter::new(temp.as_file());
        write_output(options, body, validation, &mut out)?;
        out.flush().map_err(GenError::Write)?;
    }

    if files_equal(temp.path(), destination)? {
        tracing::info!(output = %destination.display(), "Output unchanged");
        // Dropping `temp` removes the temporary file.
        return Ok(EmitOutcome::Unchanged);
    }

    let temp_path = temp.path().to_path_buf();
    temp.persist(destination).map_err(|e| GenError::Rename {
        from: temp_path,
        to: destination.to_path_buf(),
        source: e.error,
    })?;
    tracing::info!(output = %destination.display(), "Output updated");
    Ok(EmitOutcome::Updated)
}

/// Write before-file, body, validation lines and after-file to `out`.
pub fn write_output<W: Write + ?Sized>(
    options: &EmitOptions,
    body: &OutputStore,
    validation: &OutputStore,
    out: &mut W,
) -> Result<()> {
    append_file(options.before.as_deref(), out)?;
    body.write_to(out)?;
    validation.write_to(out)?;
    append_file(options.after.as_deref(), out)?;
    Ok(())
}

/// Copy the contents of `path` verbatim to `out`; `None` copies nothing.
pub fn append_file<W: Write + ?Sized>(path: Option<&Path>, out: &mut W) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let mut input = File::open(path).map_err(|source| GenError::OpenCopySource {
        path: path.to_path_buf(),
        source,
    })?;
    io::copy(&mut input, out).map_err(|source| GenError::Copy {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Compare two files byte for byte.
///
/// An `existing` file that cannot be opened (usually because it does not
/// exist yet) simply compares unequal. Failing to open `generated` is an
/// error, since it was just written.
pub fn files_equal(generated: &Path, existing: &Path) -> Result<bool> {
    let Ok(existing_file) = File::open(existing) else {
        return Ok(false);
    };
    let generated_file = File::open(generated).map_err(|source| GenError::OpenGenerated {
        path: generated.to_path_buf(),
        source,
    })?;

    let mut a = BufReader::new(generated_file);
    let mut b = BufReader::new(existing_file);
    let mut buf_a = [0u8; COPY_BLOCK_SIZE];
    let mut buf_b = [0u8; COPY_BLOCK_SIZE];
    loop {
        let len_a = read_block(&mut a, &mut buf_a).map_err(|source| GenError::OpenGenerated {
            path: generated.to_path_buf(),
            source,
        })?;
        let len_b = match read_block(&mut b, &mut buf_b) {
            Ok(len) => len,
            Err(_) => return Ok(false),
        };
        if len_a != len_b || buf_a[..len_a] != buf_b[..len_b] {
            return Ok(false);
        }
        if len_a == 0 {
            return Ok(true);
        }
    }
}

/// Fill `buf` as far as the reader allows, returning the number of bytes read.
fn read_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn store(text: &str) -> OutputStore {
        let mut store = OutputStore::new();
        store.add(text);
        store
    }

    #[test]
    fn test_write_output_order() {
        let temp = TempDir::new().unwrap();
        let before = temp.path().join("before.h");
        let after = temp.path().join("after.h");
        fs::write(&before, "/* before */\n").unwrap();
        fs::write(&after, "/* after */\n").unwrap();

        let options = EmitOptions {
            before: Some(before),
            after: Some(after),
            output: None,
        };
        let mut out = Vec::new();
        write_output(&options, &store("body\n"), &store("check\n"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "/* before */\nbody\ncheck\n/* after */\n"
        );
    }

    #[test]
    fn test_missing_copy_source() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.h");
        let mut out = Vec::new();

        let err = append_file(Some(missing.as_path()), &mut out).unwrap_err();
        assert!(matches!(err, GenError::OpenCopySource { .. }));
        assert!(err.to_string().starts_with("Cannot open file "));
        assert!(err.to_string().ends_with(" for copying"));
    }

    #[test]
    fn test_files_equal() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let missing = temp.path().join("missing");

        let big = "0123456789".repeat(1000);
        fs::write(&a, &big).unwrap();
        fs::write(&b, &big).unwrap();
        assert!(files_equal(&a, &b).unwrap());

        fs::write(&b, format!("{big}!")).unwrap();
        assert!(!files_equal(&a, &b).unwrap());

        assert!(!files_equal(&a, &missing).unwrap());
        assert!(matches!(
            files_equal(&missing, &a),
            Err(GenError::OpenGenerated { .. })
        ));
    }

    #[test]
    fn test_emit_creates_then_keeps_destination() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("table.h");
        let options = EmitOptions {
            output: Some(output.clone()),
            ..Default::default()
        };

        let outcome = emit(&options, &store("int a;\n"), &store("")).unwrap();
        assert_eq!(outcome, EmitOutcome::Updated);
        assert_eq!(fs::read_to_string(&output).unwrap(), "int a;\n");

        let outcome = emit(&options, &store("int a;\n"), &store("")).unwrap();
        assert_eq!(outcome, EmitOutcome::Unchanged);

        let outcome = emit(&options, &store("int b;\n"), &store("")).unwrap();
        assert_eq!(outcome, EmitOutcome::Updated);
        assert_eq!(fs::read_to_string(&output).unwrap(), "int b;\n");

        // Only the destination is left behind.
        let entries = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_emit_uses_ordinary_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let output = temp.path().join("table.h");
        let reference = temp.path().join("reference.h");
        fs::write(&reference, "").unwrap();

        let options = EmitOptions {
            output: Some(output.clone()),
            ..Default::default()
        };
        emit(&options, &store("int a;\n"), &store("")).unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&output), mode(&reference));
    }
}
