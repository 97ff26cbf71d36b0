//! Terminal approval surface.

use picturebook_error::{PicturebookResult, SurfaceError};
use picturebook_interface::ApprovalSurface;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

/// Whether a typed answer approves a draft.
///
/// Only `yes` approves, ignoring case and surrounding whitespace. Anything
/// else, including `y`, asks for another draft.
///
/// # Examples
///
/// ```
/// use picturebook::is_approval;
///
/// assert!(is_approval(" Yes\n"));
/// assert!(!is_approval("y"));
/// ```
pub fn is_approval(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Approval surface reading answers line by line and printing drafts.
///
/// Generic over its streams so it can be driven from memory; the binary
/// uses [`ConsoleApprovalSurface::stdio`].
#[derive(Debug)]
pub struct ConsoleApprovalSurface<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl ConsoleApprovalSurface<BufReader<Stdin>, Stdout> {
    /// Surface over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> ConsoleApprovalSurface<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    /// Surface over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Recover the output stream.
    pub fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, text: &str) -> PicturebookResult<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| SurfaceError::new("Output stream lock poisoned"))?;
        output
            .write_all(text.as_bytes())
            .and_then(|()| output.flush())
            .map_err(|e| SurfaceError::new(format!("Failed to write output: {}", e)).into())
    }

    fn ask(&self, label: &str) -> PicturebookResult<String> {
        self.write(label)?;

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| SurfaceError::new("Input stream lock poisoned"))?
            .read_line(&mut line)
            .map_err(|e| SurfaceError::new(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Err(SurfaceError::new("Input closed before an answer was given").into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R, W> ApprovalSurface for ConsoleApprovalSurface<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn prompt_text(&self, label: &str) -> PicturebookResult<String> {
        self.ask(label)
    }

    fn show(&self, label: &str, text: &str) -> PicturebookResult<()> {
        self.write(&format!("\n--- {} ---\n{}\n", label, text))
    }

    fn confirm(&self, label: &str) -> PicturebookResult<bool> {
        let answer = self.ask(label)?;
        let approved = is_approval(&answer);

        if approved {
            tracing::debug!(question = label, "Approved");
        } else {
            tracing::debug!(question = label, answer = %answer, "Not approved");
        }

        Ok(approved)
    }
}
