use anyhow::{Context, Result, anyhow, bail};
use colored::*;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

/// Gives a human the chance to overwrite generated items before the pipeline moves on.
pub trait Reviewer: Send + Sync {
    fn review(&self, label: &str, items: &mut Vec<String>) -> Result<()>;
}

impl<F> Reviewer for F
where
    F: Fn(&str, &mut Vec<String>) -> Result<()> + Send + Sync,
{
    fn review(&self, label: &str, items: &mut Vec<String>) -> Result<()> {
        self(label, items)
    }
}

/// Line-oriented reviewer: lists the items, then repeatedly offers to replace one by its
/// 1-based number until the operator declines.
pub struct ConsoleReviewer<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsoleReviewer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleReviewer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        self.io
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R, W> Reviewer for ConsoleReviewer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn review(&self, label: &str, items: &mut Vec<String>) -> Result<()> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| anyhow!("Reviewer I/O lock poisoned"))?;
        let (input, output) = &mut *guard;

        writeln!(output)?;
        writeln!(output, "{}", format!("📝 {label}").bold())?;
        if items.is_empty() {
            writeln!(output, "   (nothing to review)")?;
            return Ok(());
        }
        print_items(output, items)?;

        loop {
            write!(output, "Edit any of these? [y/N]: ")?;
            output.flush()?;

            let Some(answer) = read_line(input)? else {
                break;
            };
            if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
                break;
            }

            write!(output, "Item number to replace (1-{}): ", items.len())?;
            output.flush()?;
            let raw = read_line(input)?.unwrap_or_default();
            let number = raw
                .parse::<usize>()
                .with_context(|| format!("Invalid item number '{raw}'"))?;
            if number == 0 || number > items.len() {
                bail!(
                    "Item number {} is out of range (1-{})",
                    number,
                    items.len()
                );
            }

            write!(output, "Replacement text: ")?;
            output.flush()?;
            let replacement = read_line(input)?.unwrap_or_default();
            if replacement.is_empty() {
                writeln!(output, "{}", "Empty replacement ignored.".yellow())?;
                continue;
            }

            items[number - 1] = replacement;
            print_items(output, items)?;
        }

        Ok(())
    }
}

fn print_items<W: Write>(output: &mut W, items: &[String]) -> Result<()> {
    for (idx, item) in items.iter().enumerate() {
        writeln!(output, "  [{}] {}", (idx + 1).to_string().cyan(), item)?;
    }
    Ok(())
}

/// `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read reviewer input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reviewer(script: &str) -> ConsoleReviewer<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleReviewer::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn headers() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn replaces_item_by_one_based_number() {
        let reviewer = reviewer("y\n2\nB-revised\nn\n");
        let mut items = headers();

        reviewer.review("Headers", &mut items).unwrap();

        assert_eq!(items, vec!["A", "B-revised", "C"]);
        let (_, output) = reviewer.into_inner();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("B-revised"));
        assert!(transcript.contains("Item number to replace (1-3)"));
    }

    #[test]
    fn supports_several_edits_in_one_session() {
        let reviewer = reviewer("yes\n1\nFirst\nY\n3\nThird\nno\n");
        let mut items = headers();

        reviewer.review("Headers", &mut items).unwrap();

        assert_eq!(items, vec!["First", "B", "Third"]);
    }

    #[test]
    fn declining_leaves_items_untouched() {
        let reviewer = reviewer("n\n");
        let mut items = headers();
        reviewer.review("Headers", &mut items).unwrap();
        assert_eq!(items, headers());
    }

    #[test]
    fn end_of_input_ends_review() {
        let reviewer = reviewer("");
        let mut items = headers();
        reviewer.review("Headers", &mut items).unwrap();
        assert_eq!(items, headers());
    }

    #[test]
    fn non_numeric_index_is_fatal() {
        let reviewer = reviewer("y\ntwo\n");
        let mut items = headers();

        let err = reviewer.review("Headers", &mut items).unwrap_err();

        assert!(err.to_string().contains("Invalid item number 'two'"));
        assert_eq!(items, headers());
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        let reviewer = reviewer("y\n4\n");
        let mut items = headers();

        let err = reviewer.review("Headers", &mut items).unwrap_err();

        assert!(err.to_string().contains("out of range (1-3)"));
    }

    #[test]
    fn empty_replacement_is_ignored() {
        let reviewer = reviewer("y\n1\n\nn\n");
        let mut items = headers();
        reviewer.review("Headers", &mut items).unwrap();
        assert_eq!(items, headers());
    }

    #[test]
    fn closures_act_as_reviewers() {
        let rename_last = |_: &str, items: &mut Vec<String>| -> Result<()> {
            if let Some(last) = items.last_mut() {
                *last = "Z".to_string();
            }
            Ok(())
        };
        let mut items = headers();
        rename_last.review("Headers", &mut items).unwrap();
        assert_eq!(items, vec!["A", "B", "Z"]);
    }
}
