//! rofi dmenu invocation.
//!
//! Both interactive tools drive rofi the same way: feed newline-separated
//! entries to `rofi -dmenu`, read the selection from stdout.  A dismissed
//! menu (escape, or a non-zero rofi exit) is `None`, not an error — only a
//! failure to launch rofi at all is reported.

use std::io::Write;
use std::process::{Command, Stdio};

/// Error launching or talking to rofi.
#[derive(Debug, thiserror::Error)]
#[error("cannot run rofi: {0}")]
pub struct RofiError(#[from] std::io::Error);

/// Show a dmenu of `lines` and return the selected line.
pub fn select(
    prompt: &str,
    lines: &[String],
    extra_args: &[&str],
) -> Result<Option<String>, RofiError> {
    run(prompt, lines, extra_args, false)
}

/// Show a dmenu of `lines` and return the selected *index*
/// (`rofi -format i`).  Out-of-range or unparsable output is `None`.
pub fn select_index(
    prompt: &str,
    lines: &[String],
    extra_args: &[&str],
) -> Result<Option<usize>, RofiError> {
    let picked = run(prompt, lines, extra_args, true)?;
    Ok(picked.and_then(|s| parse_index(&s, lines.len())))
}

fn run(
    prompt: &str,
    lines: &[String],
    extra_args: &[&str],
    index_mode: bool,
) -> Result<Option<String>, RofiError> {
    let mut cmd = Command::new("rofi");
    cmd.args(["-dmenu", "-i", "-p", prompt]);
    if index_mode {
        cmd.args(["-format", "i"]);
    }
    cmd.args(extra_args);
    cmd.stdin(Stdio::piped()).stdout(Stdio::piped());

    let mut child = cmd.spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        // A write error here means rofi exited early; treated as dismissal.
        let _ = stdin.write_all(menu_input(lines).as_bytes());
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Ok(None);
    }
    let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if selection.is_empty() {
        Ok(None)
    } else {
        Ok(Some(selection))
    }
}

fn menu_input(lines: &[String]) -> String {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    input
}

fn parse_index(s: &str, len: usize) -> Option<usize> {
    s.parse::<usize>().ok().filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_input_is_newline_terminated() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(menu_input(&lines), "a\nb\n");
        assert_eq!(menu_input(&[]), "");
    }

    #[test]
    fn parse_index_bounds() {
        assert_eq!(parse_index("0", 3), Some(0));
        assert_eq!(parse_index("2", 3), Some(2));
        assert_eq!(parse_index("3", 3), None);
        assert_eq!(parse_index("-1", 3), None);
        assert_eq!(parse_index("x", 3), None);
    }
}
