use crate::utils::path::normalize_file_path;
use lazy_static::*;
use regex::Regex;

lazy_static! {
    // `    at fn (/repo/src/a.js:10:5)`
    static ref NODE_FRAME_REGEX: Regex =
        Regex::new(r"\((.*):(\d+):\d+\)$").expect("Regex compilation error");
    // `    at /repo/src/a.js:10:5`
    static ref NODE_BARE_FRAME_REGEX: Regex =
        Regex::new(r"^\s*at (?:async )?([^\s()]+):(\d+):\d+$").expect("Regex compilation error");
    // `  File "/repo/steps/a.py", line 12, in step_impl`
    static ref PYTHON_FRAME_REGEX: Regex =
        Regex::new(r#"^\s*File "(.+)", line (\d+)"#).expect("Regex compilation error");
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceLocation {
    pub path: String,
    pub line: u32,
}

fn frame(line: &str) -> Option<(&str, &str)> {
    [&*NODE_FRAME_REGEX, &*NODE_BARE_FRAME_REGEX, &*PYTHON_FRAME_REGEX]
        .iter()
        .find_map(|regex| regex.captures(line))
        .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
}

/// Finds the first stack frame pointing into a tracked file.
pub fn exception_source<F>(
    stack: &str,
    tracked_files: &[String],
    mut relative: F,
) -> Option<SourceLocation>
where
    F: FnMut(&str) -> String,
{
    for line in stack.lines() {
        let (file, line_number) = match frame(line) {
            Some(frame) => frame,
            None => continue,
        };
        let file = normalize_file_path(file);
        if file.starts_with("internal/") || file.contains("/node_modules/") {
            continue;
        }
        let path = relative(&file);
        if path.is_empty() || !tracked_files.iter().any(|f| f == &path) {
            trace!("Skipping untracked frame '{}'", file);
            continue;
        }
        match line_number.parse::<u32>() {
            Ok(line) if line > 0 => return Some(SourceLocation { path, line }),
            _ => continue,
        }
    }
    None
}
