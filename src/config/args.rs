//! Legacy keyword arguments.
//!
//! The first release of the tool took `y:<year>` and `d:<path>` tokens
//! instead of flags. Those tokens are rewritten into `--year` / `--path`
//! before clap sees the argument list, so both spellings resolve to the
//! same [`CliConfig`](super::CliConfig).

/// Flags whose next token is a value and must never be rewritten.
const VALUE_FLAGS: [&str; 7] = [
    "--year",
    "-y",
    "--path",
    "-d",
    "--config",
    "-c",
    "--log-file",
];

/// Rewrites `y:`/`d:` tokens. The first element (program name), the value
/// following a value-taking flag, and everything after a literal `--` are
/// passed through untouched.
pub fn normalize_keyword_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let mut normalized: Vec<String> = iter.next().into_iter().collect();
    let mut passthrough = false;
    let mut expects_value = false;

    for arg in iter {
        if passthrough || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            expects_value = true;
            normalized.push(arg);
            continue;
        }

        match keyword_flag(&arg) {
            Some((flag, value)) => {
                normalized.push(flag.to_string());
                normalized.push(value.to_string());
            }
            None => normalized.push(arg),
        }
    }

    normalized
}

/// Keys are lowercase only, so `Y:\aoc` or `D:/aoc` stay paths.
fn keyword_flag(arg: &str) -> Option<(&'static str, &str)> {
    if is_drive_path(arg) {
        return None;
    }
    let (key, value) = arg.split_once(':')?;
    match key {
        "y" => Some(("--year", value)),
        "d" => Some(("--path", value)),
        _ => None,
    }
}

/// `C:\...` in any case, or `C:/...` with an uppercase drive letter.
/// Lowercase `d:/...` is kept as a keyword so `d:/home/me/aoc` still works.
fn is_drive_path(arg: &str) -> bool {
    let bytes = arg.as_bytes();
    match bytes {
        [letter, b':', b'\\', ..] => letter.is_ascii_alphabetic(),
        [letter, b':', b'/', ..] => letter.is_ascii_uppercase(),
        _ => false,
    }
}
