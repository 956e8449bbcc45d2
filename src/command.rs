// ── Command parsing ─────────────────────────────────────────────────────────
//
// One-argument commands take everything after the command word and a single
// separating space, verbatim (names may contain spaces). Two-argument
// commands split the remainder on the first space, so only the second
// argument may contain spaces. A recognized command word with a missing
// argument parses to `Invalid` rather than being undefined.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Clear,
    List,
    ListAll,
    ChangeDir(String),
    Touch(String),
    MkDir(String),
    Remove(String),
    Move(String, String),
    Copy(String, String),
    Find(String),
    Rename(String, String),
    Stat(String),
    Invalid,
}

pub fn parse(line: &str) -> Command {
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    match (word, rest) {
        ("exit", None) => Command::Exit,
        ("clear", None) => Command::Clear,
        ("ls", None) => Command::List,
        ("lsall", None) => Command::ListAll,
        ("cd", Some(name)) if !name.is_empty() => Command::ChangeDir(name.to_string()),
        ("touch", Some(name)) if !name.is_empty() => Command::Touch(name.to_string()),
        ("mkdir", Some(name)) if !name.is_empty() => Command::MkDir(name.to_string()),
        ("rm", Some(name)) if !name.is_empty() => Command::Remove(name.to_string()),
        ("find", Some(name)) if !name.is_empty() => Command::Find(name.to_string()),
        ("stat", Some(name)) if !name.is_empty() => Command::Stat(name.to_string()),
        ("mv", Some(args)) => match split_pair(args) {
            Some((src, dst)) => Command::Move(src, dst),
            None => Command::Invalid,
        },
        ("cp", Some(args)) => match split_pair(args) {
            Some((src, dst)) => Command::Copy(src, dst),
            None => Command::Invalid,
        },
        ("rename", Some(args)) => match split_pair(args) {
            Some((old, new)) => Command::Rename(old, new),
            None => Command::Invalid,
        },
        _ => Command::Invalid,
    }
}

fn split_pair(args: &str) -> Option<(String, String)> {
    let (first, second) = args.split_once(' ')?;
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
