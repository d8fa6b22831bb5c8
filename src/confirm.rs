// Confirmation gate for changing a user's permission level
use clap::ValueEnum;
use std::fmt;
use std::io::{BufRead, Write};

/// Permission levels of the judge, with the display text the profile page's
/// select options carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UserLevel {
    Admin,
    Judge,
    SubJudge,
    User,
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Admin => "Admin",
            Self::Judge => "Judge",
            Self::SubJudge => "Sub-judge",
            Self::User => "User",
        };
        f.write_str(text)
    }
}

/// Ask before changing `username` to `level`. Returns true exactly when the
/// answer accepts. Generic over the streams so tests can drive it.
pub fn confirm_change_user_level<R: BufRead, W: Write>(
    username: &str,
    level: UserLevel,
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<bool> {
    write!(
        writer,
        "Are you sure you want to change {} to {}? [y/N] ",
        username, level
    )?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Interactive wrapper over stdin/stdout.
pub fn prompt_change_user_level(username: &str, level: UserLevel) -> std::io::Result<bool> {
    let stdin = std::io::stdin();
    confirm_change_user_level(username, level, &mut stdin.lock(), &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answer: &str, username: &str, level: UserLevel) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let accepted = confirm_change_user_level(username, level, &mut input, &mut output).unwrap();
        (accepted, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_accepts_on_yes() {
        assert!(run("y\n", "alice", UserLevel::Judge).0);
        assert!(run("Y\n", "alice", UserLevel::Judge).0);
        assert!(run("yes\n", "alice", UserLevel::Judge).0);
    }

    #[test]
    fn test_rejects_otherwise() {
        assert!(!run("n\n", "alice", UserLevel::Judge).0);
        assert!(!run("\n", "alice", UserLevel::Judge).0);
        assert!(!run("maybe\n", "alice", UserLevel::Judge).0);
        // EOF with no answer
        assert!(!run("", "alice", UserLevel::Judge).0);
    }

    #[test]
    fn test_message_interpolates_verbatim() {
        let (_, prompt) = run("n\n", "b0b the judge", UserLevel::SubJudge);
        assert!(prompt.contains("Are you sure you want to change b0b the judge to Sub-judge?"));
    }

    #[test]
    fn test_level_display_text() {
        assert_eq!(UserLevel::Admin.to_string(), "Admin");
        assert_eq!(UserLevel::SubJudge.to_string(), "Sub-judge");
    }
}
