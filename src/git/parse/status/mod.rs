use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while_m_n},
    character::complete::{anychar, char, one_of},
    combinator::{all_consuming, map, map_res, rest},
    multi::fold_many0,
    sequence::{delimited, preceded, separated_pair, terminated},
};

use crate::git::{
    file_kind::FileKindClassifier,
    status::{FileState, RENAME_SEPARATOR, is_rename_code},
};

/// Parses one `XY <path>` record of `git status --porcelain`.
/// Returns `None` when the line doesn't start with a code and a space.
pub(crate) fn parse_status_line(
    line: &str,
    classifier: &dyn FileKindClassifier,
) -> Option<FileState> {
    let (paths, code) = status_code(line).ok()?;

    let renamed = if is_rename_code(code) {
        all_consuming(rename_paths).parse(paths).ok()
    } else {
        None
    };

    let (path, previous_path) = match renamed {
        Some((_, (from, to))) => (to, Some(from)),
        None => (unquote(paths), None),
    };

    let kind = classifier.classify(&path);
    Some(FileState::new(line, code, path, previous_path, kind))
}

fn status_code(input: &str) -> IResult<&str, [char; 2]> {
    map(
        terminated((anychar, anychar), char(' ')),
        |(staged, unstaged)| [staged, unstaged],
    )
    .parse(input)
}

fn rename_paths(input: &str) -> IResult<&str, (String, String)> {
    separated_pair(path, tag(RENAME_SEPARATOR), path).parse(input)
}

fn path(input: &str) -> IResult<&str, String> {
    alt((
        quoted_path,
        map(alt((take_until(RENAME_SEPARATOR), rest)), String::from),
    ))
    .parse(input)
}

/// Git quotes paths with unusual characters C-style, e.g. `"caf\303\251 menu"`.
pub(crate) fn unquote(input: &str) -> String {
    match all_consuming(quoted_path).parse(input) {
        Ok((_, unquoted)) => unquoted,
        Err(_) => input.to_string(),
    }
}

fn quoted_path(input: &str) -> IResult<&str, String> {
    map(
        delimited(
            char('"'),
            fold_many0(quoted_fragment, Vec::new, |mut acc: Vec<u8>, bytes| {
                acc.extend(bytes);
                acc
            }),
            char('"'),
        ),
        |bytes| String::from_utf8_lossy(&bytes).into_owned(),
    )
    .parse(input)
}

fn quoted_fragment(input: &str) -> IResult<&str, Vec<u8>> {
    alt((
        map(is_not("\"\\"), |s: &str| s.as_bytes().to_vec()),
        map(preceded(char('\\'), alt((octal_byte, escaped_byte))), |b| {
            vec![b]
        }),
    ))
    .parse(input)
}

fn octal_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(3, 3, |c: char| c.is_digit(8)),
        |digits: &str| u8::from_str_radix(digits, 8),
    )
    .parse(input)
}

fn escaped_byte(input: &str) -> IResult<&str, u8> {
    map(one_of("\"\\abfnrtv"), |c| match c {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        other => other as u8,
    })
    .parse(input)
}
