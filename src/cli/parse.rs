use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
    ZeroCount,
    ConflictingSources,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::ZeroCount => write!(f, "--number must be at least 1"),
            ParseError::ConflictingSources => {
                write!(f, "--urandom and --entropy-file cannot be combined")
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-u" | "--urandom" => flags.urandom = true,
            "--balanced" => flags.balanced = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" | "--no-special" => flags.no_symbols = true,
            flag @ ("-l" | "--length") => flags.length = Some(number(args, &mut i, flag)?),
            flag @ ("-n" | "--number") => match number(args, &mut i, flag)? {
                0 => return Err(ParseError::ZeroCount),
                n => flags.number = Some(n),
            },
            flag @ "--entropy-file" => {
                flags.entropy_file = Some(value(args, &mut i, flag)?.to_string())
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.urandom && flags.entropy_file.is_some() {
        return Err(ParseError::ConflictingSources);
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number(args: &[String], i: &mut usize, flag: &str) -> Result<usize, ParseError> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn length_and_classes() {
        let flags = parse(&args(&["-l", "24", "--no-symbols", "--balanced", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(24));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols);
        assert!(flags.balanced);
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            parse(&args(&["--length", "-3"])),
            Err(ParseError::InvalidNumber("-3".into()))
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(parse(&args(&["-n", "0"])), Err(ParseError::ZeroCount));
        assert_eq!(parse(&args(&["--number", "1"])).unwrap().number, Some(1));
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
    }

    #[test]
    fn unknown_argument() {
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }

    #[test]
    fn sources_conflict() {
        assert_eq!(
            parse(&args(&["-u", "--entropy-file", "/tmp/x"])),
            Err(ParseError::ConflictingSources)
        );
    }
}
