use super::CliFlags;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    Conflict(&'static str, &'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::Conflict(a, b) => write!(f, "{} and {} cannot be combined", a, b),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--show-entropy" => flags.show_entropy = true,
            "--number" => flags.number = Some(true),
            "--no-number" => flags.number = Some(false),
            "--lower" => flags.lowercase = Some(true),
            "--no-lower" => flags.lowercase = Some(false),
            "--upper" => flags.uppercase = Some(true),
            "--no-upper" => flags.uppercase = Some(false),
            "--symbol" => flags.symbol = Some(true),
            "--no-symbol" => flags.symbol = Some(false),
            "--space" => flags.space = Some(true),
            "--no-space" => flags.space = Some(false),
            "--custom" => flags.custom = Some(value(args, &mut i)?.to_string()),
            "--config" => flags.config = Some(value(args, &mut i)?.to_string()),
            "-l" | "--length" => flags.length = Some(number(value(args, &mut i)?)?),
            "-e" | "--entropy" => flags.entropy = Some(number(value(args, &mut i)?)?),
            "-n" | "--count" => {
                let raw = value(args, &mut i)?;
                flags.count = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.length.is_some() && flags.entropy.is_some() {
        return Err(ParseError::Conflict("--length", "--entropy"));
    }

    Ok(flags)
}

/// Consume the argument following `args[*i]`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(s: &str) -> Result<f64, ParseError> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber(s.to_string()))
}
