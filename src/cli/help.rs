//! Usage text.

const OPTIONS: &[(&str, &str)] = &[
    ("-l, --length <N>", "Characters per password (default: 12)"),
    ("-e, --entropy <BITS>", "Size the password to reach at least BITS of entropy"),
    ("-n, --count <N>", "How many passwords to generate (default: 1)"),
    ("    --[no-]number", "Digits 0-9 (default: on)"),
    ("    --[no-]lower", "Lowercase a-z (default: on)"),
    ("    --[no-]upper", "Uppercase A-Z (default: on)"),
    ("    --[no-]symbol", "ASCII punctuation (default: off)"),
    ("    --[no-]space", "Space, emitted as U+00A0 (default: off)"),
    ("    --custom <CHARS>", "Extra characters; duplicates are ignored"),
    ("    --config <FILE>", "Load settings from a JSON file; flags override it"),
    ("    --show-entropy", "Print entropy, charset size and source to stderr"),
    ("-b, --board", "Copy to clipboard instead of printing"),
    ("-q, --quiet", "Suppress warnings and summaries"),
    ("-h, --help", "Display this help message"),
    ("-v, --version", "Display version"),
];

pub fn print_help() {
    println!("entropass {}", env!("CARGO_PKG_VERSION"));
    println!("Password generator sized by length or target entropy");
    println!();
    println!("USAGE:");
    println!("  entropass [OPTIONS]");
    println!();
    println!("OPTIONS:");
    for (flag, text) in OPTIONS {
        println!("  {flag:<24} {text}");
    }
    println!();
    println!("EXAMPLES:");
    println!("  entropass                      One 12-character alphanumeric password");
    println!("  entropass -e 128 --symbol      At least 128 bits, with punctuation");
    println!("  entropass -l 20 -n 3           Three passwords, 20 characters each");
    println!("  entropass --custom '你好' -l 8  Alphanumerics plus custom characters");
}
