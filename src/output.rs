use owo_colors::OwoColorize;

/// Consistent, optionally colored prefixes for user-facing messages.
/// Colors are enabled only when stdout is a TTY.
pub fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    Ok,
    Warn,
    Error,
}

/// Render `msg` with its tag prefix, e.g. "warn: ...".
pub fn tagged(tag: Tag, msg: &str, color: bool) -> String {
    let label = match tag {
        Tag::Info => "info:",
        Tag::Ok => "ok:",
        Tag::Warn => "warn:",
        Tag::Error => "error:",
    };
    if !color {
        return format!("{} {}", label, msg);
    }
    match tag {
        Tag::Info => format!("{} {}", label.cyan().bold(), msg),
        Tag::Ok => format!("{} {}", label.green().bold(), msg),
        Tag::Warn => format!("{} {}", label.yellow().bold(), msg),
        Tag::Error => format!("{} {}", label.red().bold(), msg),
    }
}

pub fn print_info(msg: &str) {
    println!("{}", tagged(Tag::Info, msg, is_tty()));
}

pub fn print_warn(msg: &str) {
    eprintln!("{}", tagged(Tag::Warn, msg, is_tty()));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", tagged(Tag::Error, msg, is_tty()));
}

pub fn print_success(msg: &str) {
    println!("{}", tagged(Tag::Ok, msg, is_tty()));
}
