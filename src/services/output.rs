use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;
use std::io::Write;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        for d in data {
            writeln!(stdout, "{}", row(d))?;
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        print_raw(text(&data).as_bytes())?;
    }
    Ok(())
}

/// Write `bytes` to stdout unchanged, without a trailing newline.
pub fn print_raw(bytes: &[u8]) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}

/// Report a fatal error. Text mode writes `error: <message>` to stderr.
pub fn print_error(json: bool, code: &str, message: &str, hint: Option<&str>) {
    print_failure(json, code, &format!("error: {}", message), message, hint)
}

/// Report a strict-mode miss: same text as the lenient notice, on stderr.
pub fn print_not_found(json: bool, code: &str, message: &str, hint: Option<&str>) {
    print_failure(json, code, message, message, hint)
}

fn print_failure(json: bool, code: &str, text: &str, message: &str, hint: Option<&str>) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("{}", text),
        }
    } else {
        eprintln!("{}", text);
        if let Some(h) = hint {
            eprintln!("{}", h);
        }
    }
}
