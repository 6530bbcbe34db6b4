#![allow(nonstandard_style)]

use calc_pad::{Key, Mode, Session};
use clap::{ArgAction, Parser};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Terminal keypad for the calc_pad engine.
///
/// Every character is a keystroke: digits, `+ - × ÷ * x / % ( ) .`, `ANS`
/// (or `a`), `=` to commit, `<` to delete, `[` and `]` to move the caret and
/// `C` to clear.
#[derive(Debug, Parser)]
#[command(name = "calc_pad", about = "Calculator keypad in the terminal")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Run these keystrokes, print the final state and exit
    #[arg(short, long)]
    keys: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Keystroke {
    token(Key),
    delete,
    left,
    right,
    commit,
    clear,
}

fn keystrokes(line: &str) -> Vec<Keystroke> {
    let mut strokes = Vec::new();
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix(calc_pad::keys::ANSWER_TOKEN) {
            strokes.push(Keystroke::token(Key::answer));
            rest = tail;
            continue;
        }
        rest = &rest[c.len_utf8()..];

        let stroke = match c {
            'a' => Keystroke::token(Key::answer),
            '=' => Keystroke::commit,
            '<' => Keystroke::delete,
            '[' => Keystroke::left,
            ']' => Keystroke::right,
            'C' | 'c' => Keystroke::clear,
            _ if c.is_whitespace() => continue,
            _ => match c.to_string().parse() {
                Ok(key) => Keystroke::token(key),
                Err(error) => {
                    debug!(%error, "keystroke skipped");
                    continue;
                },
            },
        };
        strokes.push(stroke);
    }
    strokes
}

fn press(session: &mut Session, stroke: Keystroke) {
    use Keystroke::*;
    match stroke {
        token(key) => session.insert_key(key),
        delete => session.delete(),
        left => session.move_cursor_left(),
        right => session.move_cursor_right(),
        commit => session.commit(),
        clear => session.clear(),
    }
}

fn render(session: &Session) -> String {
    let mut display = session.display_text();
    if session.mode() == Mode::editing {
        let at = display
            .char_indices()
            .nth(session.caret())
            .map_or(display.len(), |(index, _)| index);
        display.insert(at, '|');
    }
    format!("{display}    {}", session.preview_text())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "calc_pad=warn",
        1 => "calc_pad=debug",
        _ => "calc_pad=trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new();

    if let Some(script) = cli.keys {
        for stroke in keystrokes(&script) {
            press(&mut session, stroke);
        }
        println!("{}", render(&session));
        return Ok(());
    }

    println!("{}", render(&session));
    print!("> ");
    std::io::stdout().flush()?;

    for line in std::io::stdin().lines() {
        for stroke in keystrokes(&line?) {
            press(&mut session, stroke);
        }
        println!("{}", render(&session));

        print!("> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}
