//! The terminal front end.

use crate::session::{Command, Session};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifetorus_lib::State;
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Each cell takes two columns, so that it looks roughly square.
const CELL_WIDTH: u16 = 2;

/// Key bindings, shown below the status line.
const HELP: &str = concat!(
    "Space:run/pause  N:step  C:clear  R:random  ",
    "S:save  L:load  1-9:pattern  Q:quit"
);

/// Translates a terminal event into a command.
fn command(event: Event) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Char('n') => Some(Command::Step),
            KeyCode::Char('c') => Some(Command::Clear),
            KeyCode::Char('r') => Some(Command::Randomize),
            KeyCode::Char('s') => Some(Command::Save),
            KeyCode::Char('l') => Some(Command::LoadSaved),
            KeyCode::Char(d @ '1'..='9') => Some(Command::LoadPattern(d as u8 - b'0')),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind:
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Command::Paint(row as isize, (column / CELL_WIDTH) as isize)),
        _ => None,
    }
}

fn draw<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let grid = &session.grid;
    queue!(out, cursor::MoveTo(0, 0))?;
    for row in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|col| match grid.get(row, col) {
                Ok(State::Alive) => "██",
                _ => "  ",
            })
            .collect();
        queue!(
            out,
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
            Clear(ClearType::UntilNewLine),
            Print("\r\n")
        )?;
    }
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(session.status()),
        Clear(ClearType::UntilNewLine),
        Print("\r\n"),
        Print(HELP),
        Clear(ClearType::UntilNewLine),
        Print("\r\n"),
        Print(session.message.as_deref().unwrap_or("")),
        Clear(ClearType::UntilNewLine),
        ResetColor
    )?;
    out.flush()
}

fn main_loop<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    let frame = Duration::from_secs_f64(1.0 / f64::from(session.config.fps));
    let mut last_tick = Instant::now();
    loop {
        draw(session, out)?;
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Some(command) = command(event::read()?) {
                if !session.handle(command) {
                    return Ok(());
                }
            }
        }
        if last_tick.elapsed() >= frame {
            session.handle(Command::Tick);
            last_tick = Instant::now();
        }
    }
}

/// Runs the simulation in the terminal until the user quits.
pub(crate) fn run(session: &mut Session) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide,
        Clear(ClearType::All)
    )?;

    let result = main_loop(session, &mut stdout);

    execute!(
        stdout,
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    result
}
