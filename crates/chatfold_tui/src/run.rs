//! Viewer run loop: terminal setup, key handling, draw.
//!
//! Key events are read on a dedicated thread so the loop never blocks on
//! terminal input while message updates arrive.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use chatfold_core::ChatMessage;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc as tokio_mpsc;

use crate::state::ChatView;
use crate::utils::PAGE_SCROLL_LINES;
use crate::view::draw;

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Apply one key press to the view. `q` and Esc act as commands only while
/// the composer is empty; `r` retries only when a retry is offered. Otherwise
/// they are typed.
pub fn handle_key(view: &mut ChatView, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }
    let composing = !view.input_buffer.is_empty();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return KeyOutcome::Quit,
        KeyCode::Char('q') if !composing => return KeyOutcome::Quit,
        KeyCode::Esc if !composing => return KeyOutcome::Quit,
        KeyCode::Esc => {
            view.input_take();
        }
        KeyCode::Char('r') if !composing && view.can_retry() => {
            view.retry();
        }
        KeyCode::Up => view.scroll_up(1),
        KeyCode::Down => view.scroll_down(1),
        KeyCode::PageUp => view.scroll_up(PAGE_SCROLL_LINES),
        KeyCode::PageDown => view.scroll_down(PAGE_SCROLL_LINES),
        KeyCode::Enter => {
            view.submit();
        }
        KeyCode::Backspace => view.input_backspace(),
        KeyCode::Left => view.input_cursor_left(),
        KeyCode::Right => view.input_cursor_right(),
        KeyCode::Char(c) => view.input_insert(c),
        _ => {}
    }
    KeyOutcome::Continue
}

/// Run the viewer until the user quits.
///
/// `updates` delivers full replacement message sequences from the source;
/// `log_rx` delivers tracing lines shown in the status bar.
pub fn run_viewer(
    view: &mut ChatView,
    updates: Option<tokio_mpsc::UnboundedReceiver<Vec<ChatMessage>>>,
    log_rx: Option<tokio_mpsc::UnboundedReceiver<String>>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, || {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let result = run_loop(&mut terminal, view, updates, log_rx);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

/// Run `setup`; on failure run `restore` before returning the error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce(),
) -> anyhow::Result<T> {
    setup().inspect_err(|_| restore())
}

fn enter_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut ChatView,
    mut updates: Option<tokio_mpsc::UnboundedReceiver<Vec<ChatMessage>>>,
    mut log_rx: Option<tokio_mpsc::UnboundedReceiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
                && key_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                if let Some(last) = line.lines().last() {
                    view.status = last.to_string();
                    view.needs_redraw = true;
                }
            }
        }
        if let Some(ref mut rx) = updates {
            while let Ok(messages) = rx.try_recv() {
                view.set_messages(messages);
            }
        }

        // spinner frames advance only while something is still running
        let animating = view
            .messages()
            .iter()
            .any(|m| m.tool_calls().iter().any(|t| t.is_pending()));

        if view.needs_redraw || animating {
            view.frame_count = view.frame_count.wrapping_add(1);
            terminal.draw(|f| draw(f, view, f.area()))?;
            view.needs_redraw = false;
        }

        match key_rx.try_recv() {
            Ok(Event::Key(key)) => {
                if handle_key(view, key) == KeyOutcome::Quit {
                    break;
                }
            }
            Ok(Event::Mouse(me)) => match me.kind {
                MouseEventKind::ScrollUp => view.scroll_up(3),
                MouseEventKind::ScrollDown => view.scroll_down(3),
                _ => {}
            },
            Ok(Event::Resize(_, _)) => view.needs_redraw = true,
            Ok(_) => {}
            Err(_) => std::thread::sleep(Duration::from_millis(50)),
        }
    }
    Ok(())
}
