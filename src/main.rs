//! Turret Rush entry point
//!
//! The binary is pure glue: it provides the three external collaborators
//! the session needs - a keyboard-state provider, a frame-clock driver,
//! and a persistent score store - and renders through `display`.

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use turret_rush::display::{self, Viewport};
use turret_rush::session::Rotation;
use turret_rush::{FileScoreStore, Session, Tuning};

/// Frame budget (~60 FPS, matching the display-refresh driver the sim
/// was designed for)
const FRAME: Duration = Duration::from_millis(16);

/// A key counts as "held" if its last press/repeat arrived within this
/// many frames. Covers terminals that never emit key-release events:
/// OS key-repeat refreshes the window before it expires.
const HOLD_WINDOW: u64 = 8;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn session_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Turret Rush starting");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let store = FileScoreStore::default();
    let mut session = Session::new(session_seed(), tuning, store);

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Blocking event reader on its own thread; the game loop drains the
    // channel once per frame
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut session, &rx);

    let mut out = stdout();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn run(
    session: &mut Session<FileScoreStore>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut out = BufWriter::new(stdout());
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // Drain queued input events
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    key_frame.insert(key.code, frame);
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        // Discrete fire press, at most once per press
                        KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
                            session.request_fire();
                        }
                        KeyCode::Char('r') if !session.is_running() => {
                            session.restart();
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Release => {
                    key_frame.remove(&key.code);
                }
            }
        }

        session.set_rotation(Rotation::Left, is_held(&key_frame, &KeyCode::Left, frame));
        session.set_rotation(Rotation::Right, is_held(&key_frame, &KeyCode::Right, frame));

        // Wall-clock delta since the previous tick
        let now = Instant::now();
        let dt_ms = now.duration_since(last_tick).as_secs_f32() * 1000.0;
        last_tick = now;
        session.tick(dt_ms);

        let (cols, rows) = terminal::size()?;
        display::render(
            &mut out,
            session.state(),
            session.high_score(),
            Viewport::new(cols, rows),
        )?;
        out.flush()?;

        if let Some(remaining) = FRAME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
