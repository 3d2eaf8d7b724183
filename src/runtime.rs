use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Unified event type consumed by the app loop.
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Control handle for the countdown driver. The tick thread only emits while
/// the handle is running, so the loop suspends it when a session goes terminal
/// and resumes it when a new session starts. Dropping the handle stops the
/// thread for good, so a handle must outlive every session it drives.
#[derive(Debug)]
pub struct TickerHandle {
    running: Arc<AtomicBool>,
    alive: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn suspend(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the countdown thread, emitting `GameEvent::Tick` once per `interval`
/// while the returned handle is running.
pub fn spawn_ticker(tx: Sender<GameEvent>, interval: Duration) -> TickerHandle {
    let running = Arc::new(AtomicBool::new(true));
    let alive = Arc::new(AtomicBool::new(true));

    let thread_running = running.clone();
    let thread_alive = alive.clone();
    thread::spawn(move || loop {
        thread::sleep(interval);
        if !thread_alive.load(Ordering::SeqCst) {
            break;
        }
        if thread_running.load(Ordering::SeqCst) && tx.send(GameEvent::Tick).is_err() {
            break;
        }
    });

    TickerHandle { running, alive }
}

/// Spawn the crossterm input thread, forwarding key and resize events.
pub fn spawn_input_thread(tx: Sender<GameEvent>) {
    thread::spawn(move || loop {
        let evt = match event::read() {
            Ok(CtEvent::Key(key)) => Some(GameEvent::Key(key)),
            Ok(CtEvent::Resize(_, _)) => Some(GameEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };

        if let Some(evt) = evt {
            if tx.send(evt).is_err() {
                break;
            }
        }
    });
}

/// Wire up both event sources for the main loop.
pub fn game_events(tick_interval: Duration) -> (Receiver<GameEvent>, TickerHandle) {
    let (tx, rx) = mpsc::channel();
    let ticker = spawn_ticker(tx.clone(), tick_interval);
    spawn_input_thread(tx);
    (rx, ticker)
}
