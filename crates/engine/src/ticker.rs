//! Fixed-interval gravity source.
//!
//! A background thread that sends [`Event::GravityTick`] on a channel every
//! interval. It stops when asked to, or on its own once the receiving side
//! hangs up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::driver::Event;

pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Start ticking into `sender` every `interval`.
    pub fn spawn(interval: Duration, sender: Sender<Event>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut sent: u64 = 0;
            let mut next = Instant::now() + interval;
            while !stop_flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                if now < next {
                    thread::sleep(next - now);
                    continue;
                }
                next += interval;
                if sender.send(Event::GravityTick).is_err() {
                    break;
                }
                sent += 1;
            }
            log::debug!("ticker stopped after {} ticks", sent);
            sent
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the thread and return how many ticks it delivered.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Relaxed);
        self.handle
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or(0)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
