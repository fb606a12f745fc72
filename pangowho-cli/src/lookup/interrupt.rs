use std::io;
use std::sync::mpsc::Sender;
use std::thread;

use tokio::runtime::Builder;
use tokio::signal;

use super::repl::ReplEvent;

///
/// Turn Ctrl+C into a `ReplEvent::Interrupt` on `events`.
///
/// The handler is registered before this returns, so a signal arriving at any
/// point of the session afterwards ends it through the normal farewell path
/// instead of killing the process. Only the first Ctrl+C is forwarded.
///
pub fn forward_interrupt(events: Sender<ReplEvent>) -> io::Result<()> {
    let runtime = Builder::new_current_thread().enable_io().build()?;

    let mut interrupt = {
        let _guard = runtime.enter();

        #[cfg(unix)]
        let interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())?;

        #[cfg(windows)]
        let interrupt = signal::windows::ctrl_c()?;

        interrupt
    };

    thread::spawn(move || {
        if runtime.block_on(interrupt.recv()).is_some() {
            log::debug!("Received Ctrl+C");
            let _ = events.send(ReplEvent::Interrupt);
        }
    });

    Ok(())
}
