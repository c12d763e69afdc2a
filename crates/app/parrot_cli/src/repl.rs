//! Line-oriented chat loop over a [`MessageStore`].
//!
//! One request is in flight at a time: the next line is not read until the
//! current reply (or failure) has been handled.

use std::io::Write;

use parrot_core::preference::PreferenceStore;
use parrot_core::{ChatTransport, MessageStore, SubmitOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::Result;

pub const QUIT: &str = "/quit";
pub const THEME: &str = "/theme";

const PROMPT: &str = "you> ";
const THINKING: &str = "thinking…";

/// Runs the chat loop until `/quit` or end of input.
pub async fn run<T, R, W>(
    store: &mut MessageStore<T>,
    preferences: &dyn PreferenceStore,
    input: R,
    out: &mut W,
) -> Result<()>
where
    T: ChatTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match line.trim() {
            QUIT => break,
            THEME => {
                let next = preferences.load().toggled();
                preferences.save(next)?;
                writeln!(out, "theme: {}", next.mode_name())?;
                continue;
            }
            _ => {}
        }

        let Some(request) = store.begin(&line) else {
            continue;
        };
        writeln!(out, "{THINKING}")?;
        out.flush()?;

        let result = store.transport().send(request).await;
        match store.finish(result) {
            SubmitOutcome::Answered(reply) => writeln!(out, "{}\n", reply.content())?,
            SubmitOutcome::Failed(e) => {
                log::warn!("chat request failed: {e}");
                writeln!(out, "(no reply: {e})\n")?;
            }
            SubmitOutcome::Ignored => {}
        }
    }

    Ok(())
}
