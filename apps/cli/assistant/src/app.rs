//! The interactive loop: read a question, solve it, print the screen.

use crate::commands::input::{Input, parse_line};
use crate::commands::solve::submit_question;
use crate::error::AssistantError;
use crate::terminal;

use client_core::config::RenderConfig;
use client_core::session::SolverSession;
use client_core::solver_client::SolveService;
use client_core::typeset::{Typesetter, TypesetService};

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Run until `:quit` or end of input.
///
/// While a request is in flight the busy submit control is printed as soon
/// as the session reports `loading`.
pub async fn run_loop<R, W, S, T>(
    mut reader: R,
    writer: &mut W,
    session: &SolverSession<S>,
    typesetter: &TypesetService<T>,
    render: &RenderConfig,
) -> Result<(), AssistantError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: SolveService,
    T: Typesetter,
{
    write_out(writer, &terminal::banner())?;

    let mut line = String::new();
    loop {
        write_out(writer, terminal::PROMPT)?;

        line.clear();
        let read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| AssistantError::Terminal {
                message: format!("Failed to read input: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
        if read == 0 {
            debug!("End of input");
            break;
        }

        match parse_line(&line) {
            Input::Quit => break,
            Input::Help => write_out(writer, &format!("{}\n", terminal::HELP))?,
            Input::Question(question) => {
                let mut updates = session.subscribe();
                let submission = submit_question(session, typesetter, render, &question);
                tokio::pin!(submission);

                let mut busy_shown = false;
                let view = loop {
                    tokio::select! {
                        view = &mut submission => break view?,
                        changed = updates.changed() => {
                            if changed.is_err() {
                                break (&mut submission).await?;
                            }
                            let loading = updates.borrow_and_update().loading;
                            if loading && !busy_shown {
                                busy_shown = true;
                                write_out(writer, &format!("{}\n", terminal::progress_line()))?;
                            }
                        }
                    }
                };

                write_out(writer, &terminal::render(&view))?;
            }
        }
    }

    info!("Leaving interactive loop");
    Ok(())
}

#[track_caller]
fn write_out<W: Write>(writer: &mut W, text: &str) -> Result<(), AssistantError> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| AssistantError::Terminal {
            message: format!("Failed to write output: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
