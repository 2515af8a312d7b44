use crate::error::AssistantError;

use client_core::config::RenderConfig;
use client_core::session::SolverSession;
use client_core::solver_client::SolveService;
use client_core::typeset::{Typesetter, TypesetService};
use client_core::view::SolverView;

use log::{debug, error, warn};

/// Submit a question and produce the screen to show once it settles.
///
/// The view is rendered first and typeset afterwards, and only after a
/// successful solve. A typesetting failure is not fatal: the untypeset view
/// is shown instead.
///
/// # Returns
///
/// * `Ok(SolverView)` - The settled screen, with either a result or an error region
/// * `Err(AssistantError)` - The session's state store failed
pub async fn submit_question<S, T>(
    session: &SolverSession<S>,
    typesetter: &TypesetService<T>,
    render: &RenderConfig,
    question: &str,
) -> Result<SolverView, AssistantError>
where
    S: SolveService,
    T: Typesetter,
{
    session.set_question(question).await.map_err(|e| {
        error!("Failed to store question: {}", e);
        AssistantError::from(e)
    })?;

    let outcome = session.solve().await.map_err(|e| {
        error!("Solve request cycle failed: {}", e);
        AssistantError::from(e)
    })?;
    debug!("Request settled: {outcome:?}");

    let state = session.state();
    let mut view = SolverView::from_state(&state, render.trust_policy);

    if outcome.needs_typeset()
        && render.typeset
        && let Err(e) = typesetter.typeset_view(&mut view)
    {
        warn!("Typesetting failed, showing raw markup: {}", e);
        view = SolverView::from_state(&state, render.trust_policy);
    }

    Ok(view)
}
