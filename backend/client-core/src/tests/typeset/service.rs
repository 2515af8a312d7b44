use crate::error::typeset::TypesetError;
use crate::render::TrustPolicy;
use crate::typeset::{EngineState, Typesetter, TypesetService, UnicodeTypesetter};
use crate::view::SolverView;

use models::{TypesetConfig, UiState};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Engine double that counts configure calls.
struct CountingEngine {
    configure_calls: Arc<AtomicUsize>,
}

impl Typesetter for CountingEngine {
    fn configure(&mut self, _config: &TypesetConfig) -> Result<(), TypesetError> {
        self.configure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn typeset(&self, text: &str) -> Result<String, TypesetError> {
        Ok(text.to_uppercase())
    }
}

fn solved_view() -> SolverView {
    let state = UiState {
        solution: String::from("$x^2 = 4$"),
        steps: vec![
            String::from("take roots"),
            String::from("$x = \\pm 2$"),
            String::from("check \\(\\sqrt{4}\\)"),
        ],
        ..UiState::default()
    };
    SolverView::from_state(&state, TrustPolicy::Heuristic)
}

/// **VALUE**: The engine is configured exactly once no matter how often mount is called.
///
/// **WHY THIS MATTERS**: Mount happens at startup; a second configure would reset any
/// engine state and, for heavier engines, repeat an expensive load.
#[test]
fn given_mounted_service_when_mounted_again_then_engine_configured_once() {
    // GIVEN: A service around a counting engine
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = CountingEngine {
        configure_calls: Arc::clone(&calls),
    };
    let mut service = TypesetService::new(engine, TypesetConfig::default());

    // WHEN: Mounting twice
    service.mount().unwrap();
    service.mount().unwrap();

    // THEN: One configure call, service mounted
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.state(), EngineState::Mounted);
}

#[test]
fn given_unmounted_service_when_typesetting_view_then_view_is_untouched() {
    let service = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());
    let mut view = solved_view();
    let before = view.clone();

    let processed = service.typeset_view(&mut view).unwrap();

    assert_eq!(processed, 0);
    assert_eq!(view, before);
}

/// **VALUE**: Plain blocks go through the engine too; text without math is left alone.
///
/// **BUG THIS CATCHES**: Would catch `\(...\)` math in a step without `$` being
/// printed raw because the heuristic called the step plain.
#[test]
fn given_mounted_service_when_typesetting_view_then_math_in_every_block_changes() {
    let mut service = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());
    service.mount().unwrap();
    let mut view = solved_view();

    let processed = service.typeset_view(&mut view).unwrap();

    let result = view.result.unwrap();
    assert_eq!(processed, 4);
    assert_eq!(result.solution.text, "x² = 4");
    assert_eq!(result.steps[0].text, "take roots");
    assert_eq!(result.steps[1].text, "x = ± 2");
    assert_eq!(result.steps[2].text, "check √4");
}

/// **VALUE**: Teardown is final.
///
/// **BUG THIS CATCHES**: Would catch a service that silently re-mounts after teardown,
/// resurrecting an engine the application already released.
#[test]
fn given_torn_down_service_when_mounting_then_returns_torn_down_error() {
    let mut service = TypesetService::new(UnicodeTypesetter::new(), TypesetConfig::default());
    service.mount().unwrap();

    service.teardown();
    let result = service.mount();

    assert!(matches!(result, Err(TypesetError::TornDown { .. })));
    assert!(!service.is_mounted());

    let mut view = solved_view();
    assert_eq!(service.typeset_view(&mut view).unwrap(), 0);
}
