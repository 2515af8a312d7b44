// Integration tests for the assistant front-end
// These drive the real SolverClient against a wiremock solving service

mod run_loop;
mod submit;
