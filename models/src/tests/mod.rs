mod solve;
mod typeset_config;
mod ui_state;
