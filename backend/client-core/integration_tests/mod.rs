mod config_env;
mod session;
mod solver_client;
