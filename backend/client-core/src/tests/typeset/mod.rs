mod service;
mod tex;
mod unicode;
