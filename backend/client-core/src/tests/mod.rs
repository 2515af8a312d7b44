mod session;
mod typeset;
mod view;
