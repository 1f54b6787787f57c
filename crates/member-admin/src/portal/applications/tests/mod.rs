mod common;
mod normalizing;
