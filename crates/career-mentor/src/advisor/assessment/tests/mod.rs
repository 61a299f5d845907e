mod common;
mod mutation;
mod progress;
