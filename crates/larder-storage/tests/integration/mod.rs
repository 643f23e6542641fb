mod file_backed;
mod lifecycle;
mod persistence_failures;
mod properties;
