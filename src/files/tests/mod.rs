mod helpers;

mod tests_shared;

// Randomised last-write-wins sequences
mod tests_sequences;
