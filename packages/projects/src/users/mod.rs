// ABOUTME: Account management module
// ABOUTME: Sign-up, log-in and session handling on top of the workspace

pub mod storage;

#[cfg(test)]
mod storage_test;
