// ABOUTME: Task management module
// ABOUTME: Task creation, status changes, reassignment and action item conversion

pub mod storage;
