//! Platform operations, one `impl Session` block per area.
mod contest;
mod question;
mod submission;
mod user;
