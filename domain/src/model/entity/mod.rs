pub mod job;

#[rustfmt::skip]
pub use self::job::{JobScript, SubmitOutput};
