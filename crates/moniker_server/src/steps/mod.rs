//! Event steps: the username generation handler and the result recorder.

mod generator;
mod recorder;

pub use generator::UsernameGenerator;
pub use recorder::UsernameRecorder;
