pub mod anyerror;
pub mod environment;
pub mod filesystem;
pub mod strcmp;
