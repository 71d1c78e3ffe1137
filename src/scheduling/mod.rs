mod platforms;

pub use platforms::min_platforms;
pub(crate) use platforms::peak_platforms;
