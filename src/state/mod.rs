/// Application state
///
/// One `EditSession` owns everything the UI renders from: the loaded
/// image, the processed result, and the source path.

pub mod session;
