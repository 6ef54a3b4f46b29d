//! Request extractors mapping rejections to `AppError`.

mod path;
mod validated_json;

pub use path::PathParam;
pub use validated_json::ValidatedJson;
