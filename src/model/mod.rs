mod path;
mod section;

pub use path::RoutePath;
pub use section::Section;
