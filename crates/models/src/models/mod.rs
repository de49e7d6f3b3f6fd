mod body_style;
mod gym;
mod lenient;
mod member;

pub use body_style::BodyStyle;
pub use gym::Gym;
pub use member::Member;
