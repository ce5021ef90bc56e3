mod vec;
pub use self::vec::Vector;
mod point;
pub use self::point::Point;
mod rect;
pub use self::rect::Rect;

#[cfg(test)]
mod tests;
