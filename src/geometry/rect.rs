use crate::geometry::Point;
use crate::utility::{abs_diff, approx_eq, Scalar};
#[cfg(debug_assertions)]
use log::warn;
use num::traits::AsPrimitive;
use std::fmt::Formatter;
use std::ops::Add;

/// An axis aligned rectangle.
///
/// The rectangle is stored as its four edges: `left`, `top`, `right` and `bottom`. The same four
/// numbers can be seen as a pair of corners through [`Rect::top_left`] and [`Rect::bottom_right`].
///
/// No ordering is imposed on the edges: a rectangle having `left > right` or `top > bottom` is
/// called *inverted*. Size queries tolerate inverted rectangles, while [`Rect::overlaps`] and
/// [`Rect::point_inside`] use the raw edges and should be called on rectangles made proper by
/// [`Rect::normalized`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Rect<T> {
    /// Coordinate of the left edge.
    pub left: T,
    /// Coordinate of the top edge.
    pub top: T,
    /// Coordinate of the right edge.
    pub right: T,
    /// Coordinate of the bottom edge.
    pub bottom: T,
}

fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

impl<T: Scalar> Rect<T> {
    /// Constructs a rectangle with all the edges in the origin.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect = Rect::<i32>::zero();
    ///
    /// assert_eq!(rect.width(), 0);
    /// assert_eq!(rect.height(), 0);
    /// ```
    pub fn zero() -> Rect<T> {
        Rect {
            left: T::zero(),
            top: T::zero(),
            right: T::zero(),
            bottom: T::zero(),
        }
    }

    /// Constructs a rectangle given its four edges, each one converted to `T`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect = Rect::<f32>::new(0, 0.5, 10_u8, 20.5);
    ///
    /// assert_eq!(rect.width(), 10.0);
    /// assert_eq!(rect.height(), 20.0);
    /// ```
    pub fn new<U1, U2, U3, U4>(left: U1, top: U2, right: U3, bottom: U4) -> Rect<T>
    where
        U1: Scalar + AsPrimitive<T>,
        U2: Scalar + AsPrimitive<T>,
        U3: Scalar + AsPrimitive<T>,
        U4: Scalar + AsPrimitive<T>,
    {
        Rect {
            left: left.as_(),
            top: top.as_(),
            right: right.as_(),
            bottom: bottom.as_(),
        }
    }

    /// Constructs a rectangle given its top left and bottom right corners.
    ///
    /// No check is performed on the relative position of the two corners.
    /// # Examples
    /// ```
    /// use math2d::geometry::{Point, Rect};
    ///
    /// let top_left = Point::<i32>::new(1, 2);
    /// let bottom_right = Point::<f64>::new(4.0, 6.0);
    /// let rect = Rect::<i64>::from_points(&top_left, &bottom_right);
    ///
    /// assert_eq!(rect.left, 1);
    /// assert_eq!(rect.bottom, 6);
    /// ```
    pub fn from_points<U1, U2>(top_left: &Point<U1>, bottom_right: &Point<U2>) -> Rect<T>
    where
        U1: Scalar + AsPrimitive<T>,
        U2: Scalar + AsPrimitive<T>,
    {
        Rect {
            left: top_left.x.as_(),
            top: top_left.y.as_(),
            right: bottom_right.x.as_(),
            bottom: bottom_right.y.as_(),
        }
    }

    /// Constructs a rectangle by converting the edges of a rectangle with a different scalar type.
    pub fn from_rect<U: Scalar + AsPrimitive<T>>(other: &Rect<U>) -> Rect<T> {
        Rect {
            left: other.left.as_(),
            top: other.top.as_(),
            right: other.right.as_(),
            bottom: other.bottom.as_(),
        }
    }

    /// Returns a copy of this rectangle with its edges converted to the scalar type `U`.
    pub fn cast<U: Scalar>(&self) -> Rect<U>
    where
        T: AsPrimitive<U>,
    {
        Rect {
            left: self.left.as_(),
            top: self.top.as_(),
            right: self.right.as_(),
            bottom: self.bottom.as_(),
        }
    }

    /// Returns the corner at the intersection of the `left` and `top` edges.
    pub fn top_left(&self) -> Point<T> {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    /// Returns the corner at the intersection of the `right` and `bottom` edges.
    pub fn bottom_right(&self) -> Point<T> {
        Point {
            x: self.right,
            y: self.bottom,
        }
    }

    /// Moves the `left` and `top` edges so they pass through the given point.
    pub fn set_top_left<U: Scalar + AsPrimitive<T>>(&mut self, point: &Point<U>) {
        self.left = point.x.as_();
        self.top = point.y.as_();
    }

    /// Moves the `right` and `bottom` edges so they pass through the given point.
    pub fn set_bottom_right<U: Scalar + AsPrimitive<T>>(&mut self, point: &Point<U>) {
        self.right = point.x.as_();
        self.bottom = point.y.as_();
    }

    /// Returns the horizontal extent of the rectangle, `|right - left|`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let proper = Rect::<i32>::new(0, 0, 10, 10);
    /// let inverted = Rect::<i32>::new(10, 0, 0, 10);
    ///
    /// assert_eq!(proper.width(), 10);
    /// assert_eq!(inverted.width(), 10);
    /// ```
    pub fn width(&self) -> T {
        abs_diff(self.right, self.left)
    }

    /// Returns the vertical extent of the rectangle, `|bottom - top|`.
    pub fn height(&self) -> T {
        abs_diff(self.bottom, self.top)
    }

    /// Returns the area covered by the rectangle.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect = Rect::<f32>::new(-1.0, -1.0, 2.0, 1.0);
    ///
    /// assert_eq!(rect.area(), 6.0);
    /// ```
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Returns the point at the center of the rectangle.
    ///
    /// For integer types the coordinates are truncated.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect = Rect::<f32>::new(0.0, 0.0, 1.0, 3.0);
    /// let centre = rect.center();
    ///
    /// assert_eq!(centre.x, 0.5);
    /// assert_eq!(centre.y, 1.5);
    /// ```
    pub fn center(&self) -> Point<T> {
        let edges = self.edges_f64();
        Point {
            x: T::from_f64((edges[0] + edges[2]) * 0.5),
            y: T::from_f64((edges[1] + edges[3]) * 0.5),
        }
    }

    // left, top, right, bottom
    fn edges_f64(&self) -> [f64; 4] {
        [
            self.left.as_(),
            self.top.as_(),
            self.right.as_(),
            self.bottom.as_(),
        ]
    }

    /// Returns true if `left > right` or `top > bottom`.
    pub fn is_inverted(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Returns a copy of the rectangle with the edges swapped where needed, so that
    /// `left <= right` and `top <= bottom`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let inverted = Rect::<i32>::new(10, 8, 0, 2);
    /// let proper = inverted.normalized();
    ///
    /// assert!(inverted.is_inverted());
    /// assert!(!proper.is_inverted());
    /// assert_eq!(proper.left, 0);
    /// assert_eq!(proper.top, 2);
    /// ```
    #[must_use = "Rect::normalized() does not act in place!"]
    pub fn normalized(&self) -> Rect<T> {
        Rect {
            left: partial_min(self.left, self.right),
            top: partial_min(self.top, self.bottom),
            right: partial_max(self.left, self.right),
            bottom: partial_max(self.top, self.bottom),
        }
    }

    /// Returns true if the two rectangles share at least one point.
    ///
    /// Rectangles touching only along an edge or a corner are considered overlapping.
    ///
    /// Edges of different scalar types are compared in double precision, so no fractional part of
    /// `other` is lost.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect = Rect::<i32>::new(0, 0, 10, 10);
    ///
    /// assert!(rect.overlaps(&Rect::<i32>::new(5, 5, 15, 15)));
    /// assert!(rect.overlaps(&Rect::<f32>::new(10.0, 0.0, 20.0, 10.0)));
    /// assert!(!rect.overlaps(&Rect::<i32>::new(11, 0, 20, 10)));
    /// assert!(!rect.overlaps(&Rect::<f32>::new(10.5, 0.0, 20.0, 10.0)));
    /// ```
    pub fn overlaps<U: Scalar>(&self, other: &Rect<U>) -> bool {
        #[cfg(debug_assertions)]
        {
            if self.is_inverted() {
                warn!("Testing overlap with inverted rectangle {}", self);
            }
            if other.is_inverted() {
                warn!("Testing overlap against inverted rectangle {}", other);
            }
        }
        let [left, top, right, bottom] = self.edges_f64();
        let [o_left, o_top, o_right, o_bottom] = other.edges_f64();
        !(o_left > right || o_right < left || o_top > bottom || o_bottom < top)
    }

    /// Returns true if the given point is inside the rectangle or on its border.
    ///
    /// Coordinates of a different scalar type are compared in double precision, without
    /// truncating them to `T`.
    /// # Examples
    /// ```
    /// use math2d::geometry::{Point, Rect};
    ///
    /// let rect = Rect::<i32>::new(0, 0, 10, 10);
    ///
    /// assert!(rect.point_inside(&Point::<i32>::new(10, 10)));
    /// assert!(!rect.point_inside(&Point::<i32>::new(11, 5)));
    /// assert!(!rect.point_inside(&Point::<f32>::new(10.9, 5.0)));
    /// ```
    pub fn point_inside<U: Scalar>(&self, point: &Point<U>) -> bool {
        #[cfg(debug_assertions)]
        {
            if self.is_inverted() {
                warn!("Testing point containment in inverted rectangle {}", self);
            }
        }
        let [left, top, right, bottom] = self.edges_f64();
        let x: f64 = point.x.as_();
        let y: f64 = point.y.as_();
        !(x > right || y > bottom || x < left || y < top)
    }

    /// Creates a new, bigger, rectangle that encloses two rectangles: the current one and the one
    /// passed as input parameter.
    ///
    /// Both rectangles are normalized first. This is the bounding box union, unlike the `+`
    /// operator which adds the edges.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect0 = Rect::<i32>::new(0, 0, 2, 2);
    /// let rect1 = Rect::<i32>::new(5, 1, 6, 8);
    /// let merged = rect0.merge(&rect1);
    ///
    /// assert_eq!(merged.width(), 6);
    /// assert_eq!(merged.height(), 8);
    /// ```
    pub fn merge<U: Scalar + AsPrimitive<T>>(&self, other: &Rect<U>) -> Rect<T> {
        let this = self.normalized();
        let other = Rect::<T>::from_rect(other).normalized();
        Rect {
            left: partial_min(this.left, other.left),
            top: partial_min(this.top, other.top),
            right: partial_max(this.right, other.right),
            bottom: partial_max(this.bottom, other.bottom),
        }
    }

    /// Creates a new rectangle that encloses the current one and the given point.
    /// # Examples
    /// ```
    /// use math2d::geometry::{Point, Rect};
    ///
    /// let rect = Rect::<f32>::new(0.0, 0.0, 1.0, 1.0);
    /// let bigger = rect.engulf(&Point::<f32>::new(2.0, -1.0));
    ///
    /// assert_eq!(bigger.area(), 4.0);
    /// ```
    pub fn engulf<U: Scalar + AsPrimitive<T>>(&self, point: &Point<U>) -> Rect<T> {
        let this = self.normalized();
        let x: T = point.x.as_();
        let y: T = point.y.as_();
        Rect {
            left: partial_min(this.left, x),
            top: partial_min(this.top, y),
            right: partial_max(this.right, x),
            bottom: partial_max(this.bottom, y),
        }
    }

    /// Returns the region shared by the two rectangles, or None if they do not overlap.
    ///
    /// Rectangles touching along an edge produce a degenerate rectangle with zero width or height.
    /// # Examples
    /// ```
    /// use math2d::geometry::Rect;
    ///
    /// let rect0 = Rect::<i32>::new(0, 0, 10, 10);
    /// let rect1 = Rect::<i32>::new(5, 5, 15, 15);
    /// let shared = rect0.intersection(&rect1).unwrap();
    ///
    /// assert_eq!(shared.area(), 25);
    /// assert!(rect0.intersection(&Rect::<i32>::new(20, 20, 30, 30)).is_none());
    /// ```
    pub fn intersection<U: Scalar + AsPrimitive<T>>(&self, other: &Rect<U>) -> Option<Rect<T>> {
        let this = self.normalized();
        let other = Rect::<T>::from_rect(other).normalized();
        let shared = Rect {
            left: partial_max(this.left, other.left),
            top: partial_max(this.top, other.top),
            right: partial_min(this.right, other.right),
            bottom: partial_min(this.bottom, other.bottom),
        };
        if shared.is_inverted() {
            None
        } else {
            Some(shared)
        }
    }
}

impl<T: Scalar> std::fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl<T: Scalar, U: Scalar> PartialEq<Rect<U>> for Rect<T> {
    fn eq(&self, other: &Rect<U>) -> bool {
        approx_eq(self.left, other.left)
            && approx_eq(self.top, other.top)
            && approx_eq(self.right, other.right)
            && approx_eq(self.bottom, other.bottom)
    }
}

/// Adds each edge of the two rectangles: this is **not** the union of the two regions, which is
/// instead computed by [`Rect::merge`].
impl<T: Scalar, U: Scalar + AsPrimitive<T>> Add<Rect<U>> for Rect<T> {
    type Output = Rect<T>;

    fn add(self, rhs: Rect<U>) -> Rect<T> {
        let rhs = Rect::<T>::from_rect(&rhs);
        Rect {
            left: self.left + rhs.left,
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

impl<'a, 'b, T: Scalar, U: Scalar + AsPrimitive<T>> Add<&'b Rect<U>> for &'a Rect<T> {
    type Output = Rect<T>;

    fn add(self, rhs: &'b Rect<U>) -> Rect<T> {
        *self + *rhs
    }
}
