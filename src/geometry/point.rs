use crate::geometry::Vector;
use crate::utility::{abs_diff, approx_eq, sqr, Scalar};
use num::traits::AsPrimitive;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Sub, SubAssign};

///  Two coordinates representing a location in space
///
///  Point class represents a zero dimensional location in a two dimensional
///  cartesian space. It is designed as a separate class because by representing
///  a location, and not a direction, it shows a different behaviour in some
///  situations.
///
/// A Point consists of two coordinates, usually called `x` and `y`
#[derive(Debug, Default, Clone, Copy)]
pub struct Point<T> {
    /// The `x` coordinate of the point
    pub x: T,
    /// The `y` coordinate of the point
    pub y: T,
}

impl<T: Scalar> Point<T> {
    /// Construct a point in the origin of the cartesian space, with coordinates `(0, 0)`
    /// # Examples
    /// ```
    /// use math2d::geometry::Point;
    /// let p = Point::<f32>::zero();
    /// assert_eq!(p.x, 0.0);
    /// assert_eq!(p.y, 0.0);
    /// ```
    pub fn zero() -> Point<T> {
        Point {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Constructs a point in the space with the given `(x, y)` coordinates, converted to `T`
    /// # Examples
    /// ```
    /// use math2d::geometry::Point;
    /// let p = Point::<f64>::new(3.5, -2);
    /// assert_eq!(p.x, 3.5);
    /// assert_eq!(p.y, -2.0);
    /// ```
    pub fn new<U, V>(x: U, y: V) -> Point<T>
    where
        U: Scalar + AsPrimitive<T>,
        V: Scalar + AsPrimitive<T>,
    {
        Point {
            x: x.as_(),
            y: y.as_(),
        }
    }

    /// Constructs a point located at the given displacement from the origin
    /// # Examples
    /// ```
    /// use math2d::geometry::{Point, Vector};
    /// let v = Vector::<f32>::new(1.5, 2.5);
    /// let p = Point::<i32>::from_vector(&v);
    /// assert_eq!(p.x, 1);
    /// assert_eq!(p.y, 2);
    /// ```
    pub fn from_vector<U: Scalar + AsPrimitive<T>>(vector: &Vector<U>) -> Point<T> {
        Point {
            x: vector.x.as_(),
            y: vector.y.as_(),
        }
    }

    /// Returns the displacement of this point from the origin
    pub fn to_vector(&self) -> Vector<T> {
        Vector {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns a copy of this point with its coordinates converted to the scalar type `U`
    pub fn cast<U: Scalar>(&self) -> Point<U>
    where
        T: AsPrimitive<U>,
    {
        Point {
            x: self.x.as_(),
            y: self.y.as_(),
        }
    }

    /// Computes the euclidean distance between two points, by computing the length of the segment
    /// between them
    /// # Examples
    /// ```
    /// use math2d::geometry::Point;
    /// let p1 = Point::<f32>::new(-1., -1.);
    /// let p2 = Point::<f32>::new(2., 3.);
    /// assert_eq!(p1.distance(&p2), 5.);
    /// ```
    pub fn distance<U: Scalar + AsPrimitive<T>>(&self, other: &Point<U>) -> T {
        let x: T = other.x.as_();
        let y: T = other.y.as_();
        let dx: f64 = abs_diff(self.x, x).as_();
        let dy: f64 = abs_diff(self.y, y).as_();
        T::from_f64((sqr(dx) + sqr(dy)).sqrt())
    }
}

impl<T: Scalar> From<Vector<T>> for Point<T> {
    fn from(vector: Vector<T>) -> Self {
        Point {
            x: vector.x,
            y: vector.y,
        }
    }
}

impl<T: Scalar> std::fmt::Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point[{}, {}]", self.x, self.y)
    }
}

impl<T: Scalar, U: Scalar> PartialEq<Point<U>> for Point<T> {
    fn eq(&self, other: &Point<U>) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

// the result is always a Point in the scalar type of the left operand
macro_rules! point_op {
    ($rhs:ident, $trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar, U: Scalar + AsPrimitive<T>> $trait<$rhs<U>> for Point<T> {
            type Output = Point<T>;

            fn $method(self, rhs: $rhs<U>) -> Point<T> {
                let x: T = rhs.x.as_();
                let y: T = rhs.y.as_();
                Point {
                    x: self.x $op x,
                    y: self.y $op y,
                }
            }
        }

        impl<'a, 'b, T: Scalar, U: Scalar + AsPrimitive<T>> $trait<&'b $rhs<U>> for &'a Point<T> {
            type Output = Point<T>;

            fn $method(self, rhs: &'b $rhs<U>) -> Point<T> {
                *self $op *rhs
            }
        }
    };
}

point_op!(Point, Add, add, +);
point_op!(Point, Sub, sub, -);
point_op!(Vector, Add, add, +);
point_op!(Vector, Sub, sub, -);

impl<T: Scalar, U: Scalar + AsPrimitive<T>> AddAssign<Vector<U>> for Point<T> {
    fn add_assign(&mut self, rhs: Vector<U>) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, U: Scalar + AsPrimitive<T>> SubAssign<Vector<U>> for Point<T> {
    fn sub_assign(&mut self, rhs: Vector<U>) {
        *self = *self - rhs;
    }
}
