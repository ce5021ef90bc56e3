use crate::error::{GeometryError, Result};
use crate::utility::{abs_diff, approx_eq, sqr, Scalar};
use log::debug;
use num::traits::AsPrimitive;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A vector of two components.
///
/// Vector class represents a displacement in a 2D space: a direction with a magnitude, as opposed
/// to the absolute location represented by a [`Point`](crate::geometry::Point).
///
/// A Vector consist of two coordinates, usually called `x`, and `y`, of any [`Scalar`] type.
/// Every operation accepts operands with a different scalar type: these are converted to the type
/// of the receiving vector before any computation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vector<T> {
    /// The `x` component of the vector.
    pub x: T,
    /// The `y` component of the vector.
    pub y: T,
}

impl<T: Scalar> Vector<T> {
    /// Constructs a 2D zero vector, a vector in the form `(0, 0)`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::zero();
    ///
    /// assert_eq!(v.x, 0.0);
    /// assert_eq!(v.y, 0.0);
    /// ```
    pub fn zero() -> Vector<T> {
        Vector {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Constructs a vector with the given `(x, y)` components.
    ///
    /// The components may have different types, and are both converted to `T`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(3.5, -2);
    ///
    /// assert_eq!(v.x, 3.5);
    /// assert_eq!(v.y, -2.0);
    /// ```
    pub fn new<U, V>(x: U, y: V) -> Vector<T>
    where
        U: Scalar + AsPrimitive<T>,
        V: Scalar + AsPrimitive<T>,
    {
        Vector {
            x: x.as_(),
            y: y.as_(),
        }
    }

    /// Constructs a vector by converting the components of a vector with a different scalar type.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<i32>::new(3, 4);
    /// let converted = Vector::<f64>::from_vector(&v);
    ///
    /// assert_eq!(converted.x, 3.0);
    /// assert_eq!(converted.y, 4.0);
    /// ```
    pub fn from_vector<U: Scalar + AsPrimitive<T>>(other: &Vector<U>) -> Vector<T> {
        Vector {
            x: other.x.as_(),
            y: other.y.as_(),
        }
    }

    /// Returns a copy of this vector with its components converted to the scalar type `U`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(1.9, -2.7);
    /// let truncated = v.cast::<i32>();
    ///
    /// assert_eq!(truncated.x, 1);
    /// assert_eq!(truncated.y, -2);
    /// ```
    pub fn cast<U: Scalar>(&self) -> Vector<U>
    where
        T: AsPrimitive<U>,
    {
        Vector {
            x: self.x.as_(),
            y: self.y.as_(),
        }
    }

    /// Replaces the components of this vector with the ones of `other`, converted to `T`.
    ///
    /// Returns the vector itself, so other in-place operations can be chained.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let mut v = Vector::<i32>::zero();
    /// v.assign(&Vector::<f64>::new(2.5, -1.5)).rotate(0.0);
    ///
    /// assert_eq!(v.x, 2);
    /// assert_eq!(v.y, -1);
    /// ```
    pub fn assign<U: Scalar + AsPrimitive<T>>(&mut self, other: &Vector<U>) -> &mut Self {
        self.x = other.x.as_();
        self.y = other.y.as_();
        self
    }

    /// Returns the euclidean length (or magnitude) of the vector.
    ///
    /// The square root is computed in double precision and converted back to `T`.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(3.0, 4.0);
    ///
    /// assert_eq!(v.length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        T::from_f64(self.length_f64())
    }

    /// Returns the squared euclidean length of the vector.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<i32>::new(3, 4);
    ///
    /// assert_eq!(v.length2(), 25);
    /// ```
    pub fn length2(&self) -> T {
        sqr(self.x) + sqr(self.y)
    }

    fn length_f64(&self) -> f64 {
        let x: f64 = self.x.as_();
        let y: f64 = self.y.as_();
        (sqr(x) + sqr(y)).sqrt()
    }

    /// Checks whether the vector is normalized or not.
    ///
    /// A small tolerance, proportional to the epsilon of `T`, is accepted.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let normalized = Vector::<f32>::new(1.0, 0.0);
    /// let not_normalized = Vector::<f32>::new(1.5, 0.5);
    ///
    /// assert!(normalized.is_normalized());
    /// assert!(!not_normalized.is_normalized());
    /// ```
    pub fn is_normalized(&self) -> bool {
        let epsilon: f64 = T::EPSILON.as_();
        let tolerance = epsilon * 4.0;
        (self.length_f64() - 1.0).abs() <= tolerance
    }

    /// Scales the vector in place so its length becomes 1.
    ///
    /// A vector with length zero has no direction and is left unchanged. Use
    /// [`Vector::try_normalize`] to detect this case.
    ///
    /// Returns the vector itself, so other in-place operations can be chained.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let mut v = Vector::<f64>::new(5.0, 0.0);
    /// v.normalize();
    /// assert_eq!(v.length(), 1.0);
    ///
    /// let mut zero = Vector::<f64>::zero();
    /// zero.normalize();
    /// assert_eq!(zero.length(), 0.0);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length_f64();
        if len > 0.0 {
            let x: f64 = self.x.as_();
            let y: f64 = self.y.as_();
            self.x = T::from_f64(x / len);
            self.y = T::from_f64(y / len);
        } else {
            debug!("Normalizing a zero-length vector, left unchanged");
        }
        self
    }

    /// Returns the normalized version of the current vector.
    ///
    /// The same rules of [`Vector::normalize`] apply.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(0.0, -3.0);
    /// let normalized = v.normalized();
    ///
    /// assert_eq!(normalized.y, -1.0);
    /// assert_eq!(v.y, -3.0);
    /// ```
    #[must_use = "Vector::normalized() does not act in place!"]
    pub fn normalized(&self) -> Vector<T> {
        let mut ret = *self;
        ret.normalize();
        ret
    }

    /// Scales the vector in place so its length becomes 1, failing on zero-length vectors.
    /// # Errors
    /// Returns [`GeometryError::DegenerateVector`] if the vector has length zero. In that case the
    /// vector is not modified.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    /// use math2d::GeometryError;
    ///
    /// let mut zero = Vector::<f32>::zero();
    ///
    /// assert_eq!(zero.try_normalize().err(), Some(GeometryError::DegenerateVector));
    /// ```
    pub fn try_normalize(&mut self) -> Result<&mut Self> {
        if self.length_f64() > 0.0 {
            Ok(self.normalize())
        } else {
            Err(GeometryError::DegenerateVector)
        }
    }

    /// Rotates the vector in place by `theta` radians, counterclockwise.
    ///
    /// Returns the vector itself, so other in-place operations can be chained.
    /// # Examples
    /// ```
    /// use assert_approx_eq::assert_approx_eq;
    /// use math2d::geometry::Vector;
    ///
    /// let mut v = Vector::<f64>::new(1.0, 0.0);
    /// v.rotate(std::f64::consts::FRAC_PI_2);
    ///
    /// assert_approx_eq!(v.x, 0.0);
    /// assert_approx_eq!(v.y, 1.0);
    /// ```
    pub fn rotate<U: Scalar>(&mut self, theta: U) -> &mut Self {
        let theta: f64 = theta.as_();
        let (sin, cos) = theta.sin_cos();
        // both components must be computed from the original pair
        let x: f64 = self.x.as_();
        let y: f64 = self.y.as_();
        self.x = T::from_f64(x * cos - y * sin);
        self.y = T::from_f64(x * sin + y * cos);
        self
    }

    /// Returns a copy of the current vector rotated by `theta` radians, counterclockwise.
    #[must_use = "Vector::rotated() does not act in place!"]
    pub fn rotated<U: Scalar>(&self, theta: U) -> Vector<T> {
        let mut ret = *self;
        ret.rotate(theta);
        ret
    }

    /// Performs the dot product between two vectors.
    ///
    /// Given two vectors `a` and `b` the dot product is defined as ‖`a`‖*‖`b`‖ cos`θ`, where ‖`x`‖
    /// represents the euclidean length of the vector `x`, and `θ` represents the angle between the
    /// two vectors.
    ///
    /// The result is expressed in the scalar type of the current vector.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(1.0, 2.0);
    /// let v2 = Vector::<i32>::new(4, -5);
    ///
    /// assert_eq!(v.dot(&v2), -6.0);
    /// ```
    pub fn dot<U: Scalar + AsPrimitive<T>>(&self, other: &Vector<U>) -> T {
        let x: T = other.x.as_();
        let y: T = other.y.as_();
        self.x * x + self.y * y
    }

    /// Returns the component-wise product `(x * other.y, y * other.x)`.
    ///
    /// Note that this is **not** the signed area of the parallelogram spanned by the two vectors,
    /// which is instead returned by [`Vector::perp_dot`].
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<i32>::new(2, 3);
    /// let cross = v.cross(&Vector::<i32>::new(4, 5));
    ///
    /// assert_eq!(cross.x, 10);
    /// assert_eq!(cross.y, 12);
    /// ```
    pub fn cross<U: Scalar + AsPrimitive<T>>(&self, other: &Vector<U>) -> Vector<T> {
        let x: T = other.x.as_();
        let y: T = other.y.as_();
        Vector {
            x: self.x * y,
            y: self.y * x,
        }
    }

    /// Returns the perpendicular dot product `x * other.y - y * other.x`.
    ///
    /// This is the signed area of the parallelogram spanned by the two vectors: positive if
    /// `other` is counterclockwise from the current vector. The area is computed and returned in
    /// double precision, so it keeps its sign for unsigned vectors too.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let right = Vector::<f32>::new(1.0, 0.0);
    /// let up = Vector::<f32>::new(0.0, 1.0);
    ///
    /// assert_eq!(right.perp_dot(&up), 1.0);
    /// assert_eq!(up.perp_dot(&right), -1.0);
    /// ```
    pub fn perp_dot<U: Scalar>(&self, other: &Vector<U>) -> f64 {
        let (ax, ay): (f64, f64) = (self.x.as_(), self.y.as_());
        let (bx, by): (f64, f64) = (other.x.as_(), other.y.as_());
        ax * by - ay * bx
    }

    /// Computes the euclidean distance between two vectors treated as positions.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v0 = Vector::<f64>::new(-1.0, -1.0);
    /// let v1 = Vector::<f64>::new(2.0, 3.0);
    ///
    /// assert_eq!(v0.distance(&v1), 5.0);
    /// ```
    pub fn distance<U: Scalar + AsPrimitive<T>>(&self, other: &Vector<U>) -> T {
        let x: T = other.x.as_();
        let y: T = other.y.as_();
        let dx: f64 = abs_diff(self.x, x).as_();
        let dy: f64 = abs_diff(self.y, y).as_();
        T::from_f64((sqr(dx) + sqr(dy)).sqrt())
    }

    /// Divides the vector by a scalar, failing if the scalar is zero.
    ///
    /// The plain `/` operator follows the division semantics of `T` instead (infinities for
    /// floating point types, a panic for integers).
    /// # Errors
    /// Returns [`GeometryError::DivisionByZero`] if `scalar`, once converted to `T`, is zero.
    /// # Examples
    /// ```
    /// use math2d::geometry::Vector;
    ///
    /// let v = Vector::<f32>::new(3.0, 4.0);
    ///
    /// assert_eq!(v.checked_div(2).unwrap().x, 1.5);
    /// assert!(v.checked_div(0.0).is_err());
    /// ```
    pub fn checked_div<U: Scalar + AsPrimitive<T>>(&self, scalar: U) -> Result<Vector<T>> {
        let scalar: T = scalar.as_();
        if scalar == T::zero() {
            Err(GeometryError::DivisionByZero)
        } else {
            Ok(Vector {
                x: self.x / scalar,
                y: self.y / scalar,
            })
        }
    }
}

impl<T: Scalar> std::fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector[{}, {}]", self.x, self.y)
    }
}

/// Two vectors are equal if both their components are equal according to [`approx_eq`].
impl<T: Scalar, U: Scalar> PartialEq<Vector<U>> for Vector<T> {
    fn eq(&self, other: &Vector<U>) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

macro_rules! vector_vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar, U: Scalar + AsPrimitive<T>> $trait<Vector<U>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<U>) -> Vector<T> {
                let x: T = rhs.x.as_();
                let y: T = rhs.y.as_();
                Vector {
                    x: self.x $op x,
                    y: self.y $op y,
                }
            }
        }

        impl<'a, 'b, T: Scalar, U: Scalar + AsPrimitive<T>> $trait<&'b Vector<U>> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &'b Vector<U>) -> Vector<T> {
                *self $op *rhs
            }
        }
    };
}

macro_rules! vector_vector_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar, U: Scalar + AsPrimitive<T>> $trait<Vector<U>> for Vector<T> {
            fn $method(&mut self, rhs: Vector<U>) {
                let x: T = rhs.x.as_();
                let y: T = rhs.y.as_();
                self.x = self.x $op x;
                self.y = self.y $op y;
            }
        }

        impl<'a, T: Scalar, U: Scalar + AsPrimitive<T>> $trait<&'a Vector<U>> for Vector<T> {
            fn $method(&mut self, rhs: &'a Vector<U>) {
                *self = *self $op *rhs;
            }
        }
    };
}

macro_rules! vector_scalar_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar, U: Scalar + AsPrimitive<T>> $trait<U> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: U) -> Vector<T> {
                let scalar: T = rhs.as_();
                Vector {
                    x: self.x $op scalar,
                    y: self.y $op scalar,
                }
            }
        }

        impl<'a, T: Scalar, U: Scalar + AsPrimitive<T>> $trait<U> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: U) -> Vector<T> {
                *self $op rhs
            }
        }

        impl<T: Scalar, U: Scalar + AsPrimitive<T>> $assign_trait<U> for Vector<T> {
            fn $assign_method(&mut self, rhs: U) {
                *self = *self $op rhs;
            }
        }
    };
}

vector_vector_op!(Add, add, +);
vector_vector_op!(Sub, sub, -);
vector_vector_assign_op!(AddAssign, add_assign, +);
vector_vector_assign_op!(SubAssign, sub_assign, -);
vector_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
vector_scalar_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<'a, T: Scalar + Neg<Output = T>> Neg for &'a Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -*self
    }
}
