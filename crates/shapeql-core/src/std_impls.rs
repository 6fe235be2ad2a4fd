//! `Queryable` for std scalars and containers.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Queryable, TypeRef};

macro_rules! named_scalar {
    ($name:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Queryable for $ty {
                fn type_ref() -> TypeRef {
                    TypeRef::scalar($name)
                }
            }
        )+
    };
}

named_scalar!("Int" => i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
named_scalar!("Float" => f32, f64);
named_scalar!("Boolean" => bool);

macro_rules! text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Queryable for $ty {
                fn type_ref() -> TypeRef {
                    TypeRef::Text
                }
            }
        )+
    };
}

text!(String, str, char, Cow<'_, str>);

impl<T: Queryable> Queryable for Option<T> {
    fn type_ref() -> TypeRef {
        TypeRef::optional(T::type_ref())
    }
}

impl<T: Queryable> Queryable for Vec<T> {
    fn type_ref() -> TypeRef {
        TypeRef::list(T::type_ref())
    }
}

impl<T: Queryable> Queryable for VecDeque<T> {
    fn type_ref() -> TypeRef {
        TypeRef::list(T::type_ref())
    }
}

impl<T: Queryable> Queryable for [T] {
    fn type_ref() -> TypeRef {
        TypeRef::list(T::type_ref())
    }
}

impl<T: Queryable, const N: usize> Queryable for [T; N] {
    fn type_ref() -> TypeRef {
        TypeRef::list(T::type_ref())
    }
}

// Pointers are transparent: they neither add nullability nor cardinality.

impl<T: Queryable + ?Sized> Queryable for &T {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: Queryable + ?Sized> Queryable for Box<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: Queryable + ?Sized> Queryable for Rc<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}

impl<T: Queryable + ?Sized> Queryable for Arc<T> {
    fn type_ref() -> TypeRef {
        T::type_ref()
    }
}
