//! Building a [`JsonValue`] from dynamically typed host data.
//!
//! Host data arrives as `&dyn Any`. Supported leaves are integers that fit
//! in `i64`, `f32`/`f64`, `String`/`&str`, `bool`, `()`, `JsonValue` and
//! `Box<dyn Any>` holding any supported shape. Containers are `Option<T>`,
//! `Vec<T>`, `HashMap<String, T>` and `BTreeMap<String, T>` over any of
//! those leaves; deeper native nesting goes through `Box<dyn Any>`.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::value::{JsonMap, JsonValue};

type AnyBox = Box<dyn Any>;

impl JsonValue {
    /// Convert host data. `None` when any part of it has an unsupported type.
    ///
    /// ```
    /// use std::any::Any;
    /// use dynamic_json_value::JsonValue;
    ///
    /// let items: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("two"), Box::new(3.5_f64)];
    /// let value = JsonValue::coerce_from(&items).unwrap();
    /// assert_eq!(value.to_string(), r#"[1,"two",3.5]"#);
    ///
    /// assert!(JsonValue::coerce_from(&'c').is_none());
    /// ```
    pub fn coerce_from(host: &dyn Any) -> Option<JsonValue> {
        coerce(host, Strictness::Reject)
    }

    /// Convert host data, replacing unsupported parts with `Null`.
    pub fn coerce_from_lossy(host: &dyn Any) -> JsonValue {
        coerce(host, Strictness::Replace).unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
enum Strictness {
    Reject,
    Replace,
}

macro_rules! try_scalar {
    ($host:expr, $($ty:ty),+) => {
        $(
            if let Some(n) = $host.downcast_ref::<$ty>() {
                return Some(JsonValue::from(*n));
            }
        )+
    };
}

macro_rules! try_containers {
    ($host:expr, $strictness:expr, $($ty:ty),+) => {
        $(
            if let Some(option) = $host.downcast_ref::<Option<$ty>>() {
                return match option {
                    Some(inner) => coerce(inner, $strictness),
                    None => Some(JsonValue::Null),
                };
            }
            if let Some(items) = $host.downcast_ref::<Vec<$ty>>() {
                return coerce_items(items.iter(), $strictness);
            }
            if let Some(map) = $host.downcast_ref::<HashMap<String, $ty>>() {
                return coerce_members(map.iter(), $strictness);
            }
            if let Some(map) = $host.downcast_ref::<BTreeMap<String, $ty>>() {
                return coerce_members(map.iter(), $strictness);
            }
        )+
    };
}

fn coerce(host: &dyn Any, strictness: Strictness) -> Option<JsonValue> {
    if let Some(inner) = host.downcast_ref::<AnyBox>() {
        return coerce(&**inner, strictness);
    }

    try_scalar!(host, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);

    if let Some(n) = host.downcast_ref::<u64>() {
        return wide_integer(i64::try_from(*n).ok(), strictness);
    }
    if let Some(n) = host.downcast_ref::<usize>() {
        return wide_integer(i64::try_from(*n).ok(), strictness);
    }
    if let Some(n) = host.downcast_ref::<isize>() {
        return wide_integer(i64::try_from(*n).ok(), strictness);
    }
    if let Some(s) = host.downcast_ref::<String>() {
        return Some(JsonValue::from(s.as_str()));
    }
    if let Some(s) = host.downcast_ref::<&str>() {
        return Some(JsonValue::from(*s));
    }
    if host.is::<()>() {
        return Some(JsonValue::Null);
    }
    if let Some(value) = host.downcast_ref::<JsonValue>() {
        return Some(value.clone());
    }

    try_containers!(
        host,
        strictness,
        AnyBox,
        JsonValue,
        i8,
        i16,
        i32,
        i64,
        isize,
        u8,
        u16,
        u32,
        u64,
        usize,
        f32,
        f64,
        bool,
        String,
        &'static str,
        ()
    );

    debug!(type_id = ?host.type_id(), "host value has no JSON counterpart");
    match strictness {
        Strictness::Reject => None,
        Strictness::Replace => Some(JsonValue::Null),
    }
}

fn wide_integer(n: Option<i64>, strictness: Strictness) -> Option<JsonValue> {
    match (n, strictness) {
        (Some(n), _) => Some(JsonValue::Integer(n)),
        (None, Strictness::Reject) => {
            debug!("host integer does not fit in i64");
            None
        }
        (None, Strictness::Replace) => Some(JsonValue::Null),
    }
}

fn coerce_items<'a, T: Any>(
    items: impl Iterator<Item = &'a T>,
    strictness: Strictness,
) -> Option<JsonValue> {
    items
        .map(|item| coerce(item, strictness))
        .collect::<Option<Vec<_>>>()
        .map(JsonValue::Array)
}

fn coerce_members<'a, T: Any>(
    members: impl Iterator<Item = (&'a String, &'a T)>,
    strictness: Strictness,
) -> Option<JsonValue> {
    let mut map = JsonMap::new();
    for (key, value) in members {
        map.insert(key.clone(), coerce(value, strictness)?);
    }
    Some(JsonValue::Object(map))
}
