use ducttick::geometry::limits::MAX_PATH_VERTICES;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv, CoordsError};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "max", &JsValue::from_f64(max));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

pub fn coords(e: CoordsError) -> JsValue {
    let d = new_obj();
    match e {
        CoordsError::Odd(len) => {
            set_kv(&d, "len", &JsValue::from_f64(len as f64));
            err("odd_coords", "coordinate array must hold x,y pairs", Some(d.into()))
        }
        CoordsError::TooMany(n) => {
            set_kv(&d, "points", &JsValue::from_f64(n as f64));
            set_kv(&d, "max", &JsValue::from_f64(MAX_PATH_VERTICES as f64));
            err("too_many_points", "path exceeds the point limit", Some(d.into()))
        }
        CoordsError::NonFinite(i) => {
            set_kv(&d, "param", &JsValue::from_str("coords"));
            set_kv(&d, "index", &JsValue::from_f64(i as f64));
            err("non_finite", format!("point {} is not a usable coordinate", i), Some(d.into()))
        }
    }
}

pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}
