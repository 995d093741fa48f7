use ducttick::geometry::limits::{in_coord_bounds, MAX_PATH_VERTICES};
use ducttick::Vec2;
use js_sys::{Float64Array, Object, Reflect, Uint8Array};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_u8(slice: &[u8]) -> Uint8Array {
    let arr = Uint8Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}

pub fn flat_points(points: &[Vec2]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordsError {
    Odd(usize),
    TooMany(usize),
    NonFinite(usize),
}

/// `[x0, y0, x1, y1, ...]` into points; index in `NonFinite` is the point index.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<Vec2>, CoordsError> {
    if coords.len() % 2 != 0 { return Err(CoordsError::Odd(coords.len())); }
    let n = coords.len() / 2;
    if n > MAX_PATH_VERTICES { return Err(CoordsError::TooMany(n)); }
    let mut out = Vec::with_capacity(n);
    for (i, c) in coords.chunks_exact(2).enumerate() {
        if !(in_coord_bounds(c[0]) && in_coord_bounds(c[1])) { return Err(CoordsError::NonFinite(i)); }
        out.push(Vec2::new(c[0], c[1]));
    }
    Ok(out)
}
