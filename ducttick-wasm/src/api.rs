use crate::DuctDocument;
use crate::error;
use crate::interop::{arr_f64, arr_u8, flat_points, new_obj, points_from_flat, set_kv};
use crate::ConsoleSink;
use ducttick::geometry::limits::{in_spacing_bounds, in_stripe_bounds, in_width_bounds, RADIUS_PERCENT_MAX, SPACING_MIN, WIDTH_MAX};
use ducttick::{FitOptions, KernelConfig, TickParams, Vec2, VertexPath};
use ducttick_host::{LinePrimitive, RenderRegistry, WidthLabel};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn fit_points(points: Vec<Vec2>, closed: bool, radius_percent: f64) -> Vec<Vec2> {
    ducttick::fit_path_with(
        &VertexPath::new(points, closed),
        &FitOptions::with_radius_percent(radius_percent),
        &ConsoleSink,
    )
}

fn ticks_flat(points: &[Vec2], spacing: f64, red: f64, blue: f64) -> Vec<f64> {
    let ticks = ducttick::place_ticks_with(points, &TickParams::new(spacing, red, blue), &ConsoleSink);
    let mut out = Vec::with_capacity(ticks.len() * 12);
    for t in &ticks {
        let e = t.endpoints();
        for p in [e.tick_start, e.red_end1, e.blue_start, e.blue_end, e.red_start2, e.tick_end] {
            out.push(p.x);
            out.push(p.y);
        }
    }
    out
}

fn check_radius_percent(rp: f64) -> Option<JsValue> {
    if !rp.is_finite() { return Some(error::non_finite("radius_percent")); }
    if !(rp > 0.0 && rp <= RADIUS_PERCENT_MAX) {
        return Some(error::out_of_range("radius_percent", 0.0, RADIUS_PERCENT_MAX, rp));
    }
    None
}

fn check_tick_params(spacing: f64, red: f64, blue: f64) -> Option<JsValue> {
    for (name, v) in [("spacing", spacing), ("red", red), ("blue", blue)] {
        if !v.is_finite() { return Some(error::non_finite(name)); }
    }
    if !in_spacing_bounds(spacing) { return Some(error::out_of_range("spacing", SPACING_MIN, f64::MAX, spacing)); }
    if !in_stripe_bounds(red) { return Some(error::out_of_range("red", 0.0, WIDTH_MAX, red)); }
    if !in_stripe_bounds(blue) { return Some(error::out_of_range("blue", 0.0, WIDTH_MAX, blue)); }
    None
}

fn lines_to_js(lines: &[LinePrimitive]) -> JsValue {
    let mut positions = Vec::with_capacity(lines.len() * 4);
    let mut colors = Vec::with_capacity(lines.len());
    for l in lines {
        positions.extend([l.start.x, l.start.y, l.end.x, l.end.y]);
        colors.push(l.color.0);
    }
    let o = new_obj();
    set_kv(&o, "positions", &arr_f64(&positions).into());
    set_kv(&o, "colors", &arr_u8(&colors).into());
    o.into()
}

// Kernel functions over flat [x0, y0, x1, y1, ...] arrays

#[wasm_bindgen]
pub fn fit_path(coords: &[f64], closed: bool, radius_percent: f64) -> Float64Array {
    match points_from_flat(coords) {
        Ok(pts) => arr_f64(&flat_points(&fit_points(pts, closed, radius_percent))),
        Err(_) => arr_f64(&[]),
    }
}
#[wasm_bindgen]
pub fn fit_path_res(coords: &[f64], closed: bool, radius_percent: f64) -> JsValue {
    let pts = match points_from_flat(coords) { Ok(p) => p, Err(e) => return error::coords(e) };
    if let Some(e) = check_radius_percent(radius_percent) { return e; }
    error::ok(arr_f64(&flat_points(&fit_points(pts, closed, radius_percent))).into())
}

#[wasm_bindgen]
pub fn path_length(coords: &[f64]) -> f64 {
    points_from_flat(coords).map(|p| ducttick::path_length(&p)).unwrap_or(0.0)
}
#[wasm_bindgen]
pub fn path_length_res(coords: &[f64]) -> JsValue {
    match points_from_flat(coords) {
        Ok(p) => error::ok(JsValue::from_f64(ducttick::path_length(&p))),
        Err(e) => error::coords(e),
    }
}

#[wasm_bindgen]
pub fn point_at(coords: &[f64], distance: f64) -> Float64Array {
    match points_from_flat(coords) {
        Ok(p) => { let q = ducttick::point_at(&p, distance); arr_f64(&[q.x, q.y]) }
        Err(_) => arr_f64(&[]),
    }
}
#[wasm_bindgen]
pub fn point_at_res(coords: &[f64], distance: f64) -> JsValue {
    let p = match points_from_flat(coords) { Ok(p) => p, Err(e) => return error::coords(e) };
    if !distance.is_finite() { return error::non_finite("distance"); }
    let q = ducttick::point_at(&p, distance);
    error::ok(arr_f64(&[q.x, q.y]).into())
}

#[wasm_bindgen]
pub fn tangent_at(coords: &[f64], distance: f64) -> Float64Array {
    match points_from_flat(coords) {
        Ok(p) => { let t = ducttick::tangent_at(&p, distance); arr_f64(&[t.x, t.y]) }
        Err(_) => arr_f64(&[]),
    }
}
#[wasm_bindgen]
pub fn tangent_at_res(coords: &[f64], distance: f64) -> JsValue {
    let p = match points_from_flat(coords) { Ok(p) => p, Err(e) => return error::coords(e) };
    if !distance.is_finite() { return error::non_finite("distance"); }
    let t = ducttick::tangent_at(&p, distance);
    error::ok(arr_f64(&[t.x, t.y]).into())
}

/// Twelve numbers per tick: the six endpoints from one end of the tick to the other.
#[wasm_bindgen]
pub fn place_ticks(coords: &[f64], spacing: f64, red: f64, blue: f64) -> Float64Array {
    match points_from_flat(coords) {
        Ok(p) => arr_f64(&ticks_flat(&p, spacing, red, blue)),
        Err(_) => arr_f64(&[]),
    }
}
#[wasm_bindgen]
pub fn place_ticks_res(coords: &[f64], spacing: f64, red: f64, blue: f64) -> JsValue {
    let p = match points_from_flat(coords) { Ok(p) => p, Err(e) => return error::coords(e) };
    if let Some(e) = check_tick_params(spacing, red, blue) { return e; }
    error::ok(arr_f64(&ticks_flat(&p, spacing, red, blue)).into())
}

#[wasm_bindgen]
impl DuctDocument {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DuctDocument {
        crate::DuctDocument::rs_new()
    }

    /// Replace the kernel settings from JSON. The registry is left as is.
    pub fn set_config_res(&mut self, json: &str) -> JsValue {
        match KernelConfig::from_json_str(json) {
            Ok(cfg) => {
                self.adapter = DuctDocument::rs_adapter(cfg);
                error::ok(JsValue::TRUE)
            }
            Err(e) => error::invalid_config(e.to_string()),
        }
    }
    pub fn config_json(&self) -> String {
        self.adapter.geometry().config().to_json_string().unwrap_or_default()
    }

    // Registry
    pub fn enable(&mut self, id: u32) {
        self.registry.enable(id)
    }
    pub fn enable_with_width(&mut self, id: u32, width: f64) -> bool {
        self.registry.enable_with_width(id, width).is_ok()
    }
    pub fn enable_with_width_res(&mut self, id: u32, width: f64) -> JsValue {
        if !width.is_finite() { return error::non_finite("width"); }
        if !in_width_bounds(width) { return error::out_of_range("width", 0.0, WIDTH_MAX, width); }
        error::ok(JsValue::from_bool(self.registry.enable_with_width(id, width).is_ok()))
    }
    pub fn disable(&mut self, id: u32) -> bool {
        self.registry.disable(id)
    }
    pub fn set_width(&mut self, id: u32, width: f64) -> bool {
        self.registry.set_width(id, width).unwrap_or(false)
    }
    pub fn set_width_res(&mut self, id: u32, width: f64) -> JsValue {
        if !width.is_finite() { return error::non_finite("width"); }
        if !in_width_bounds(width) { return error::out_of_range("width", 0.0, WIDTH_MAX, width); }
        match self.registry.set_width(id, width) {
            Ok(true) => error::ok(JsValue::TRUE),
            _ => error::invalid_id("path", id),
        }
    }
    pub fn width_of(&self, id: u32) -> Option<f64> {
        self.registry.width_of(id)
    }
    pub fn is_enabled(&self, id: u32) -> bool {
        self.registry.is_enabled(id)
    }
    pub fn clear(&mut self) {
        self.registry.clear()
    }
    pub fn len(&self) -> u32 {
        self.registry.len() as u32
    }
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // Rendering
    /// `{positions, colors}` for an enabled path, `null` otherwise.
    pub fn render(&self, id: u32, coords: &[f64], closed: bool) -> JsValue {
        let Ok(pts) = points_from_flat(coords) else { return JsValue::NULL };
        match self.adapter.render(&self.registry, id, &VertexPath::new(pts, closed)) {
            Some(lines) => lines_to_js(&lines),
            None => JsValue::NULL,
        }
    }
    pub fn render_res(&self, id: u32, coords: &[f64], closed: bool) -> JsValue {
        let pts = match points_from_flat(coords) { Ok(p) => p, Err(e) => return error::coords(e) };
        match self.adapter.render(&self.registry, id, &VertexPath::new(pts, closed)) {
            Some(lines) => error::ok(lines_to_js(&lines)),
            None => error::invalid_id("path", id),
        }
    }
    pub fn preview(&self, coords: &[f64], width: f64) -> JsValue {
        let Ok(pts) = points_from_flat(coords) else { return JsValue::NULL };
        lines_to_js(&self.adapter.preview(&VertexPath::open(pts), width))
    }
    /// Width tag for an enabled path: `{text, position: {x, y}, height, color}`.
    pub fn width_label(&self, id: u32, coords: &[f64]) -> JsValue {
        let (Some(width), Ok(pts)) = (self.registry.width_of(id), points_from_flat(coords)) else {
            return JsValue::NULL;
        };
        WidthLabel::for_path(&VertexPath::open(pts), width)
            .and_then(|l| serde_wasm_bindgen::to_value(&l).ok())
            .unwrap_or(JsValue::NULL)
    }

    // Persistence of the registry
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.registry).unwrap_or_default()
    }
    pub fn from_json_res(&mut self, json: &str) -> JsValue {
        match serde_json::from_str::<RenderRegistry>(json) {
            Ok(r) => {
                if let Err(e) = r.validate() { return error::invalid_config(e.to_string()); }
                self.registry = r;
                error::ok(JsValue::from_f64(self.registry.len() as f64))
            }
            Err(e) => error::invalid_config(e.to_string()),
        }
    }
}
