use js_sys::Date;

pub(crate) fn now_ms() -> u64 {
    Date::now().max(0.0) as u64
}
