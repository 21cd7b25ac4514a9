// Formatting and scheduling helpers shared by the widgets

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn format_distance(km: f64) -> String {
    format!("{:.1} km away", km)
}

/// Radius as shown to users: "5km", "2.5km", "800m".
pub fn format_radius(meters: u32) -> String {
    if meters >= 1000 {
        let km = meters as f64 / 1000.0;
        if meters % 1000 == 0 {
            format!("{}km", meters / 1000)
        } else {
            format!("{:.1}km", km)
        }
    } else {
        format!("{}m", meters)
    }
}

/// Runs `f` once after `delay_ms`. Returns false if the timer could not be armed.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .is_ok()
}

pub fn alert(msg: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_every_field() {
        assert_eq!(format_clock(0, 0, 0), "00:00:00");
        assert_eq!(format_clock(1, 2, 3), "01:02:03");
        assert_eq!(format_clock(123, 59, 9), "123:59:09");
    }

    #[test]
    fn distance_one_decimal() {
        assert_eq!(format_distance(1.1999), "1.2 km away");
        assert_eq!(format_distance(3.8), "3.8 km away");
        assert_eq!(format_distance(0.04), "0.0 km away");
    }

    #[test]
    fn radius_labels() {
        assert_eq!(format_radius(5000), "5km");
        assert_eq!(format_radius(2500), "2.5km");
        assert_eq!(format_radius(800), "800m");
    }
}
