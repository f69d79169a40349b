pub const CARD_LIFT_PX: f64 = -8.0;
pub const CARD_PERSPECTIVE_PX: f64 = 1000.0;

pub const OPACITY_HIDDEN: &str = "0";
pub const OPACITY_VISIBLE: &str = "1";
pub const DISPLAY_NONE: &str = "none";
pub const DISPLAY_BLOCK: &str = "block";

pub fn number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub fn px(value: f64) -> String {
    format!("{}px", number(value))
}

pub fn seconds(value: f64) -> String {
    format!("{}s", number(value))
}

pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({})", px(offset_px))
}

pub fn ease_transition(duration_s: f64) -> String {
    let duration = seconds(duration_s);
    format!("opacity {duration} ease, transform {duration} ease")
}

pub fn delayed_ease_transition(duration_s: f64, delay_s: f64) -> String {
    let duration = seconds(duration_s);
    let delay = seconds(delay_s);
    format!("opacity {duration} ease {delay}, transform {duration} ease {delay}")
}

pub fn transform_first_transition(duration_s: f64) -> String {
    let duration = seconds(duration_s);
    format!("transform {duration} ease, opacity {duration} ease")
}

pub fn tilt_transform(rotate_y_deg: f64, rotate_x_deg: f64) -> String {
    format!(
        "translateY({}) perspective({}) rotateY({}deg) rotateX({}deg)",
        px(CARD_LIFT_PX),
        px(CARD_PERSPECTIVE_PX),
        number(rotate_y_deg),
        number(rotate_x_deg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_float_noise() {
        assert_eq!(number(0.1 * 3.0), "0.3");
        assert_eq!(number(-0.0), "0");
        assert_eq!(px(20.0), "20px");
        assert_eq!(seconds(0.45), "0.45s");
    }

    #[test]
    fn transitions_match_css_shorthand() {
        assert_eq!(ease_transition(0.4), "opacity 0.4s ease, transform 0.4s ease");
        assert_eq!(
            delayed_ease_transition(0.6, 0.2),
            "opacity 0.6s ease 0.2s, transform 0.6s ease 0.2s"
        );
        assert_eq!(
            transform_first_transition(0.3),
            "transform 0.3s ease, opacity 0.3s ease"
        );
    }

    #[test]
    fn tilt_includes_lift_and_perspective() {
        assert_eq!(
            tilt_transform(1.5, -2.0),
            "translateY(-8px) perspective(1000px) rotateY(1.5deg) rotateX(-2deg)"
        );
    }
}
