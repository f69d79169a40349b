use crate::style;

pub const CARD_INTENSITY_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub move_x: f64,
    pub move_y: f64,
}

impl ParallaxOffset {
    pub fn from_pointer(
        client_x: f64,
        client_y: f64,
        viewport_w: f64,
        viewport_h: f64,
        intensity: f64,
    ) -> Self {
        let center_x = viewport_w / 2.0;
        let center_y = viewport_h / 2.0;
        Self {
            move_x: (client_x - center_x) * intensity,
            move_y: (client_y - center_y) * intensity,
        }
    }

    pub fn card_tilt(&self, index: usize) -> CardTilt {
        let intensity = 1.0 + index as f64 * CARD_INTENSITY_STEP;
        CardTilt {
            rotate_y_deg: self.move_x * intensity,
            rotate_x_deg: -self.move_y * intensity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTilt {
    pub rotate_y_deg: f64,
    pub rotate_x_deg: f64,
}

impl CardTilt {
    pub fn transform(&self) -> String {
        style::tilt_transform(self.rotate_y_deg, self.rotate_x_deg)
    }
}
