use egui::{ImageSource, include_image};

use crate::template::ComponentKind;

pub struct ComponentGraphics {
    pub svg: ImageSource<'static>,
    /// Alternative picture for components with a second state
    pub svg_off: Option<ImageSource<'static>>,
}

pub static BOARD_GRAPHICS: ComponentGraphics = ComponentGraphics {
    svg: include_image!("../assets/board.svg"),
    svg_off: None,
};

pub static SWITCH_GRAPHICS: ComponentGraphics = ComponentGraphics {
    svg: include_image!("../assets/switch_on.svg"),
    svg_off: Some(include_image!("../assets/switch_off.svg")),
};

// the lit bulb is the same picture with a glow painted behind it
pub static LAMP_GRAPHICS: ComponentGraphics = ComponentGraphics {
    svg: include_image!("../assets/lamp.svg"),
    svg_off: None,
};

impl ComponentGraphics {
    pub fn for_kind(kind: ComponentKind) -> &'static Self {
        match kind {
            ComponentKind::DistributionBoard => &BOARD_GRAPHICS,
            ComponentKind::Switch(_) => &SWITCH_GRAPHICS,
            ComponentKind::Lamp => &LAMP_GRAPHICS,
        }
    }

    pub fn image(&self, on: bool) -> ImageSource<'static> {
        match (&self.svg_off, on) {
            (Some(off), false) => off.clone(),
            _ => self.svg.clone(),
        }
    }
}
