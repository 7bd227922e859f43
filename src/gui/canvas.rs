use std::collections::HashMap;

use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;
use nalgebra::{Point2, Translation2};

use super::colors::parse_color;
use crate::model::{format_physical_time, SpaceObject};
use crate::render::{to_screen, ImageId, Renderer};

/// Scene nodes for the objects currently on screen. Lives as long as the app.
#[derive(Default)]
pub struct SceneImages {
    nodes: HashMap<ImageId, PlanarSceneNode>,
    next_id: usize,
    time_label: String,
}

impl SceneImages {
    pub fn new(physical_time: f64) -> Self {
        SceneImages {
            time_label: format_physical_time(physical_time),
            ..Default::default()
        }
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }
}

/// Short-lived pairing of the window with our scene nodes, so that the
/// scheduler can draw through it.
pub struct Canvas<'a> {
    window: &'a mut Window,
    images: &'a mut SceneImages,
}

impl<'a> Canvas<'a> {
    pub fn new(window: &'a mut Window, images: &'a mut SceneImages) -> Self {
        Canvas { window, images }
    }
}

impl Renderer for Canvas<'_> {
    fn create(&mut self, object: &SpaceObject, scale_factor: f64) -> ImageId {
        let mut node = self.window.add_circle(object.radius as f32);
        let color = parse_color(&object.color);
        node.set_color(color.x, color.y, color.z);
        set_node_position(&mut node, to_screen(object, scale_factor));

        let id = ImageId(self.images.next_id);
        self.images.next_id += 1;
        self.images.nodes.insert(id, node);
        id
    }

    fn update(&mut self, image: ImageId, object: &SpaceObject, scale_factor: f64) {
        if let Some(node) = self.images.nodes.get_mut(&image) {
            set_node_position(node, to_screen(object, scale_factor));
        }
    }

    fn dispose(&mut self, image: ImageId) {
        if let Some(mut node) = self.images.nodes.remove(&image) {
            node.unlink();
        }
    }

    fn show_time(&mut self, physical_time: f64) {
        self.images.time_label = format_physical_time(physical_time);
    }
}

fn set_node_position(node: &mut PlanarSceneNode, position: Point2<f64>) {
    let position: Point2<f32> = nalgebra::convert(position);
    node.set_local_translation(Translation2::from(position.coords));
}
