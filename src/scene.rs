//! One-shot scene assembly and the per-frame update step.
//!
//! [`Scene::new`] runs once at startup and produces the complete transform
//! tree: the sea, the cloud ring and the airplane, each a root of the
//! graph, inserted in draw order. After that the structure never changes;
//! [`Scene::update`] only mutates transforms.

use cgmath::Rad;
use rand::Rng;

use crate::animation::{
    AnimationState, PLANE_RANGE_X, PLANE_RANGE_Y, PROPELLER_SPIN_RATE, SEA_SPIN_RATE,
    SKY_SPIN_RATE,
};
use crate::data_structures::scene_graph::{NodeId, SceneGraph};
use crate::input;
use crate::objects::{
    airplane::{self, Airplane},
    sea, sky,
};

pub struct Scene {
    pub graph: SceneGraph,
    pub sea: NodeId,
    pub sky: NodeId,
    pub airplane: Airplane,
    pub animation: AnimationState,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Build the scene with a caller-supplied random source.
    pub fn with_rng(rng: &mut impl Rng) -> Self {
        let mut graph = SceneGraph::new();

        let sea = sea::build_sea(&mut graph);
        let sky = sky::build_sky(&mut graph, rng);
        let airplane = airplane::build_airplane(&mut graph);

        // Shrink the airplane to scene proportions and lift it to the
        // center of its vertical band.
        let root = graph.node_mut(airplane.root);
        root.transform.scale = [0.25; 3].into();
        root.transform.position.y = 100.0;

        graph.update_world_transforms();
        log::info!("scene constructed: {} nodes", graph.len());

        Self {
            graph,
            sea,
            sky,
            airplane,
            animation: AnimationState::new(),
        }
    }

    /// Advance the scene by one frame.
    ///
    /// Steps run in a fixed order; later steps may read what earlier ones
    /// wrote within the same frame:
    ///
    /// 1. roll the sea
    /// 2. roll the cloud ring
    /// 3. map the pointer onto the airplane's motion bands
    /// 4. move the airplane (direct assignment, no easing)
    /// 5. spin the propeller
    ///
    /// No other node is mutated. World transforms are recomputed at the end
    /// so rendering sees a consistent tree.
    pub fn update(&mut self) {
        let animation = &mut self.animation;

        animation.sea_rotation += SEA_SPIN_RATE;
        self.graph.node_mut(self.sea).transform.rotation.z = Rad(animation.sea_rotation);

        animation.sky_rotation += SKY_SPIN_RATE;
        self.graph.node_mut(self.sky).transform.rotation.z = Rad(animation.sky_rotation);

        let target_x = input::normalize(
            animation.pointer.x,
            -1.0,
            1.0,
            PLANE_RANGE_X.0,
            PLANE_RANGE_X.1,
        );
        let target_y = input::normalize(
            animation.pointer.y,
            -1.0,
            1.0,
            PLANE_RANGE_Y.0,
            PLANE_RANGE_Y.1,
        );
        let root = self.graph.node_mut(self.airplane.root);
        root.transform.position.x = target_x;
        root.transform.position.y = target_y;

        animation.propeller_rotation += PROPELLER_SPIN_RATE;
        self.graph
            .node_mut(self.airplane.propeller)
            .transform
            .rotation
            .x = Rad(animation.propeller_rotation);

        self.graph.update_world_transforms();
    }
}
